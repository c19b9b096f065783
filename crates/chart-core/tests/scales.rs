// File: crates/chart-core/tests/scales.rs
// Purpose: Scale construction over normalized records, plus tick layout.

use race_chart_core::grid::{duration_interval, duration_ticks, linear_ticks, nice_step};
use race_chart_core::{build_scales, normalize, Axis, ChartError, Layout, LinearScale, RaceRecord};

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

fn fixture() -> Vec<RaceRecord> {
    vec![
        RaceRecord::new("Marco Pantani", "ITA", 1995, "36:50"),
        RaceRecord::new("Miguel Indurain", "ESP", 1994, "37:15"),
        RaceRecord::new("Lance Armstrong", "USA", 2004, "37:36"),
        RaceRecord::new("Nairo Quintana", "COL", 2015, "39:23"),
    ]
}

#[test]
fn x_scale_spans_padded_width() {
    let layout = Layout::default();
    let recs = normalize(&fixture()).unwrap();
    let s = build_scales(&recs, layout).unwrap();
    assert!(close(s.x_px(1994), 60.0));
    assert!(close(s.x_px(2015), 940.0));
    assert!(s.x_px(1995) < s.x_px(2004));
}

#[test]
fn y_scale_puts_faster_times_higher() {
    let layout = Layout::default();
    let recs = normalize(&fixture()).unwrap();
    let s = build_scales(&recs, layout).unwrap();
    let fastest = 36 * 60_000 + 50_000;
    let slowest = 39 * 60_000 + 23_000;
    assert!(close(s.y_px(fastest), layout.padding as f64));
    assert!(close(s.y_px(slowest), (layout.height - layout.padding) as f64));
    assert!(s.y_px(fastest) < s.y_px(slowest));
    assert_eq!(s.y.domain, (slowest as f64, fastest as f64));
}

#[test]
fn empty_dataset_is_an_error() {
    let err = build_scales(&[], Layout::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn single_record_maps_to_range_midpoint() {
    let recs = normalize(&[RaceRecord::new("Solo", "FRA", 2000, "37:00")]).unwrap();
    let s = build_scales(&recs, Layout::default()).unwrap();
    assert!(close(s.x_px(2000), 500.0));
    assert!(close(s.y_px(2_220_000), 250.0));
}

#[test]
fn scales_are_pure() {
    let records = fixture();
    let recs = normalize(&records).unwrap();
    let before = recs.clone();
    let s = build_scales(&recs, Layout::new(800, 400, 40)).unwrap();
    assert_eq!(recs, before);
    assert_eq!(s.x_px(2001), s.x_px(2001));
    assert_eq!(s.y_px(2_250_000), s.y_px(2_250_000));
    assert_eq!(build_scales(&recs, Layout::new(800, 400, 40)).unwrap(), s);
}

#[test]
fn linear_scale_inverts() {
    let s = LinearScale::new((2_281_000.0, 2_215_000.0), (440.0, 60.0));
    let px = s.apply(2_250_000.0);
    assert!((s.invert(px) - 2_250_000.0).abs() < 1e-6);
    assert!(close(s.extent().0, 2_215_000.0));
}

#[test]
fn nice_steps_follow_one_two_five() {
    assert!(close(nice_step(21.0, 10), 2.0));
    assert!(close(nice_step(100.0, 10), 10.0));
    assert!(close(nice_step(40.0, 10), 5.0));
    assert!(close(nice_step(0.9, 10), 0.1));
}

#[test]
fn year_ticks_land_on_even_years() {
    let ticks = linear_ticks(1994.0, 2015.0, 10);
    assert_eq!(ticks.first().copied(), Some(1994.0));
    assert_eq!(ticks.last().copied(), Some(2014.0));
    assert_eq!(ticks.len(), 11);
}

#[test]
fn duration_ticks_use_fifteen_second_steps_for_a_few_minutes() {
    assert_eq!(duration_interval(200_000, 10), 15_000);
    assert_eq!(duration_interval(3_600_000, 10), 300_000);
    let ticks = duration_ticks(2_190_000, 2_390_000, 10);
    assert_eq!(ticks.first().copied(), Some(2_190_000));
    assert_eq!(ticks.last().copied(), Some(2_385_000));
    assert!(ticks.windows(2).all(|w| w[1] - w[0] == 15_000));
}

#[test]
fn axes_carry_formatted_labels() {
    let recs = normalize(&fixture()).unwrap();
    let s = build_scales(&recs, Layout::default()).unwrap();
    let x = Axis::years("Year", &s.x);
    assert_eq!(x.ticks.first().map(|t| t.label.as_str()), Some("1994"));
    let y = Axis::durations("Time in Minutes", &s.y);
    assert!(!y.ticks.is_empty());
    assert!(y.ticks.iter().all(|t| t.label.len() >= 4 && t.label.contains(':')));
    assert_eq!(y.ticks.first().map(|t| t.label.as_str()), Some("37:00"));
    // Later ticks are slower times, drawn further down (larger pixel y).
    assert!(y.ticks.windows(2).all(|w| w[0].px < w[1].px));
}

#[test]
fn duration_ticks_stay_bounded_on_huge_spans() {
    assert!(duration_ticks(0, 1000 * 3_600_000, 10).len() <= 21);
    assert!(duration_ticks(0, 60_000 * 60_000, 10).len() <= 21);
    assert!(duration_ticks(0, 999_999_999 * 60_000, 10).len() <= 21);
    assert_eq!(duration_interval(1000 * 3_600_000, 10), 100 * 3_600_000);
    // Just past an hour per tick still lands on whole hours.
    assert_eq!(duration_interval(12 * 3_600_000, 10), 3_600_000);
}

#[test]
fn duration_axis_over_huge_times_has_few_ticks() {
    let recs = normalize(&[
        RaceRecord::new("Fast", "ITA", 1994, "0:01"),
        RaceRecord::new("Slow", "ITA", 2003, "999999999:00"),
    ])
    .unwrap();
    let s = build_scales(&recs, Layout::default()).unwrap();
    let y = Axis::durations("Time in Minutes", &s.y);
    assert!(!y.ticks.is_empty() && y.ticks.len() <= 21, "{} ticks", y.ticks.len());
}

#[test]
fn layout_plot_area_check_saturates() {
    assert!(Layout::default().has_plot_area());
    assert!(!Layout::new(100, 500, 50).has_plot_area());
    assert!(!Layout::new(1000, 500, u32::MAX).has_plot_area());
    assert!(!Layout::new(u32::MAX, u32::MAX, u32::MAX / 2 + 1).has_plot_area());
}

#[test]
fn inverted_pixel_recovers_year_and_time() {
    let recs = normalize(&fixture()).unwrap();
    let s = build_scales(&recs, Layout::default()).unwrap();
    assert!((s.x.invert(s.x_px(2004)) - 2004.0).abs() < 1e-9);
    assert!((s.y.invert(Layout::default().padding as f64) - 2_210_000.0).abs() < 1e-6);
}
