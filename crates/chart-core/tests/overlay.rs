// File: crates/chart-core/tests/overlay.rs
// Purpose: Hover hit-testing, tooltip content and the overlay handle lifecycle.

use race_chart_core::overlay::TOOLTIP_OFFSET_Y;
use race_chart_core::{Layout, Legend, OverlayEvent, RaceRecord, ScatterPlot, Tooltip, TooltipOverlay};

fn plot() -> ScatterPlot {
    let records = vec![
        RaceRecord::new("Marco Pantani", "ITA", 1995, "36:50").with_doping("High hematocrit <1995>"),
        RaceRecord::new("Miguel Indurain", "ESP", 1994, "37:15"),
        RaceRecord::new("Nairo Quintana", "COL", 2015, "39:23"),
    ];
    ScatterPlot::new(&records, Layout::default()).unwrap()
}

#[test]
fn hit_test_finds_dot_under_pointer() {
    let p = plot();
    let (x, y) = p.scales().position(&p.records()[1]);
    assert_eq!(p.hit_test(x, y, 7.5).map(|r| r.name()), Some("Miguel Indurain"));
    assert_eq!(p.hit_test(x + 5.0, y, 7.5).map(|r| r.name()), Some("Miguel Indurain"));
    assert!(p.hit_test(x + 8.0, y, 7.5).is_none());
    assert_eq!(p.hit_index(x, y, 7.5), Some(1));
}

#[test]
fn tooltip_text_matches_record() {
    let p = plot();
    let t = Tooltip::for_record(&p.records()[1]);
    assert_eq!(t.lines(), ["Miguel Indurain: ESP", "Year: 1994, Time: 37:15"]);
    assert_eq!(t.to_html(), "<div>Miguel Indurain: ESP</div><div>Year: 1994, Time: 37:15</div>");
}

#[test]
fn tooltip_html_appends_escaped_allegation() {
    let p = plot();
    let t = Tooltip::for_record(&p.records()[0]);
    assert_eq!(t.lines().len(), 3);
    assert!(t.to_html().ends_with("<br /><div>High hematocrit &lt;1995&gt;</div>"));
}

#[test]
fn overlay_shows_and_hides_tooltip() {
    let p = plot();
    let overlay = TooltipOverlay::new();
    assert!(!overlay.is_visible());

    let (x, y) = p.scales().position(&p.records()[2]);
    overlay.handle_event(&OverlayEvent::PointerMove { x, y }, &p);
    let state = overlay.current().expect("tooltip visible");
    assert_eq!(state.index, 2);
    assert_eq!(state.tooltip.year, 2015);
    assert_eq!(state.anchor, (x, y - TOOLTIP_OFFSET_Y));

    overlay.handle_event(&OverlayEvent::PointerMove { x: 0.0, y: 0.0 }, &p);
    assert!(!overlay.is_visible());

    overlay.handle_event(&OverlayEvent::PointerMove { x, y }, &p);
    overlay.handle_event(&OverlayEvent::PointerLeave, &p);
    assert!(overlay.current().is_none());
}

#[test]
fn legend_lists_both_categories() {
    let legend = Legend::default();
    assert_eq!(legend.entries[0].label, "Doping Allegations");
    assert!(legend.entries[0].doping);
    assert_eq!(legend.entries[1].label, "No Doping Allegations");
    assert!(!legend.entries[1].doping);
}
