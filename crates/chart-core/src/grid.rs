// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" linear steps and duration intervals.

use crate::types::Millis;

/// Tick count the axes aim for.
pub const DEFAULT_TICK_COUNT: usize = 10;

const MILLIS_PER_HOUR: Millis = 60 * 60_000;

const DURATION_INTERVALS: &[Millis] = &[
    1_000, 5_000, 15_000, 30_000,
    60_000, 5 * 60_000, 15 * 60_000, 30 * 60_000,
    MILLIS_PER_HOUR,
];

/// Step of 1, 2 or 5 times a power of ten giving roughly `count` intervals over `span`.
pub fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span.abs() / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() { return 1.0; }
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Multiples of `nice_step` inside `[lo, hi]`, ascending. A collapsed interval yields its value.
pub fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    if (hi - lo).abs() < f64::EPSILON { return vec![lo]; }
    let step = nice_step(hi - lo, count);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Interval from [`DURATION_INTERVALS`] closest (by ratio) to `span / count`.
/// Past one hour per tick, a nice step over whole hours.
pub fn duration_interval(span: Millis, count: usize) -> Millis {
    let target = span as f64 / count.max(1) as f64;
    if target <= 0.0 { return DURATION_INTERVALS[0]; }
    if target > MILLIS_PER_HOUR as f64 {
        let hours = nice_step(span as f64 / MILLIS_PER_HOUR as f64, count).ceil().max(1.0);
        return (hours as Millis).saturating_mul(MILLIS_PER_HOUR);
    }
    let ratio = |iv: Millis| {
        let r = iv as f64 / target;
        if r >= 1.0 { r } else { 1.0 / r }
    };
    DURATION_INTERVALS
        .iter()
        .copied()
        .min_by(|a, b| ratio(*a).total_cmp(&ratio(*b)))
        .unwrap_or(DURATION_INTERVALS[0])
}

/// Multiples of the chosen duration interval inside `[lo, hi]`, ascending.
pub fn duration_ticks(lo: Millis, hi: Millis, count: usize) -> Vec<Millis> {
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    if lo == hi { return vec![lo]; }
    let step = duration_interval(hi - lo, count);
    let first = lo.div_ceil(step);
    let last = hi / step;
    (first..=last).map(|k| k * step).collect()
}
