// File: crates/chart-core/src/axis.rs
// Summary: Axis model: title plus tick values, pixel positions and labels derived from a scale.

use crate::duration::format_duration;
use crate::grid::{duration_ticks, linear_ticks, DEFAULT_TICK_COUNT};
use crate::scale::LinearScale;
use crate::types::Millis;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub px: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    /// Year axis; ticks on whole years only, labelled without separators.
    pub fn years(label: impl Into<String>, scale: &LinearScale) -> Self {
        let (lo, hi) = scale.extent();
        let ticks = linear_ticks(lo, hi, DEFAULT_TICK_COUNT)
            .into_iter()
            .filter(|v| v.fract() == 0.0)
            .map(|v| AxisTick { value: v, px: scale.apply(v), label: format!("{}", v as i64) })
            .collect();
        Self { label: label.into(), ticks }
    }

    /// Duration axis with `M:SS` labels.
    pub fn durations(label: impl Into<String>, scale: &LinearScale) -> Self {
        let (lo, hi) = scale.extent();
        let ticks = duration_ticks(lo.max(0.0) as Millis, hi.max(0.0) as Millis, DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|ms| AxisTick { value: ms as f64, px: scale.apply(ms as f64), label: format_duration(ms) })
            .collect();
        Self { label: label.into(), ticks }
    }
}
