// File: crates/chart-core/src/scale.rs
// Summary: Linear year (X) and duration (Y) scales built from a normalized dataset.

use crate::error::ChartError;
use crate::record::NormalizedRecord;
use crate::types::{Layout, Millis};

/// Continuous linear map from a domain interval onto a pixel interval.
/// Either interval may be inverted (`d0 > d1` or `r0 > r1`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to a pixel. Values outside the domain extrapolate.
    /// A collapsed domain maps everything to the middle of the range.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span.abs() < f64::EPSILON { 0.5 } else { (v - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Map a pixel back to the domain, e.g. a pointer position to the year or time under it.
    /// A collapsed domain returns its only value.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span.abs() < f64::EPSILON || (d1 - d0).abs() < f64::EPSILON {
            return d0;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }

    /// Domain bounds as `(low, high)` regardless of orientation.
    pub fn extent(&self) -> (f64, f64) {
        let (a, b) = self.domain;
        (a.min(b), a.max(b))
    }
}

/// The two scales a rendering surface needs to place race records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterScales {
    /// Year -> pixel-x, domain `[min year, max year]`.
    pub x: LinearScale,
    /// Duration (ms) -> pixel-y, domain `[max duration, min duration]` so faster times sit higher.
    pub y: LinearScale,
}

impl ScatterScales {
    #[inline]
    pub fn x_px(&self, year: i32) -> f64 { self.x.apply(year as f64) }
    #[inline]
    pub fn y_px(&self, duration: Millis) -> f64 { self.y.apply(duration as f64) }
    /// Pixel position of a record's dot.
    pub fn position(&self, rec: &NormalizedRecord) -> (f64, f64) {
        (self.x_px(rec.year()), self.y_px(rec.duration_millis()))
    }
}

/// Build both scales over the full dataset. Fails on an empty dataset instead of
/// producing a scale with undefined bounds.
pub fn build_scales(records: &[NormalizedRecord], layout: Layout) -> Result<ScatterScales, ChartError> {
    let first = records.first().ok_or(ChartError::EmptyDataset)?;
    let (mut y_min, mut y_max) = (first.year(), first.year());
    let (mut d_min, mut d_max) = (first.duration_millis(), first.duration_millis());
    for r in &records[1..] {
        y_min = y_min.min(r.year());
        y_max = y_max.max(r.year());
        d_min = d_min.min(r.duration_millis());
        d_max = d_max.max(r.duration_millis());
    }
    tracing::debug!(y_min, y_max, d_min, d_max, "scale domains");

    Ok(ScatterScales {
        x: LinearScale::new((y_min as f64, y_max as f64), layout.x_range()),
        y: LinearScale::new((d_max as f64, d_min as f64), layout.y_range()),
    })
}
