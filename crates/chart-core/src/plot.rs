// File: crates/chart-core/src/plot.rs
// Summary: ScatterPlot: normalized records plus their scales, ready for a rendering surface.

use crate::error::ChartError;
use crate::record::{normalize, NormalizedRecord, RaceRecord};
use crate::scale::{build_scales, ScatterScales};
use crate::source::DataSource;
use crate::types::Layout;

/// Output of one normalization pass. Computed once per dataset and read-only afterwards.
#[derive(Clone, Debug)]
pub struct ScatterPlot {
    records: Vec<NormalizedRecord>,
    scales: ScatterScales,
    layout: Layout,
}

impl ScatterPlot {
    /// Normalize `records` and build scales over them.
    pub fn new(records: &[RaceRecord], layout: Layout) -> Result<Self, ChartError> {
        let records = normalize(records)?;
        let scales = build_scales(&records, layout)?;
        Ok(Self { records, scales, layout })
    }

    pub fn records(&self) -> &[NormalizedRecord] { &self.records }
    pub fn scales(&self) -> &ScatterScales { &self.scales }
    pub fn layout(&self) -> Layout { self.layout }

    /// Dot centres in record order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, &NormalizedRecord)> + '_ {
        self.records.iter().map(move |r| {
            let (x, y) = self.scales.position(r);
            (x, y, r)
        })
    }

    /// Index of the record whose dot (of `radius` px) contains the pixel, nearest centre first.
    pub fn hit_index(&self, px: f64, py: f64, radius: f64) -> Option<usize> {
        let r2 = radius * radius;
        self.points()
            .enumerate()
            .map(|(i, (x, y, _))| ((x - px).powi(2) + (y - py).powi(2), i))
            .filter(|(d2, _)| *d2 <= r2)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, i)| i)
    }

    pub fn hit_test(&self, px: f64, py: f64, radius: f64) -> Option<&NormalizedRecord> {
        self.hit_index(px, py, radius).map(|i| &self.records[i])
    }
}

/// Pull the dataset from `source` and run the normalization pass over it.
pub fn load_and_normalize(source: &dyn DataSource, layout: Layout) -> Result<ScatterPlot, ChartError> {
    let records = source.load()?;
    ScatterPlot::new(&records, layout)
}
