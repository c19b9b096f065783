// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; race-time normalizer, scales, data sources and scatter rendering.

pub mod error;
pub mod types;
pub mod duration;
pub mod record;
pub mod scale;
pub mod grid;
pub mod axis;
pub mod plot;
pub mod source;
pub mod overlay;
pub mod geometry;
pub mod theme;
pub mod chart;

pub use error::{ChartError, FetchError};
pub use types::{Layout, Millis};
pub use duration::{format_duration, parse_duration};
pub use record::{normalize, NormalizedRecord, RaceRecord};
pub use scale::{build_scales, LinearScale, ScatterScales};
pub use axis::Axis;
pub use plot::{load_and_normalize, ScatterPlot};
pub use source::{parse_dataset_json, DataSource, DEFAULT_DATASET_URL};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use overlay::{Legend, OverlayEvent, Tooltip, TooltipOverlay};
pub use theme::Theme;
pub use chart::{RenderOptions, ScatterChart};
