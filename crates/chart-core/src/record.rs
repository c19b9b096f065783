// File: crates/chart-core/src/record.rs
// Summary: Race record model (dataset entry) and its normalized, duration-carrying form.

use serde::{Deserialize, Serialize};

use crate::duration::parse_duration;
use crate::error::ChartError;
use crate::types::Millis;

/// One entry of the cyclist dataset. Field names follow the published JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    /// Race time as `"MM:SS"`.
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Year")]
    pub year: i32,
    /// Free-text doping allegation. The dataset writes `""` for "none".
    #[serde(rename = "Doping", default)]
    pub doping: Option<String>,
    #[serde(rename = "Place", default, skip_serializing_if = "Option::is_none")]
    pub place: Option<u32>,
    #[serde(rename = "Seconds", default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u64>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RaceRecord {
    /// Minimal record; the optional dataset fields are left empty.
    pub fn new(
        name: impl Into<String>,
        nationality: impl Into<String>,
        year: i32,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            nationality: nationality.into(),
            time: time.into(),
            year,
            doping: None,
            place: None,
            seconds: None,
            url: None,
        }
    }

    pub fn with_doping(mut self, allegation: impl Into<String>) -> Self {
        self.doping = Some(allegation.into());
        self
    }

    /// The allegation text, if any. Empty text counts as no allegation.
    pub fn doping_allegation(&self) -> Option<&str> {
        self.doping.as_deref().filter(|d| !d.is_empty())
    }

    pub fn has_doping_allegation(&self) -> bool {
        self.doping_allegation().is_some()
    }
}

/// A race record together with its parsed duration. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedRecord {
    record: RaceRecord,
    duration_millis: Millis,
}

impl NormalizedRecord {
    /// Parse the record's time field; the record is copied, not modified.
    pub fn from_record(record: &RaceRecord) -> Result<Self, ChartError> {
        let duration_millis = parse_duration(&record.time)?;
        Ok(Self { record: record.clone(), duration_millis })
    }

    pub fn record(&self) -> &RaceRecord { &self.record }
    pub fn duration_millis(&self) -> Millis { self.duration_millis }
    pub fn year(&self) -> i32 { self.record.year }
    pub fn name(&self) -> &str { &self.record.name }
    pub fn nationality(&self) -> &str { &self.record.nationality }
    pub fn time(&self) -> &str { &self.record.time }
    pub fn doping_allegation(&self) -> Option<&str> { self.record.doping_allegation() }
    pub fn has_doping_allegation(&self) -> bool { self.record.has_doping_allegation() }
}

/// Normalize a whole dataset. The first malformed time aborts the pass.
pub fn normalize(records: &[RaceRecord]) -> Result<Vec<NormalizedRecord>, ChartError> {
    let out = records
        .iter()
        .map(NormalizedRecord::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = out.len(), "normalized race records");
    Ok(out)
}
