// File: crates/chart-core/src/source.rs
// Summary: Data sources producing race records: caller-supplied loaders, HTTP, JSON and CSV files.

use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::record::RaceRecord;

/// Public cyclist dataset the chart was designed around.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Anything that can hand over the full record sequence in one go.
pub trait DataSource {
    fn load(&self) -> Result<Vec<RaceRecord>, FetchError>;
}

/// A plain loading function is a source, which keeps in-memory fixtures trivial.
impl<F> DataSource for F
where
    F: Fn() -> Result<Vec<RaceRecord>, FetchError>,
{
    fn load(&self) -> Result<Vec<RaceRecord>, FetchError> {
        self()
    }
}

/// Parse the dataset's JSON array form.
pub fn parse_dataset_json(text: &str) -> Result<Vec<RaceRecord>, FetchError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a CSV export with the dataset's column names as headers.
pub fn parse_dataset_csv<R: std::io::Read>(reader: R) -> Result<Vec<RaceRecord>, FetchError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}

/// Blocking GET of a JSON dataset.
#[cfg(feature = "http")]
#[derive(Clone, Debug)]
pub struct HttpSource {
    pub url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "http")]
impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_URL)
    }
}

#[cfg(feature = "http")]
impl DataSource for HttpSource {
    fn load(&self) -> Result<Vec<RaceRecord>, FetchError> {
        tracing::info!(url = %self.url, "fetching dataset");
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let records: Vec<RaceRecord> = client.get(&self.url).send()?.error_for_status()?.json()?;
        tracing::info!(count = records.len(), "dataset fetched");
        Ok(records)
    }
}

/// Local copy of the JSON dataset.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<Vec<RaceRecord>, FetchError> {
        tracing::info!(path = %self.path.display(), "reading JSON dataset");
        let text = std::fs::read_to_string(&self.path)?;
        parse_dataset_json(&text)
    }
}

/// CSV file with `Name,Nationality,Time,Year,Doping,...` headers.
#[derive(Clone, Debug)]
pub struct CsvFileSource {
    pub path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for CsvFileSource {
    fn load(&self) -> Result<Vec<RaceRecord>, FetchError> {
        tracing::info!(path = %self.path.display(), "reading CSV dataset");
        let file = std::fs::File::open(&self.path)?;
        parse_dataset_csv(file)
    }
}

/// Pick a file source by extension (`.json` or `.csv`, case-insensitive).
pub fn file_source(path: impl AsRef<Path>) -> Result<Box<dyn DataSource>, FetchError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => Ok(Box::new(JsonFileSource::new(path))),
        "csv" => Ok(Box::new(CsvFileSource::new(path))),
        _ => Err(FetchError::UnsupportedFormat(path.display().to_string())),
    }
}
