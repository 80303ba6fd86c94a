//! Dataset loading. Fetching is the only asynchronous step; everything after
//! it runs synchronously on the loaded data.

use log::debug;
use serde_json::Value;

use crate::error::LoadError;
use crate::record::{WorkingSet, filter_records};

/// Somewhere the raw dataset bytes come from.
#[allow(async_fn_in_trait)]
pub trait DatasetSource {
    /// Where the data lives, for diagnostics.
    fn location(&self) -> String;

    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// A dataset already held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn from_json(value: &Value) -> Self {
        Self::new(value.to_string())
    }
}

impl DatasetSource for StaticSource {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.bytes.clone())
    }
}

/// A dataset file on the local file system.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: std::path::PathBuf,
}

#[cfg(feature = "native")]
impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "native")]
impl DatasetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        std::fs::read(&self.path).map_err(|e| LoadError::fetch(self.location(), e))
    }
}

/// Fetch the dataset, parse it, and keep the displayable records.
///
/// The top-level JSON value must be an array; anything else is a load
/// failure. Individual entries may have any shape.
pub async fn load_working_set<S: DatasetSource>(source: &S) -> Result<WorkingSet, LoadError> {
    let bytes = source.fetch().await?;
    let data: Value = serde_json::from_slice(&bytes)?;

    let entries = match data {
        Value::Array(entries) => entries,
        other => {
            return Err(LoadError::NotACollection {
                found: json_kind(&other),
            });
        }
    };

    let working_set = filter_records(&entries);
    debug!(
        "Loaded {} entries from {}, {} displayable",
        entries.len(),
        source.location(),
        working_set.len()
    );
    Ok(working_set)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
