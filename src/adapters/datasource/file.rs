//! Local JSON export source
//!
//! Reads a full database export: one JSON object whose top-level keys are the
//! collection names. The file is read once on open.

use super::traits::DataSource;
use crate::domain::{DashboardError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Snapshot source backed by a JSON export on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    collections: Map<String, Value>,
}

impl JsonFileSource {
    /// Reads and parses the export at `path`
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Io`] if the file cannot be read and
    /// [`DashboardError::Serialization`] if it is not a JSON object.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DashboardError::Io(format!("Failed to read snapshot {}: {e}", path.display()))
        })?;

        let collections = match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => map,
            other => {
                return Err(DashboardError::Serialization(format!(
                    "Snapshot {} must be a JSON object, found {}",
                    path.display(),
                    json_kind(&other)
                )))
            }
        };

        tracing::info!(
            path = %path.display(),
            collections = collections.len(),
            "Opened snapshot file"
        );

        Ok(Self { path, collections })
    }

    /// Builds a source from an in-memory export
    pub fn from_value(path: impl Into<PathBuf>, collections: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            collections,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn read_collection(&self, name: &str) -> Result<Option<Value>> {
        Ok(match self.collections.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.clone()),
        })
    }

    fn describe(&self) -> String {
        format!("snapshot file {}", self.path.display())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
