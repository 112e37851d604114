// crates/yatra-core/src/loader/source.rs
use super::{Row, TableSource};
use crate::error::{Result, TourError};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a table file, transparently gunzipping `*.gz` when `compact` is on.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TourError::DataUnavailable(format!("table not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if path.extension().is_some_and(|ext| ext == "gz") {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

/// Splits a JSON array of objects into rows.
pub fn rows_from_value(value: Value) -> Result<Vec<Row>> {
    let Value::Array(items) = value else {
        return Err(TourError::InvalidData("table is not a JSON array".into()));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(row) => Ok(row),
            other => Err(TourError::InvalidData(format!(
                "row {i} is not an object: {other}"
            ))),
        })
        .collect()
}

// ---- directory ----

/// Tables stored as `<dir>/<name>.json` (or `<name>.json.gz` with `compact`).
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file backing `name`. With `compact` a gzipped copy is preferred
    /// when present.
    pub fn table_path(&self, name: &str) -> PathBuf {
        #[cfg(feature = "compact")]
        {
            let gz = self.dir.join(format!("{name}.json.gz"));
            if gz.exists() {
                return gz;
            }
        }
        self.dir.join(format!("{name}.json"))
    }
}

impl TableSource for DirSource {
    fn load_table(&self, name: &str) -> Result<Vec<Row>> {
        let path = self.table_path(name);
        tracing::debug!(table = name, path = %path.display(), "reading table");
        let reader = open_stream(&path)?;
        let value: Value = serde_json::from_reader(reader)?;
        rows_from_value(value)
    }
}

// ---- memory ----

/// Tables held in memory. A table that was never inserted is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<String, Vec<Row>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.tables.insert(name.into(), rows);
        self
    }

    /// Inserts a table given as a JSON array of objects.
    pub fn with_json(self, name: impl Into<String>, value: Value) -> Result<Self> {
        let rows = rows_from_value(value)?;
        Ok(self.with_table(name, rows))
    }
}

impl TableSource for MemorySource {
    fn load_table(&self, name: &str) -> Result<Vec<Row>> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| TourError::DataUnavailable(format!("no table named {name:?}")))
    }
}
