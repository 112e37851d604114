// crates/yatra-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads the five backing tables through a [`TableSource`], converts them
//! into typed models and keeps a binary cache of the result next to the
//! table files.

use crate::error::{Result, TourError};
use crate::model::convert;
use crate::model::{HotspotTable, PlaceCatalog, QaTable, StoryBook, CACHE_SUFFIX};
use crate::visitors::VisitorTable;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod cache;
mod source;

pub use cache::CompressionMode;
pub use source::{open_stream, rows_from_value, DirSource, MemorySource};

/// One table row: column name -> cell.
pub type Row = serde_json::Map<String, serde_json::Value>;

pub const PLACES_TABLE: &str = "top_places_to_visit";
pub const QA_TABLE: &str = "cleaned_train";
pub const HOTSPOTS_TABLE: &str = "cleaned_cultural_hotspots";
pub const VISITORS_TABLE: &str = "tourism_stats";
pub const STORIES_TABLE: &str = "cleaned_train_storyguide";

pub const TABLE_NAMES: [&str; 5] = [
    PLACES_TABLE,
    QA_TABLE,
    HOTSPOTS_TABLE,
    VISITORS_TABLE,
    STORIES_TABLE,
];

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// A source of named tables.
pub trait TableSource {
    fn load_table(&self, name: &str) -> Result<Vec<Row>>;
}

/// Every table the application works with, loaded and typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub places: PlaceCatalog,
    pub qa: QaTable,
    pub hotspots: HotspotTable,
    pub visitors: VisitorTable,
    pub stories: StoryBook,
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub places: usize,
    pub qa_pairs: usize,
    pub hotspots: usize,
    pub mappable_hotspots: usize,
    pub visitor_rows: usize,
    pub stories: usize,
}

/// Loads one table and converts it; any failure becomes `DataUnavailable`
/// naming the table.
fn load_with<S, T, F>(source: &S, name: &str, convert: F) -> Result<T>
where
    S: TableSource + ?Sized,
    F: FnOnce(Vec<Row>) -> Result<T>,
{
    source
        .load_table(name)
        .and_then(convert)
        .map_err(|e| match e {
            TourError::DataUnavailable(msg) => TourError::DataUnavailable(format!("{name}: {msg}")),
            other => TourError::DataUnavailable(format!("{name}: {other}")),
        })
}

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn cache_file_name() -> String {
        format!("dataset{CACHE_SUFFIX}")
    }

    /// The bundled dataset, loaded once per process.
    pub fn load() -> Result<&'static Dataset> {
        DATASET.get_or_try_init(|| Self::load_from_dir(Self::default_data_dir()))
    }

    /// Builds the dataset from any table source. No cache is involved.
    pub fn from_source<S: TableSource + ?Sized>(source: &S) -> Result<Self> {
        let places = load_with(source, PLACES_TABLE, convert::places_from_rows)?;
        let qa = load_with(source, QA_TABLE, convert::qa_from_rows)?;
        let hotspots = load_with(source, HOTSPOTS_TABLE, convert::hotspots_from_rows)?;
        let visitors = load_with(source, VISITORS_TABLE, |rows| VisitorTable::from_rows(&rows))?;
        let stories = load_with(source, STORIES_TABLE, convert::stories_from_rows)?;

        let db = Self {
            places,
            qa,
            hotspots,
            visitors,
            stories,
        };
        tracing::info!(stats = ?db.stats(), "dataset built from tables");
        Ok(db)
    }

    /// **Smart Load:** uses the binary cache in `dir` when it is newer than
    /// every table, otherwise builds from the tables and refreshes the cache.
    ///
    /// A corrupt cache is ignored. Failing to write the cache is logged and
    /// does not fail the load.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let source = DirSource::new(dir.as_ref());
        let cache_path = dir.as_ref().join(Self::cache_file_name());
        let tables: Vec<PathBuf> = TABLE_NAMES.iter().map(|n| source.table_path(n)).collect();

        if cache::is_cache_fresh(&cache_path, tables.iter().map(PathBuf::as_path)) {
            match cache::read_generic::<Self>(&cache_path, CompressionMode::active()) {
                Ok(db) => {
                    tracing::debug!(path = %cache_path.display(), "dataset cache hit");
                    return Ok(db);
                }
                Err(e) => {
                    tracing::warn!(path = %cache_path.display(), error = %e, "ignoring unreadable dataset cache");
                }
            }
        } else {
            tracing::debug!(path = %cache_path.display(), "dataset cache missing or stale");
        }

        let db = Self::from_source(&source)?;

        if let Err(e) = db.save_as(&cache_path) {
            tracing::warn!(path = %cache_path.display(), error = %e, "could not write dataset cache");
        }

        Ok(db)
    }

    /// Writes the dataset as a binary cache file.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        cache::write_generic(path.as_ref(), self, CompressionMode::active())
    }

    /// Reads a file written by [`Dataset::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        cache::read_generic(path.as_ref(), CompressionMode::active())
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            places: self.places.len(),
            qa_pairs: self.qa.len(),
            hotspots: self.hotspots.len(),
            mappable_hotspots: self.hotspots.mappable().count(),
            visitor_rows: self.visitors.len(),
            stories: self.stories.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_json(PLACES_TABLE, json!([{"Zone": "Northern", "State": "Delhi", "City": "Delhi", "Name": "Red Fort"}]))
            .and_then(|s| s.with_json(QA_TABLE, json!([{"c1": "q", "c2": "a"}])))
            .and_then(|s| s.with_json(HOTSPOTS_TABLE, json!([])))
            .and_then(|s| s.with_json(VISITORS_TABLE, json!([{"States/UTs *": "Goa", "Domestic -2019": 5}])))
            .and_then(|s| s.with_json(STORIES_TABLE, json!([{"FESTIVAL_NAME": "Onam"}])))
            .unwrap()
    }

    #[test]
    fn builds_every_table() {
        let db = Dataset::from_source(&source()).unwrap();
        let stats = db.stats();
        assert_eq!(stats.places, 1);
        assert_eq!(stats.qa_pairs, 1);
        assert_eq!(stats.hotspots, 0);
        assert_eq!(stats.visitor_rows, 1);
        assert_eq!(stats.stories, 1);
    }

    #[test]
    fn missing_table_names_itself() {
        let src = MemorySource::new()
            .with_json(PLACES_TABLE, json!([]))
            .unwrap();
        match Dataset::from_source(&src) {
            Err(TourError::DataUnavailable(msg)) => assert!(msg.contains(QA_TABLE), "{msg}"),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_cells_are_missing_values() {
        let src = source()
            .with_json(
                PLACES_TABLE,
                json!([{"Zone": "Northern", "State": "Delhi", "City": "Delhi", "Name": "Red Fort", "Google review rating": [4.5]}]),
            )
            .and_then(|s| s.with_json(HOTSPOTS_TABLE, json!([{"NAME": "Sanchi Stupa", "LATITUDE": {"nested": true}, "LONGITUDE": 77.74}])))
            .unwrap();
        let db = Dataset::from_source(&src).unwrap();

        assert_eq!(db.places.places()[0].name(), Some("Red Fort"));
        assert_eq!(db.places.places()[0].google_rating, None);
        assert_eq!(db.hotspots.len(), 1);
        assert_eq!(db.hotspots.hotspots[0].latitude, None);
        assert_eq!(db.stats().mappable_hotspots, 0);
    }

    #[test]
    fn unusable_table_is_unavailable_data() {
        let src = source().with_json(VISITORS_TABLE, json!([{"Domestic -2019": 5}])).unwrap();
        let err = Dataset::from_source(&src).unwrap_err();
        assert!(matches!(err, TourError::DataUnavailable(ref m) if m.starts_with(VISITORS_TABLE)));
    }
}
