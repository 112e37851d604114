//! Loading the bundled tables and the binary dataset cache.

use std::fs;
use std::path::Path;
use yatra_core::loader::TABLE_NAMES;
use yatra_core::{Dataset, DirSource, FilterSelection, Level, TourError};

fn copy_tables(to: &Path) {
    let from = Dataset::default_data_dir();
    for name in TABLE_NAMES {
        let file = format!("{name}.json");
        fs::copy(from.join(&file), to.join(&file)).unwrap();
    }
}

#[test]
fn bundled_tables_load() {
    let db = Dataset::from_source(&DirSource::new(Dataset::default_data_dir())).unwrap();
    let stats = db.stats();
    assert!(stats.places > 0);
    assert!(stats.qa_pairs > 0);
    assert!(stats.mappable_hotspots > 0 && stats.mappable_hotspots <= stats.hotspots);
    assert!(stats.visitor_rows > 0);
    assert!(stats.stories > 0);

    let sel = db.places.cascade(FilterSelection::default());
    assert!(sel.is_complete());
    let place = db.places.resolve(&sel).unwrap();
    assert_eq!(place.zone(), sel.get(Level::Zone));
}

#[test]
fn cache_round_trip_keeps_stats() {
    let dir = tempfile::tempdir().unwrap();
    copy_tables(dir.path());

    let built = Dataset::load_from_dir(dir.path()).unwrap();
    let cache = dir.path().join(Dataset::cache_file_name());
    assert!(cache.exists());

    let cached = Dataset::load_binary_file(&cache).unwrap();
    assert_eq!(cached.stats(), built.stats());

    let again = Dataset::load_from_dir(dir.path()).unwrap();
    assert_eq!(again.stats(), built.stats());
    assert_eq!(again.places.places(), built.places.places());
}

#[test]
fn corrupt_cache_is_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    copy_tables(dir.path());
    let cache = dir.path().join(Dataset::cache_file_name());
    fs::write(&cache, b"definitely not bincode").unwrap();

    let db = Dataset::load_from_dir(dir.path()).unwrap();
    assert!(db.stats().places > 0);
    assert!(Dataset::load_binary_file(&cache).is_ok());
}

#[test]
fn missing_table_is_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    copy_tables(dir.path());
    fs::remove_file(dir.path().join("tourism_stats.json")).unwrap();

    match Dataset::load_from_dir(dir.path()) {
        Err(TourError::DataUnavailable(msg)) => assert!(msg.contains("tourism_stats")),
        other => panic!("expected DataUnavailable, got {other:?}"),
    }
}

#[test]
fn table_deleted_after_caching_is_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    copy_tables(dir.path());
    Dataset::load_from_dir(dir.path()).unwrap();
    assert!(dir.path().join(Dataset::cache_file_name()).exists());

    fs::remove_file(dir.path().join("cleaned_train.json")).unwrap();

    match Dataset::load_from_dir(dir.path()) {
        Err(TourError::DataUnavailable(msg)) => assert!(msg.contains("cleaned_train"), "{msg}"),
        other => panic!("expected DataUnavailable, got {other:?}"),
    }
}
