// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use larder::Catalog;
use tempfile::TempDir;

/// Create a temp directory and return it with a catalog path inside.
///
/// The file does not exist yet, so opening the catalog falls back to
/// the built-in samples. Keep the TempDir alive to prevent cleanup.
pub fn setup_catalog_path() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_path = temp_dir
        .path()
        .join("recipes.json")
        .to_str()
        .unwrap()
        .to_string();
    (temp_dir, data_path)
}

/// Open a catalog seeded with the sample collection, persisted to disk.
pub fn setup_seeded_catalog() -> (TempDir, Catalog) {
    let (temp_dir, data_path) = setup_catalog_path();
    let catalog = Catalog::open(&data_path);
    catalog.persist().unwrap();
    (temp_dir, catalog)
}
