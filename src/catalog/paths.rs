// src/catalog/paths.rs
//! Centralized path derivation for the catalog data file

use std::path::{Path, PathBuf};

/// Default location of the catalog file, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/recipes.json";

/// Get the directory containing the data file
pub fn data_dir(data_path: &Path) -> PathBuf {
    data_path
        .parent()
        .unwrap_or(Path::new("data"))
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir() {
        assert_eq!(
            data_dir(Path::new("data/recipes.json")),
            PathBuf::from("data")
        );
    }

    #[test]
    fn test_data_dir_nested() {
        assert_eq!(
            data_dir(Path::new("/var/lib/larder/recipes.json")),
            PathBuf::from("/var/lib/larder")
        );
    }
}
