// src/catalog/mod.rs

//! Recipe catalog store
//!
//! The catalog owns the in-memory recipe collection and is the only
//! path for reading or writing recipe data. It loads from a JSON file
//! at construction, substituting a built-in sample set when the file
//! is missing or unreadable, and rewrites the whole file after every
//! successful mutation.
//!
//! All query results are returned in collection iteration order,
//! which is insertion order.

pub mod models;
pub mod paths;
mod query;

pub use models::{Difficulty, Recipe, sample_recipes};
pub use query::RecipeFilter;

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The recipe collection and its backing data file
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    recipes: IndexMap<String, Recipe>,
}

impl Catalog {
    /// Open the catalog backed by the file at `path`
    ///
    /// A missing or malformed data file is not an error: the catalog
    /// starts from the built-in sample collection instead, so a
    /// session always has usable data.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let recipes = match Self::load(&path) {
            Ok(recipes) => {
                debug!(
                    "Loaded {} recipe(s) from {}",
                    recipes.len(),
                    path.display()
                );
                recipes
            }
            Err(err) => {
                warn!(
                    "Could not load {}: {}; starting with sample recipes",
                    path.display(),
                    err
                );
                sample_recipes()
            }
        };

        Self { path, recipes }
    }

    fn load(path: &Path) -> Result<IndexMap<String, Recipe>> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the whole collection back to the data file
    ///
    /// Creates the parent directory if it does not exist. The file is
    /// overwritten in place; there are no partial writes visible to
    /// callers.
    pub fn persist(&self) -> Result<()> {
        let encoded = serde_json::to_string_pretty(&self.recipes)?;

        fs::create_dir_all(paths::data_dir(&self.path)).map_err(|source| Error::Persist {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, encoded).map_err(|source| Error::Persist {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Persisted {} recipe(s) to {}",
            self.recipes.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Names of recipes whose cuisine matches, case-insensitively
    ///
    /// An empty cuisine matches nothing.
    pub fn recommend_by_cuisine(&self, cuisine: &str) -> Vec<String> {
        if cuisine.is_empty() {
            return Vec::new();
        }
        let wanted = cuisine.to_lowercase();
        self.recipes
            .iter()
            .filter(|(_, recipe)| recipe.cuisine.to_lowercase() == wanted)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Names containing `query` as a case-insensitive substring
    ///
    /// An empty query matches every recipe.
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.recipes
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Names of recipes satisfying every constraint in `filter`
    pub fn filter(&self, filter: &RecipeFilter) -> Vec<String> {
        self.recipes
            .iter()
            .filter(|(_, recipe)| filter.matches(recipe))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Exact-name lookup; `None` means not found
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// All recipe names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.recipes.keys().cloned().collect()
    }

    /// Number of recipes in the collection
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Insert a new recipe and persist the collection
    ///
    /// Returns `Ok(false)` without touching the collection when a
    /// recipe with this name already exists. A persist failure leaves
    /// the new recipe in memory and surfaces the error; the data file
    /// then lags the collection until the next successful persist.
    pub fn add(&mut self, name: impl Into<String>, recipe: Recipe) -> Result<bool> {
        let name = name.into();
        if self.recipes.contains_key(&name) {
            debug!("Recipe '{}' already exists, not adding", name);
            return Ok(false);
        }

        self.recipes.insert(name, recipe);
        self.persist()?;
        Ok(true)
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
