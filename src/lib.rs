// src/lib.rs

//! Larder Recipe Catalog
//!
//! A small catalog of named recipes: cuisine, ingredients, preparation
//! time, difficulty, and an optional rating. The collection lives in
//! memory, persists to a flat JSON file, and is queried with linear
//! scans.
//!
//! # Architecture
//!
//! - Catalog-first: every read and write of recipe data goes through
//!   [`Catalog`]
//! - Whole-file persistence: each mutation rewrites `recipes.json`
//! - Fallback data: a built-in sample set keeps the catalog usable
//!   when the data file is missing or unreadable

pub mod catalog;
mod error;

pub use catalog::{Catalog, Difficulty, Recipe, RecipeFilter};
pub use error::{Error, Result};
