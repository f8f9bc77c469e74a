// src/error.rs

//! Error types for catalog operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with the recipe catalog
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid catalog data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write catalog to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid difficulty: {0} (expected easy, medium, or hard)")]
    InvalidDifficulty(String),

    #[error("Prep time must be a positive number of minutes")]
    InvalidPrepTime,

    #[error("Rating {0} is out of range (expected 0.0 to 5.0)")]
    InvalidRating(f64),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;
