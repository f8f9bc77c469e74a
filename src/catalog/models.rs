// src/catalog/models.rs

//! Data models for catalog entries
//!
//! This module defines the recipe record stored in the catalog file
//! and the difficulty scale, plus the built-in sample set used when
//! no data file can be loaded.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Difficulty scale for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = Error;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.as_str().to_string()
    }
}

/// A recipe record as stored in the catalog file
///
/// Field names are pinned to the catalog file format so existing
/// `recipes.json` files round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Cuisine")]
    pub cuisine: String,

    /// Ingredient list, order preserved for display
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,

    /// Preparation time in minutes, always positive
    #[serde(rename = "Prep Time")]
    pub prep_time: u32,

    #[serde(rename = "Difficulty")]
    pub difficulty: Difficulty,

    /// Rating in 0.0-5.0; `None` means unrated, which is distinct
    /// from a rating of zero
    #[serde(rename = "Rating", default)]
    pub rating: Option<f64>,
}

impl Recipe {
    /// Create a validated recipe record
    ///
    /// Rejects a zero prep time and ratings outside 0.0-5.0.
    pub fn new(
        cuisine: impl Into<String>,
        ingredients: Vec<String>,
        prep_time: u32,
        difficulty: Difficulty,
        rating: Option<f64>,
    ) -> Result<Self> {
        if prep_time == 0 {
            return Err(Error::InvalidPrepTime);
        }
        if let Some(rating) = rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(Error::InvalidRating(rating));
            }
        }

        Ok(Self {
            cuisine: cuisine.into(),
            ingredients,
            prep_time,
            difficulty,
            rating,
        })
    }
}

/// Built-in sample collection used when the data file cannot be loaded
pub fn sample_recipes() -> IndexMap<String, Recipe> {
    let mut recipes = IndexMap::new();
    recipes.insert(
        "Spaghetti Carbonara".to_string(),
        Recipe {
            cuisine: "Italian".to_string(),
            ingredients: vec![
                "Pasta".to_string(),
                "Eggs".to_string(),
                "Cheese".to_string(),
                "Bacon".to_string(),
            ],
            prep_time: 20,
            difficulty: Difficulty::Medium,
            rating: Some(4.5),
        },
    );
    recipes.insert(
        "Chicken Tikka Masala".to_string(),
        Recipe {
            cuisine: "Indian".to_string(),
            ingredients: vec![
                "Chicken".to_string(),
                "Yogurt".to_string(),
                "Spices".to_string(),
                "Tomato Sauce".to_string(),
            ],
            prep_time: 45,
            difficulty: Difficulty::Hard,
            rating: Some(4.8),
        },
    );
    recipes.insert(
        "Avocado Toast".to_string(),
        Recipe {
            cuisine: "American".to_string(),
            ingredients: vec![
                "Bread".to_string(),
                "Avocado".to_string(),
                "Salt".to_string(),
                "Pepper".to_string(),
            ],
            prep_time: 5,
            difficulty: Difficulty::Easy,
            rating: Some(3.7),
        },
    );
    recipes
}
