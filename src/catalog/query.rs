// src/catalog/query.rs

//! Filter criteria for catalog queries

use super::models::Recipe;

/// Criteria for [`Catalog::filter`](super::Catalog::filter)
///
/// Absent fields are vacuously satisfied. A `max_prep_time` of zero or
/// a `min_rating` of zero is treated the same as an absent constraint,
/// matching the behavior of existing catalog clients; "at most 0
/// minutes" and "rated at least 0.0" are not expressible.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Difficulty to match, compared case-insensitively. Values that
    /// name no known difficulty match nothing.
    pub difficulty: Option<String>,

    /// Upper bound on preparation time in minutes, inclusive
    pub max_prep_time: Option<u32>,

    /// Lower bound on rating, inclusive. Unrated recipes never
    /// satisfy a rating constraint.
    pub min_rating: Option<f64>,
}

impl RecipeFilter {
    /// True when every provided constraint holds for `recipe`
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(difficulty) = self.difficulty.as_deref() {
            if recipe.difficulty.as_str().to_lowercase() != difficulty.to_lowercase() {
                return false;
            }
        }

        if let Some(max_time) = self.max_prep_time.filter(|t| *t != 0) {
            if recipe.prep_time > max_time {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating.filter(|r| *r != 0.0) {
            match recipe.rating {
                Some(rating) if rating >= min_rating => {}
                _ => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Difficulty;

    fn recipe(prep_time: u32, difficulty: Difficulty, rating: Option<f64>) -> Recipe {
        Recipe {
            cuisine: "Test".to_string(),
            ingredients: vec!["Water".to_string()],
            prep_time,
            difficulty,
            rating,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RecipeFilter::default();
        assert!(filter.matches(&recipe(20, Difficulty::Medium, Some(4.5))));
        assert!(filter.matches(&recipe(1, Difficulty::Easy, None)));
    }

    #[test]
    fn test_difficulty_is_case_insensitive() {
        let filter = RecipeFilter {
            difficulty: Some("EASY".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&recipe(20, Difficulty::Easy, None)));
        assert!(!filter.matches(&recipe(20, Difficulty::Hard, None)));
    }

    #[test]
    fn test_unknown_difficulty_matches_nothing() {
        let filter = RecipeFilter {
            difficulty: Some("expert".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&recipe(20, Difficulty::Hard, None)));
    }

    #[test]
    fn test_zero_bounds_are_ignored() {
        let filter = RecipeFilter {
            max_prep_time: Some(0),
            min_rating: Some(0.0),
            ..Default::default()
        };
        // Identical to an unconstrained filter, not "at most 0 minutes".
        assert!(filter.matches(&recipe(120, Difficulty::Hard, None)));
    }

    #[test]
    fn test_unrated_fails_rating_constraint() {
        let filter = RecipeFilter {
            min_rating: Some(3.0),
            ..Default::default()
        };
        assert!(!filter.matches(&recipe(20, Difficulty::Easy, None)));
        assert!(filter.matches(&recipe(20, Difficulty::Easy, Some(3.0))));
    }

    #[test]
    fn test_prep_time_bound_is_inclusive() {
        let filter = RecipeFilter {
            max_prep_time: Some(20),
            ..Default::default()
        };
        assert!(filter.matches(&recipe(20, Difficulty::Medium, None)));
        assert!(!filter.matches(&recipe(21, Difficulty::Medium, None)));
    }
}
