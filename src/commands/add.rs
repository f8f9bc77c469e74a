// src/commands/add.rs
//! Add a new recipe to the catalog

use anyhow::{Result, bail};
use larder::{Catalog, Difficulty, Recipe};
use tracing::info;

/// Add a recipe from command-line arguments
///
/// Ingredients arrive as a single comma-separated string; entries are
/// trimmed and empty ones dropped.
#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    name: &str,
    cuisine: &str,
    ingredients: &str,
    prep_time: u32,
    difficulty: &str,
    rating: Option<f64>,
    data_file: &str,
) -> Result<()> {
    info!("Adding recipe: {}", name);

    let ingredients = split_ingredients(ingredients);
    if ingredients.is_empty() {
        bail!("At least one ingredient is required");
    }

    let difficulty: Difficulty = difficulty.parse()?;
    let recipe = Recipe::new(cuisine, ingredients, prep_time, difficulty, rating)?;

    let mut catalog = Catalog::open(data_file);
    match catalog.add(name, recipe) {
        Ok(true) => {
            println!("'{}' added successfully.", name);
            Ok(())
        }
        Ok(false) => bail!("A recipe named '{}' already exists", name),
        Err(err) => bail!(
            "'{}' was added in memory, but the catalog could not be saved: {}",
            name,
            err
        ),
    }
}

/// Split a comma-separated ingredient list, dropping blank entries
pub(crate) fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ingredients() {
        assert_eq!(
            split_ingredients("Pasta, Eggs , Cheese"),
            vec!["Pasta", "Eggs", "Cheese"]
        );
        assert_eq!(split_ingredients(" , ,"), Vec::<String>::new());
    }
}
