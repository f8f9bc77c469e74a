// src/commands/browse.rs
//! Read-only catalog commands: listing, lookup, and queries

use anyhow::Result;
use larder::{Catalog, Recipe, RecipeFilter};
use std::io::Write;
use tracing::info;

/// List every recipe in the catalog
pub fn cmd_list(data_file: &str) -> Result<()> {
    let catalog = Catalog::open(data_file);
    let names = catalog.names();

    if names.is_empty() {
        println!("The catalog is empty.");
    } else {
        println!("All recipes:");
        for name in &names {
            println!("  {}", name);
        }
        println!("\nTotal: {} recipe(s)", names.len());
    }

    Ok(())
}

/// Recommend recipes matching a cuisine
pub fn cmd_recommend(cuisine: &str, data_file: &str) -> Result<()> {
    let catalog = Catalog::open(data_file);
    let names = catalog.recommend_by_cuisine(cuisine);

    if names.is_empty() {
        println!("No {} recipes found. Try another cuisine!", cuisine);
    } else {
        println!("Based on your love for {}, try these recipes:", cuisine);
        for name in &names {
            println!("  {}", name);
        }
        println!("\nTotal: {} recipe(s)", names.len());
    }

    Ok(())
}

/// Search recipes by full or partial name
pub fn cmd_search(query: &str, data_file: &str) -> Result<()> {
    let catalog = Catalog::open(data_file);
    let names = catalog.search(query);

    if names.is_empty() {
        println!("No recipes found matching '{}'.", query);
    } else {
        println!("Recipes matching '{}':", query);
        for name in &names {
            println!("  {}", name);
        }
        println!("\nTotal: {} recipe(s)", names.len());
    }

    Ok(())
}

/// Filter recipes by difficulty, prep time, and rating
pub fn cmd_filter(
    difficulty: Option<String>,
    max_time: Option<u32>,
    min_rating: Option<f64>,
    data_file: &str,
) -> Result<()> {
    let catalog = Catalog::open(data_file);
    let filter = RecipeFilter {
        difficulty,
        max_prep_time: max_time,
        min_rating,
    };
    let names = catalog.filter(&filter);

    if names.is_empty() {
        println!("No recipes found matching your criteria.");
    } else {
        println!("Matching recipes:");
        for name in &names {
            println!("  {}", name);
        }
        println!("\nTotal: {} recipe(s)", names.len());
    }

    Ok(())
}

/// Show full details for a single recipe
pub fn cmd_show(name: &str, data_file: &str) -> Result<()> {
    info!("Showing details for recipe: {}", name);
    let catalog = Catalog::open(data_file);

    match catalog.get(name) {
        Some(recipe) => {
            let mut stdout = std::io::stdout();
            print_recipe(&mut stdout, name, recipe)?;
        }
        None => println!("Recipe '{}' not found.", name),
    }

    Ok(())
}

/// Write a recipe's full details in display form
pub(crate) fn print_recipe(out: &mut impl Write, name: &str, recipe: &Recipe) -> Result<()> {
    writeln!(out, "{}", name)?;
    writeln!(out, "  Cuisine:    {}", recipe.cuisine)?;
    writeln!(out, "  Ingredients:")?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "    - {}", ingredient)?;
    }
    writeln!(out, "  Prep time:  {} minutes", recipe.prep_time)?;
    writeln!(out, "  Difficulty: {}", recipe.difficulty.as_str())?;
    match recipe.rating {
        Some(rating) => writeln!(out, "  Rating:     {}", rating)?,
        None => writeln!(out, "  Rating:     Not rated")?,
    }

    Ok(())
}
