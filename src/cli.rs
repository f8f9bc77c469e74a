// src/cli.rs
//! CLI definitions for the larder recipe catalog
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Running without a subcommand starts the interactive shell; every
//! catalog operation is also available as a direct subcommand for
//! scripted use.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "larder")]
#[command(author = "Larder Contributors")]
#[command(version)]
#[command(
    about = "A recipe catalog with search, filtering, and an interactive shell",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the recipe data file
    #[arg(
        short = 'f',
        long,
        global = true,
        default_value = larder::catalog::paths::DEFAULT_DATA_PATH
    )]
    pub data_file: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend recipes from a cuisine
    Recommend {
        /// Cuisine to match (case-insensitive)
        cuisine: String,
    },

    /// Search recipes by name
    Search {
        /// Full or partial recipe name
        query: String,
    },

    /// Filter recipes by difficulty, prep time, and rating
    Filter {
        /// Difficulty to match: easy, medium, or hard
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Maximum preparation time in minutes
        #[arg(short = 't', long, value_name = "MINUTES")]
        max_time: Option<u32>,

        /// Minimum rating (0.0-5.0)
        #[arg(short = 'r', long, value_name = "RATING")]
        min_rating: Option<f64>,
    },

    /// Show full details for a recipe
    Show {
        /// Exact recipe name
        name: String,
    },

    /// Add a new recipe to the catalog
    Add {
        /// Recipe name (must not already exist)
        name: String,

        /// Cuisine, e.g. "Italian"
        #[arg(short, long)]
        cuisine: String,

        /// Comma-separated ingredient list
        #[arg(short, long)]
        ingredients: String,

        /// Preparation time in minutes
        #[arg(short = 't', long, value_name = "MINUTES")]
        prep_time: u32,

        /// Difficulty: easy, medium, or hard
        #[arg(short, long)]
        difficulty: String,

        /// Rating (0.0-5.0), omit for unrated
        #[arg(short, long)]
        rating: Option<f64>,
    },

    /// List every recipe in the catalog
    List,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
