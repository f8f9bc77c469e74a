// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod shell;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let data_file = cli.data_file;

    match cli.command {
        Some(Commands::Recommend { cuisine }) => commands::cmd_recommend(&cuisine, &data_file),
        Some(Commands::Search { query }) => commands::cmd_search(&query, &data_file),
        Some(Commands::Filter {
            difficulty,
            max_time,
            min_rating,
        }) => commands::cmd_filter(difficulty, max_time, min_rating, &data_file),
        Some(Commands::Show { name }) => commands::cmd_show(&name, &data_file),
        Some(Commands::Add {
            name,
            cuisine,
            ingredients,
            prep_time,
            difficulty,
            rating,
        }) => commands::cmd_add(
            &name,
            &cuisine,
            &ingredients,
            prep_time,
            &difficulty,
            rating,
            &data_file,
        ),
        Some(Commands::List) => commands::cmd_list(&data_file),
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
        None => shell::run(&data_file),
    }
}
