// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: catalog data file
fn data_file_arg() -> Arg {
    Arg::new("data_file")
        .short('f')
        .long("data-file")
        .value_name("PATH")
        .default_value("data/recipes.json")
        .help("Path to the recipe data file")
}

fn build_cli() -> Command {
    Command::new("larder")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Larder Contributors")
        .about("Recipe catalog manager with search, filtering, and an interactive shell")
        .subcommand_required(false)
        .arg(data_file_arg().global(true))
        .subcommand(
            Command::new("recommend")
                .about("Recommend recipes from a cuisine")
                .arg(
                    Arg::new("cuisine")
                        .required(true)
                        .help("Cuisine to match (case-insensitive)"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search recipes by name")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .help("Full or partial recipe name"),
                ),
        )
        .subcommand(
            Command::new("filter")
                .about("Filter recipes by difficulty, prep time, and rating")
                .arg(
                    Arg::new("difficulty")
                        .short('d')
                        .long("difficulty")
                        .help("Difficulty to match: easy, medium, or hard"),
                )
                .arg(
                    Arg::new("max_time")
                        .short('t')
                        .long("max-time")
                        .value_name("MINUTES")
                        .help("Maximum preparation time in minutes"),
                )
                .arg(
                    Arg::new("min_rating")
                        .short('r')
                        .long("min-rating")
                        .value_name("RATING")
                        .help("Minimum rating (0.0-5.0)"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show full details for a recipe")
                .arg(Arg::new("name").required(true).help("Exact recipe name")),
        )
        .subcommand(
            Command::new("add")
                .about("Add a new recipe to the catalog")
                .arg(Arg::new("name").required(true).help("Recipe name"))
                .arg(
                    Arg::new("cuisine")
                        .short('c')
                        .long("cuisine")
                        .required(true)
                        .help("Cuisine, e.g. Italian"),
                )
                .arg(
                    Arg::new("ingredients")
                        .short('i')
                        .long("ingredients")
                        .required(true)
                        .help("Comma-separated ingredient list"),
                )
                .arg(
                    Arg::new("prep_time")
                        .short('t')
                        .long("prep-time")
                        .value_name("MINUTES")
                        .required(true)
                        .help("Preparation time in minutes"),
                )
                .arg(
                    Arg::new("difficulty")
                        .short('d')
                        .long("difficulty")
                        .required(true)
                        .help("Difficulty: easy, medium, or hard"),
                )
                .arg(
                    Arg::new("rating")
                        .short('r')
                        .long("rating")
                        .help("Rating (0.0-5.0), omit for unrated"),
                ),
        )
        .subcommand(Command::new("list").about("List every recipe in the catalog"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("larder.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
