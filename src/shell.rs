// src/shell.rs

//! Interactive catalog shell
//!
//! A line-oriented menu over stdin/stdout that maps user choices onto
//! catalog operations: single-letter menu choices with word aliases,
//! forms gathered one field per line, and re-prompts on unparseable
//! input. One catalog instance lives for the whole session, so added
//! recipes are visible to later queries without reloading.

use anyhow::Result;
use larder::{Catalog, Difficulty, Recipe, RecipeFilter};
use std::io::{self, BufRead, IsTerminal, Write};

use crate::commands::{print_recipe, split_ingredients};

/// Menu operations offered by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Recommend,
    Search,
    Filter,
    Add,
    List,
    Quit,
}

/// Run the interactive shell against the catalog at `data_file`
///
/// When stdin is not a terminal there is nobody to answer prompts;
/// print a one-line catalog summary and return instead.
pub fn run(data_file: &str) -> Result<()> {
    let catalog = Catalog::open(data_file);

    if !io::stdin().is_terminal() {
        println!(
            "Catalog at {}: {} recipe(s)",
            catalog.path().display(),
            catalog.len()
        );
        return Ok(());
    }

    Shell::new(catalog).run_loop()
}

struct Shell {
    catalog: Catalog,
    stdout: io::Stdout,
}

impl Shell {
    fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            stdout: io::stdout(),
        }
    }

    fn run_loop(&mut self) -> Result<()> {
        writeln!(self.stdout)?;
        writeln!(self.stdout, "=== Larder Recipe Catalog ===")?;
        writeln!(
            self.stdout,
            "{} recipe(s) loaded from {}",
            self.catalog.len(),
            self.catalog.path().display()
        )?;

        loop {
            match self.menu_choice()? {
                None | Some(MenuChoice::Quit) => break,
                Some(choice) => {
                    if !self.dispatch(choice)? {
                        break;
                    }
                }
            }
        }

        writeln!(self.stdout, "Goodbye!")?;
        Ok(())
    }

    fn menu_choice(&mut self) -> Result<Option<MenuChoice>> {
        writeln!(self.stdout)?;
        writeln!(self.stdout, "What would you like to do?")?;
        writeln!(self.stdout, "  [r] Recommend recipes by cuisine")?;
        writeln!(self.stdout, "  [s] Search recipes by name")?;
        writeln!(self.stdout, "  [f] Filter recipes by attributes")?;
        writeln!(self.stdout, "  [a] Add a new recipe")?;
        writeln!(self.stdout, "  [l] List all recipes")?;
        writeln!(self.stdout, "  [q] Quit")?;
        writeln!(self.stdout)?;

        loop {
            let Some(input) = self.ask("Choice [r/s/f/a/l/q]: ")? else {
                return Ok(None);
            };
            match input.to_lowercase().as_str() {
                "r" | "recommend" => return Ok(Some(MenuChoice::Recommend)),
                "s" | "search" => return Ok(Some(MenuChoice::Search)),
                "f" | "filter" => return Ok(Some(MenuChoice::Filter)),
                "a" | "add" => return Ok(Some(MenuChoice::Add)),
                "l" | "list" => return Ok(Some(MenuChoice::List)),
                "q" | "quit" | "exit" | "" => return Ok(Some(MenuChoice::Quit)),
                _ => writeln!(self.stdout, "Unknown option. Please try again.")?,
            }
        }
    }

    /// Returns `Ok(false)` when stdin closes mid-operation
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Recommend => self.recommend(),
            MenuChoice::Search => self.search(),
            MenuChoice::Filter => self.filter(),
            MenuChoice::Add => self.add(),
            MenuChoice::List => self.list(),
            MenuChoice::Quit => Ok(false),
        }
    }

    fn recommend(&mut self) -> Result<bool> {
        let Some(cuisine) = self.ask("Enter your preferred cuisine: ")? else {
            return Ok(false);
        };
        if cuisine.is_empty() {
            return Ok(true);
        }

        let names = self.catalog.recommend_by_cuisine(&cuisine);
        if names.is_empty() {
            writeln!(
                self.stdout,
                "No {} recipes found. Try another cuisine!",
                cuisine
            )?;
            return Ok(true);
        }

        writeln!(
            self.stdout,
            "Based on your love for {}, try these recipes:",
            cuisine
        )?;
        self.print_names(&names)?;
        self.offer_details()
    }

    fn search(&mut self) -> Result<bool> {
        let Some(query) = self.ask("Enter recipe name (full or partial): ")? else {
            return Ok(false);
        };

        let names = self.catalog.search(&query);
        if names.is_empty() {
            writeln!(self.stdout, "No recipes found matching your criteria.")?;
            return Ok(true);
        }

        writeln!(self.stdout, "Found {} recipe(s):", names.len())?;
        self.print_names(&names)?;
        self.offer_details()
    }

    fn filter(&mut self) -> Result<bool> {
        let Some(difficulty) =
            self.ask_difficulty("Difficulty [easy/medium/hard, blank for any]: ", false)?
        else {
            return Ok(false);
        };
        let Some(max_time) =
            self.ask_u32("Maximum prep time in minutes [blank for no limit]: ", false)?
        else {
            return Ok(false);
        };
        let Some(min_rating) = self.ask_rating("Minimum rating 0.0-5.0 [blank for none]: ")? else {
            return Ok(false);
        };

        let filter = RecipeFilter {
            difficulty: difficulty.map(|d| d.as_str().to_string()),
            max_prep_time: max_time,
            min_rating,
        };
        let names = self.catalog.filter(&filter);
        if names.is_empty() {
            writeln!(self.stdout, "No recipes found matching your criteria.")?;
            return Ok(true);
        }

        writeln!(self.stdout, "Found {} recipe(s):", names.len())?;
        self.print_names(&names)?;
        self.offer_details()
    }

    fn add(&mut self) -> Result<bool> {
        let Some(name) = self.ask("Recipe name: ")? else {
            return Ok(false);
        };
        if name.is_empty() {
            writeln!(self.stdout, "A recipe name is required.")?;
            return Ok(true);
        }

        let Some(cuisine) = self.ask("Cuisine: ")? else {
            return Ok(false);
        };
        if cuisine.is_empty() {
            writeln!(self.stdout, "A cuisine is required.")?;
            return Ok(true);
        }

        let Some(raw_ingredients) = self.ask("Ingredients (comma-separated): ")? else {
            return Ok(false);
        };
        let ingredients = split_ingredients(&raw_ingredients);
        if ingredients.is_empty() {
            writeln!(self.stdout, "At least one ingredient is required.")?;
            return Ok(true);
        }

        let Some(Some(prep_time)) = self.ask_u32("Prep time in minutes: ", true)? else {
            return Ok(false);
        };
        let Some(Some(difficulty)) =
            self.ask_difficulty("Difficulty [easy/medium/hard]: ", true)?
        else {
            return Ok(false);
        };
        let Some(rating) = self.ask_rating("Rating 0.0-5.0 [blank for unrated]: ")? else {
            return Ok(false);
        };

        let recipe = match Recipe::new(cuisine, ingredients, prep_time, difficulty, rating) {
            Ok(recipe) => recipe,
            Err(err) => {
                writeln!(self.stdout, "{}", err)?;
                return Ok(true);
            }
        };

        match self.catalog.add(name.clone(), recipe) {
            Ok(true) => writeln!(self.stdout, "'{}' added successfully!", name)?,
            Ok(false) => writeln!(self.stdout, "A recipe named '{}' already exists.", name)?,
            Err(err) => writeln!(
                self.stdout,
                "'{}' was added for this session, but saving the catalog failed: {}",
                name, err
            )?,
        }
        Ok(true)
    }

    fn list(&mut self) -> Result<bool> {
        let names = self.catalog.names();
        if names.is_empty() {
            writeln!(self.stdout, "The catalog is empty.")?;
            return Ok(true);
        }

        writeln!(self.stdout, "All recipes ({}):", names.len())?;
        self.print_names(&names)?;
        self.offer_details()
    }

    /// After a listing, offer to show full details for one entry
    fn offer_details(&mut self) -> Result<bool> {
        let Some(name) = self.ask("Show details for [blank to skip]: ")? else {
            return Ok(false);
        };
        if name.is_empty() {
            return Ok(true);
        }

        match self.catalog.get(&name).cloned() {
            Some(recipe) => print_recipe(&mut self.stdout, &name, &recipe)?,
            None => writeln!(self.stdout, "Recipe '{}' not found.", name)?,
        }
        Ok(true)
    }

    fn print_names(&mut self, names: &[String]) -> Result<()> {
        for name in names {
            writeln!(self.stdout, "  {}", name)?;
        }
        Ok(())
    }

    /// Prompt for one line of input; `None` means stdin was closed
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.stdout, "{}", label)?;
        self.stdout.flush()?;

        let mut input = String::new();
        let bytes = io::stdin().lock().read_line(&mut input)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Prompt for a number, re-asking until it parses
    ///
    /// Outer `None` means stdin closed; inner `None` means the field
    /// was left blank (only when not required).
    fn ask_u32(&mut self, label: &str, required: bool) -> Result<Option<Option<u32>>> {
        loop {
            let Some(input) = self.ask(label)? else {
                return Ok(None);
            };
            if input.is_empty() {
                if !required {
                    return Ok(Some(None));
                }
                writeln!(self.stdout, "A number of minutes is required.")?;
                continue;
            }
            match input.parse::<u32>() {
                Ok(value) => return Ok(Some(Some(value))),
                Err(_) => writeln!(self.stdout, "Please enter a whole number of minutes.")?,
            }
        }
    }

    fn ask_difficulty(
        &mut self,
        label: &str,
        required: bool,
    ) -> Result<Option<Option<Difficulty>>> {
        loop {
            let Some(input) = self.ask(label)? else {
                return Ok(None);
            };
            if input.is_empty() {
                if !required {
                    return Ok(Some(None));
                }
                writeln!(self.stdout, "A difficulty is required.")?;
                continue;
            }
            match input.parse::<Difficulty>() {
                Ok(difficulty) => return Ok(Some(Some(difficulty))),
                Err(err) => writeln!(self.stdout, "{}", err)?,
            }
        }
    }

    /// Prompt for an optional rating in 0.0-5.0; blank means unrated
    fn ask_rating(&mut self, label: &str) -> Result<Option<Option<f64>>> {
        loop {
            let Some(input) = self.ask(label)? else {
                return Ok(None);
            };
            if input.is_empty() {
                return Ok(Some(None));
            }
            match input.parse::<f64>() {
                Ok(value) if (0.0..=5.0).contains(&value) => return Ok(Some(Some(value))),
                _ => writeln!(self.stdout, "Please enter a rating between 0.0 and 5.0.")?,
            }
        }
    }
}
