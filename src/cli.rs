use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    domain::{Category, FixedHour, HourSource, LocalClock, MealBucket, Recipe},
    error::CliError,
    state::MenuState,
    storage::{self, ResourcePaths},
};

#[derive(Parser, Debug)]
#[command(name = "kondate")]
#[command(about = "Draw a menu for the current meal from your own recipe list", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, help = "Category CSV path")]
    pub categories: Option<PathBuf>,

    #[arg(long, global = true, help = "Recipe CSV path")]
    pub recipes: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u32).range(0..24),
        help = "Use this hour (0-23) instead of the local clock"
    )]
    pub hour: Option<u32>,

    #[arg(long, global = true, help = "Log level (trace, debug, info, warn, error, off)")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    #[command(about = "Draw one menu and print it")]
    Pick {
        #[arg(long, short, help = "Category name (defaults to the first one)")]
        category: Option<String>,

        #[arg(long, help = "Print the pick as JSON")]
        json: bool,
    },

    #[command(about = "List categories with recipe counts per meal")]
    List,

    #[command(about = "Show the meal bucket for the current hour")]
    Bucket,

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Serialize)]
pub struct PickOutput {
    pub id: String,
    pub name: String,
    pub category: String,
    pub meal_type: String,
    pub bucket: &'static str,
    pub fell_back: bool,
}

pub fn clock(hour: Option<u32>) -> Box<dyn HourSource> {
    match hour {
        Some(hour) => Box::new(FixedHour(hour)),
        None => Box::new(LocalClock),
    }
}

fn load_state(paths: &ResourcePaths) -> Result<MenuState, CliError> {
    let categories = storage::load_categories_from_csv(&paths.categories)?;
    let recipes = storage::load_recipes_from_csv(&paths.recipes)?;

    let mut state = MenuState::new();
    state.on_categories_loaded(Ok(categories));
    state.on_recipes_loaded(Ok(recipes));
    Ok(state)
}

pub fn pick(
    paths: &ResourcePaths,
    clock: &dyn HourSource,
    category: Option<String>,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut state = load_state(paths)?;
    if let Some(category) = category {
        state.choose_category(category);
    }

    let bucket = clock.current_bucket();
    let pick = state.randomize(bucket, &mut rand::thread_rng())?;

    if json {
        let output = PickOutput {
            id: pick.recipe.id.clone(),
            name: pick.recipe.name.clone(),
            category: pick.recipe.category.clone(),
            meal_type: pick.recipe.meal_type.clone(),
            bucket: pick.bucket.code(),
            fell_back: pick.fell_back,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "{}", pick.recipe.name)?;
    }
    Ok(())
}

pub fn list(paths: &ResourcePaths, out: &mut impl Write) -> Result<(), CliError> {
    let state = load_state(paths)?;
    for line in category_summary(state.categories(), state.recipes()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// One line per category plus one per recipe category missing from the list.
pub fn category_summary(categories: &[Category], recipes: &[Recipe]) -> Vec<String> {
    let by_category = recipes.iter().into_group_map_by(|recipe| recipe.category.as_str());

    let format_row = |name: &str| {
        let counts = by_category
            .get(name)
            .map(|rows| rows.iter().map(|recipe| recipe.bucket()).counts())
            .unwrap_or_default();
        let mut per_bucket = MealBucket::ALL
            .iter()
            .map(|&bucket| format!("{}:{}", bucket.code(), counts.get(&Some(bucket)).unwrap_or(&0)))
            .join(" ");
        if let Some(unknown) = counts.get(&None) {
            per_bucket.push_str(&format!(" ?:{}", unknown));
        }
        let total = by_category.get(name).map_or(0, Vec::len);
        format!("{:20} {}  total:{}", name, per_bucket, total)
    };

    let mut lines: Vec<String> = categories
        .iter()
        .map(|category| format_row(category.name.as_str()))
        .collect();

    let unlisted = by_category
        .keys()
        .copied()
        .filter(|name| !categories.iter().any(|category| category.name == *name))
        .sorted()
        .collect::<Vec<&str>>();
    for name in unlisted {
        lines.push(format!("{} (unlisted)", format_row(name)));
    }

    lines
}

pub fn bucket(clock: &dyn HourSource, out: &mut impl Write) -> Result<(), CliError> {
    let bucket = clock.current_bucket();
    writeln!(out, "{} ({})", bucket.code(), bucket.label())?;
    Ok(())
}

pub fn print_completions(shell: &str) -> Result<(), CliError> {
    use clap_complete::Shell;
    let shell = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => return Err(CliError::UnsupportedShell(shell.to_string())),
    };
    clap_complete::generate(shell, &mut Cli::command(), "kondate", &mut io::stdout());
    Ok(())
}

pub fn run_command(
    command: Command,
    paths: &ResourcePaths,
    hour: Option<u32>,
) -> Result<(), CliError> {
    let clock = clock(hour);
    let mut stdout = io::stdout();

    match command {
        Command::Pick { category, json } => pick(paths, clock.as_ref(), category, json, &mut stdout),
        Command::List => list(paths, &mut stdout),
        Command::Bucket => bucket(clock.as_ref(), &mut stdout),
        Command::Completions { shell } => print_completions(&shell),
    }
}
