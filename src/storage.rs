use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver},
    thread,
};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use log::debug;

use crate::{
    constants::FILE_NAMES,
    domain::{Category, Recipe},
    error::LoadError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePaths {
    pub categories: PathBuf,
    pub recipes: PathBuf,
}

impl ResourcePaths {
    pub fn in_dir(dir: &Path) -> Self {
        ResourcePaths {
            categories: dir.join(FILE_NAMES.categories),
            recipes: dir.join(FILE_NAMES.recipes),
        }
    }

    pub fn resolve(categories: Option<PathBuf>, recipes: Option<PathBuf>) -> Self {
        let defaults = ResourcePaths::in_dir(&get_data_dir());
        ResourcePaths {
            categories: categories.unwrap_or(defaults.categories),
            recipes: recipes.unwrap_or(defaults.recipes),
        }
    }
}

#[derive(Debug)]
pub enum LoadEvent {
    Categories(Result<Vec<Category>, LoadError>),
    Recipes(Result<Vec<Recipe>, LoadError>),
}

/// Header-keyed view over a delimited file.
///
/// Fields are looked up by column name; a row that is shorter than the header
/// yields empty strings for the missing columns.
struct Table {
    columns: HashMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl Table {
    fn field(&self, row: &StringRecord, column: &str) -> String {
        self.columns
            .get(column)
            .and_then(|&index| row.get(index))
            .unwrap_or_default()
            .to_string()
    }
}

fn load_table(path: &Path) -> Result<Table, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let mut columns = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        columns.entry(header.to_string()).or_insert(index);
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(record),
            Err(e) => debug!(
                "event=row_skipped path={} row={} reason={}",
                path.display(),
                line + 1,
                e
            ),
        }
    }

    Ok(Table { columns, rows })
}

pub fn load_categories_from_csv(path: &Path) -> Result<Vec<Category>, LoadError> {
    let table = load_table(path)?;
    Ok(table
        .rows
        .iter()
        .map(|row| Category::new(table.field(row, "name")))
        .collect())
}

pub fn load_recipes_from_csv(path: &Path) -> Result<Vec<Recipe>, LoadError> {
    let table = load_table(path)?;
    Ok(table
        .rows
        .iter()
        .map(|row| {
            Recipe::new(
                table.field(row, "id"),
                table.field(row, "name"),
                table.field(row, "category"),
                table.field(row, "meal_type"),
            )
        })
        .collect())
}

/// Starts one loader thread per resource.
///
/// Each thread sends exactly one event. The two sends are unordered and the
/// threads are never joined.
pub fn spawn_loaders(paths: &ResourcePaths) -> Receiver<LoadEvent> {
    let (tx, rx) = mpsc::channel();

    let categories_path = paths.categories.clone();
    let categories_tx = tx.clone();
    thread::spawn(move || {
        let loaded = load_categories_from_csv(&categories_path);
        let _ = categories_tx.send(LoadEvent::Categories(loaded));
    });

    let recipes_path = paths.recipes.clone();
    thread::spawn(move || {
        let loaded = load_recipes_from_csv(&recipes_path);
        let _ = tx.send(LoadEvent::Recipes(loaded));
    });

    rx
}

pub fn get_data_dir() -> PathBuf {
    let local_categories = Path::new(".").join(FILE_NAMES.categories);
    let local_recipes = Path::new(".").join(FILE_NAMES.recipes);
    if local_categories.exists() || local_recipes.exists() {
        return PathBuf::from(".");
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "kondate", "kondate") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

pub fn get_state_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "kondate", "kondate") {
        if let Some(state_dir) = proj_dirs.state_dir() {
            let dir = state_dir.to_path_buf();
            fs::create_dir_all(&dir).ok();
            return dir;
        }
        let dir = proj_dirs.cache_dir().to_path_buf();
        fs::create_dir_all(&dir).ok();
        return dir;
    }
    PathBuf::from(".")
}
