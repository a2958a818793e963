use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("Please select a category")]
    NoCategory,

    #[error("No menu matches this category")]
    NoMatch,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Pick(#[from] PickError),

    #[error("could not write output: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported shell: {0}. Use bash, zsh, or fish.")]
    UnsupportedShell(String),
}
