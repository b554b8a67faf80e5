use std::path::PathBuf;
use thiserror::Error;

use super::csv::Table;

/// Failures of the flat-file store.
///
/// `load_*` wrappers turn these into empty results. Writes and the `try_*`
/// variants hand them to the caller so a corrupt table can be told apart
/// from an empty one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {table}: {source}")]
    Parse {
        table: Table,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid value '{value}' in column '{column}' of {table}")]
    InvalidField {
        table: Table,
        column: &'static str,
        value: String,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
