use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that stop the knowledge base from loading.
///
/// A malformed list cell is not one of them: the loader recovers from it by
/// treating that cell as empty.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("'{}' file not found.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed knowledge base table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Knowledge base table has no '{0}' column")]
    MissingColumn(&'static str),
}
