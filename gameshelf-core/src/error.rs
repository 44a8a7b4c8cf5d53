use std::path::PathBuf;
use thiserror::Error;

/// Field delimiter used by the flat list files
pub const FIELD_DELIMITER: char = '|';

/// Reasons an item is refused before it reaches a list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Genre cannot be empty")]
    EmptyGenre,

    #[error("{field} cannot contain '|' or line breaks")]
    ContainsDelimiter { field: &'static str },
}

/// Error type for storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted line that does not map to exactly one item
    #[error("Malformed entry in {path:?} at line {line}: {content:?}")]
    Malformed {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
