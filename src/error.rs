use std::path::PathBuf;

use thiserror::Error;

/// Failure of a search request.
///
/// Travels inside `app::Message`, so it only carries owned, cloneable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("search service unavailable: {0}")]
    Unavailable(String),
}

/// Failure loading a mock result collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read mock data '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid mock data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
