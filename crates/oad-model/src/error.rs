use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a document from disk or text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for load results.
pub type LoadResult<T> = Result<T, LoadError>;
