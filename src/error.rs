use std::path::PathBuf;

use thiserror::Error;

/// Failures of the wholesale load/save against the article file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read articles from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write articles to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed article data in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode articles: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Typed failures surfaced by `ArticleService`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidParams(String),

    #[error("{0}")]
    ArticleNotFound(String),

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl ServiceError {
    /// Stable kind name reported in error response bodies.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ServiceError::InvalidParams(_) => "InvalidParamsError",
            ServiceError::ArticleNotFound(_) => "ArticleNotFoundError",
            ServiceError::Persistence(_) => "PersistenceError",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize article store: {0}")]
    Store(#[from] StoreError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
