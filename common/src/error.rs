//! Error types shared by the CLI and the web front end

use crate::types::ItemId;
use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),

    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
