use thiserror::Error;

#[derive(Error, Debug)]
pub enum CajaError {
    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] caja_common::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Faceted filters (--users/--usage/--kind) and exact filters (--category/--duration/--participants) cannot be combined")]
    MixedFilters,

    #[error("Catalog has {0} issue(s)")]
    InvalidCatalog(usize),
}

pub type Result<T> = std::result::Result<T, CajaError>;
