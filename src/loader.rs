//! Catalog file loading

use crate::error::{CajaError, Result};
use caja_common::{Catalog, Item};
use std::path::Path;

/// Raw items, duplicates allowed (for validation)
pub fn read_items(path: &Path) -> Result<Vec<Item>> {
    if !path.exists() {
        return Err(CajaError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(CajaError::FileNotFound(path.display().to_string()));
    }
    Ok(Catalog::from_file(path)?)
}
