use crate::error::{CajaError, Result};
use caja_common::card::DESCRIPTION_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog used when neither the command line nor the config names one
pub const DEFAULT_CATALOG: &str = "data/herramientas.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub description_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            description_limit: DESCRIPTION_LIMIT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CajaError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("caja").join("config.json"))
    }

    /// Command-line path, then the configured one, then [`DEFAULT_CATALOG`]
    pub fn resolve_catalog(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| self.catalog_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.description_limit, 100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"catalog_path": "x.json"}"#)
            .expect("parse failed");
        assert_eq!(config.catalog_path, Some(PathBuf::from("x.json")));
        assert_eq!(config.description_limit, 100);
    }

    #[test]
    fn test_resolve_catalog_precedence() {
        let mut config = Config::default();
        assert_eq!(config.resolve_catalog(None), PathBuf::from(DEFAULT_CATALOG));

        config.catalog_path = Some(PathBuf::from("conf.json"));
        assert_eq!(config.resolve_catalog(None), PathBuf::from("conf.json"));
        assert_eq!(
            config.resolve_catalog(Some(PathBuf::from("cli.json"))),
            PathBuf::from("cli.json")
        );
    }
}
