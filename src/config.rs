//! Catalog configuration.
//!
//! A catalog is configured with a YAML document naming its categories and
//! the store backend:
//!
//! ```yaml
//! categories:
//!   - id: "1"
//!     name: Cookies
//!     description: Sweet and delicious cookies
//!     icon: "🍪"
//! store:
//!   backend: directory
//!   path: ${RECIPE_BOOK_DATA}/recipes
//! ```
//!
//! `${NAME}` references are replaced with environment variables before the
//! document is parsed. Missing sections fall back to the built-in categories
//! and an in-memory store.

use crate::model::{default_categories, Category};
use camino::{Utf8Path, Utf8PathBuf};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Environment variable {0} referenced in config is not set")]
    MissingEnv(String),

    #[error("Duplicate category name: {0}")]
    DuplicateCategory(String),
}

/// Where recipes are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Recipes live for the session only
    #[default]
    Memory,
    /// One JSON file per recipe in `path`
    Directory { path: Utf8PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            categories: default_categories(),
            store: StoreConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Parses a YAML configuration document.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_yaml_with_env(yaml, |name| std::env::var(name).ok())
    }

    /// Reads and parses the configuration file at `path`.
    pub fn from_path<P: AsRef<Utf8Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path, categories = config.categories.len(), "loaded catalog config");
        Ok(config)
    }

    fn from_yaml_with_env<F>(yaml: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = expand_env(yaml, lookup)?;
        if expanded.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: CatalogConfig = serde_yaml::from_str(&expanded)?;
        config.check_unique_names()?;
        Ok(config)
    }

    fn check_unique_names(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.name.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.name.clone()));
            }
        }
        Ok(())
    }
}

/// Replaces every `${NAME}` in `text` using `lookup`.
fn expand_env<F>(text: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    static ENV_REF: OnceLock<Regex> = OnceLock::new();
    let re = ENV_REF
        .get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"));

    let mut missing = None;
    let expanded = re.replace_all(text, |caps: &Captures| {
        let name = &caps[1];
        lookup(name).unwrap_or_else(|| {
            if missing.is_none() {
                missing = Some(name.to_string());
            }
            String::new()
        })
    });

    match missing {
        Some(name) => Err(ConfigError::MissingEnv(name)),
        None => Ok(expanded.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = CatalogConfig::from_yaml_with_env("", no_env).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.categories.len(), 6);
        assert_eq!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn test_full_config() {
        let yaml = indoc! {r#"
            categories:
              - id: "1"
                name: Muffins
                description: Quick breakfast bakes
                icon: "🧁"
              - id: "2"
                name: Tarts
                description: Crisp shells, rich fillings
                icon: "🥧"
            store:
              backend: directory
              path: /var/lib/recipes
        "#};

        let config = CatalogConfig::from_yaml_with_env(yaml, no_env).unwrap();
        let names: Vec<_> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Muffins", "Tarts"]);
        assert_eq!(
            config.store,
            StoreConfig::Directory {
                path: Utf8PathBuf::from("/var/lib/recipes")
            }
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let yaml = indoc! {r#"
            store:
              backend: memory
        "#};
        let config = CatalogConfig::from_yaml_with_env(yaml, no_env).unwrap();
        assert_eq!(config.categories, default_categories());
    }

    #[test]
    fn test_env_expansion() {
        let yaml = indoc! {r#"
            store:
              backend: directory
              path: ${DATA_HOME}/recipes
        "#};
        let config = CatalogConfig::from_yaml_with_env(yaml, |name| {
            (name == "DATA_HOME").then(|| "/home/lee/.local/share".to_string())
        })
        .unwrap();
        assert_eq!(
            config.store,
            StoreConfig::Directory {
                path: Utf8PathBuf::from("/home/lee/.local/share/recipes")
            }
        );
    }

    #[test]
    fn test_missing_env_variable() {
        let yaml = "store:\n  backend: directory\n  path: ${NOT_SET_ANYWHERE}\n";
        let result = CatalogConfig::from_yaml_with_env(yaml, no_env);
        assert!(matches!(result, Err(ConfigError::MissingEnv(name)) if name == "NOT_SET_ANYWHERE"));
    }

    #[test]
    fn test_duplicate_category_names() {
        let yaml = indoc! {r#"
            categories:
              - { id: "1", name: Pies, description: a, icon: "🥧" }
              - { id: "2", name: Pies, description: b, icon: "🥧" }
        "#};
        let result = CatalogConfig::from_yaml_with_env(yaml, no_env);
        assert!(matches!(result, Err(ConfigError::DuplicateCategory(name)) if name == "Pies"));
    }

    #[test]
    fn test_unknown_backend() {
        let yaml = "store:\n  backend: remote\n";
        let result = CatalogConfig::from_yaml_with_env(yaml, no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("catalog.yaml")).unwrap();
        fs::write(&path, "store:\n  backend: memory\n").unwrap();

        let config = CatalogConfig::from_path(&path).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_from_missing_path() {
        let result = CatalogConfig::from_path("/nonexistent/catalog.yaml");
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
