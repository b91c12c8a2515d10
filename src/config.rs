//! Configuration file support for archviz.
//!
//! Provides YAML-based configuration through `archviz.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
};
use crate::application::dto::ImageFormat;
use crate::i18n::Locale;
use crate::inventory::domain::{EntityType, TypeVisibility};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "archviz.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub locale: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub visible_types: Option<Vec<String>>,
    pub render: Option<RenderSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The `render:` block.
#[derive(Debug, Deserialize, Default)]
pub struct RenderSection {
    pub base_url: Option<String>,
    pub format: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Rendering service settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub base_url: String,
    pub format: ImageFormat,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: ImageFormat::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub locale: Option<Locale>,
    pub data_dir: Option<PathBuf>,
    pub visible_types: Option<Vec<EntityType>>,
    pub render: RenderSettings,
}

impl Config {
    /// Type visibility from `visible_types`; everything when unset
    pub fn visibility(&self) -> TypeVisibility {
        match &self.visible_types {
            Some(visible) => {
                let hidden: Vec<EntityType> = EntityType::ALL
                    .into_iter()
                    .filter(|t| !visible.contains(t))
                    .collect();
                TypeVisibility::hiding(&hidden)
            }
            None => TypeVisibility::all(),
        }
    }
}

/// Default data directory: the platform data dir, else `./.archviz`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("archviz"))
        .unwrap_or_else(|| PathBuf::from(".archviz"))
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let file: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&file);
    validate_config(file)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<Config>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration and apply defaults.
fn validate_config(file: ConfigFile) -> Result<Config> {
    let locale = match file.locale {
        Some(raw) => Some(raw.parse::<Locale>().map_err(|e| {
            anyhow::anyhow!(
                "Invalid config: locale: {}\n\n💡 Hint: Use 'en' or 'es'.",
                e
            )
        })?),
        None => None,
    };

    let visible_types = match file.visible_types {
        Some(raw) => {
            let mut types = Vec::with_capacity(raw.len());
            for (i, name) in raw.iter().enumerate() {
                let parsed = name.parse::<EntityType>().map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid config: visible_types[{}]: {}\n\n💡 Hint: Valid types are Component, Service, Module, Class and ExternalApplication.",
                        i,
                        e
                    )
                })?;
                types.push(parsed);
            }
            Some(types)
        }
        None => None,
    };

    let mut render = RenderSettings::default();
    if let Some(section) = file.render {
        if let Some(base_url) = section.base_url {
            let base_url = base_url.trim();
            if base_url.is_empty() {
                bail!(
                    "Invalid config: render.base_url must not be empty.\n\n\
                     💡 Hint: Remove the field to use {} or set your own PlantUML server URL.",
                    DEFAULT_BASE_URL
                );
            }
            render.base_url = base_url.to_string();
        }
        if let Some(format) = section.format {
            render.format = format.parse::<ImageFormat>().map_err(|e| {
                anyhow::anyhow!("Invalid config: render.format: {}", e)
            })?;
        }
        if let Some(timeout_secs) = section.timeout_secs {
            if timeout_secs == 0 {
                bail!(
                    "Invalid config: render.timeout_secs must be greater than zero.\n\n\
                     💡 Hint: The default is {} seconds.",
                    DEFAULT_TIMEOUT_SECS
                );
            }
            render.timeout = Duration::from_secs(timeout_secs);
        }
        if let Some(max_retries) = section.max_retries {
            if max_retries == 0 {
                bail!(
                    "Invalid config: render.max_retries must be at least 1.\n\n\
                     💡 Hint: It counts attempts, including the first one."
                );
            }
            render.max_retries = max_retries;
        }
    }

    Ok(Config {
        locale,
        data_dir: file.data_dir,
        visible_types,
        render,
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(file: &ConfigFile) {
    for key in file.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
    if let Some(render) = &file.render {
        for key in render.unknown_fields.keys() {
            log::warn!("Unknown config field 'render.{}' will be ignored.", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
locale: en
data_dir: /tmp/archviz-data
visible_types:
  - Service
  - ExternalApplication
render:
  base_url: http://localhost:8080/plantuml
  format: svg
  timeout_secs: 5
  max_retries: 2
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.locale, Some(Locale::En));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/archviz-data")));
        assert_eq!(
            config.visible_types,
            Some(vec![EntityType::Service, EntityType::ExternalApplication])
        );
        assert_eq!(config.render.base_url, "http://localhost:8080/plantuml");
        assert_eq!(config.render.format, ImageFormat::Svg);
        assert_eq!(config.render.timeout, Duration::from_secs(5));
        assert_eq!(config.render.max_retries, 2);

        let visibility = config.visibility();
        assert!(visibility.is_visible(EntityType::Service));
        assert!(!visibility.is_visible(EntityType::Class));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "locale: es\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.locale, Some(Locale::Es));
        assert_eq!(config.render, RenderSettings::default());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/archviz.config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "locale: fr\n");
        let err = format!("{:#}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid locale: fr"));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "render:\n  base_url: \"  \"\n");
        let err = format!("{:#}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("render.base_url must not be empty"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "render:\n  timeout_secs: 0\n");
        let err = format!("{:#}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("timeout_secs must be greater than zero"));
    }

    #[test]
    fn test_unknown_visible_type_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "visible_types: [Service, Widget]\n");
        let err = format!("{:#}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("visible_types[1]"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let file: ConfigFile = serde_yaml_ng::from_str(
            r#"
locale: en
unknown_field: true
render:
  colour: blue
"#,
        )
        .unwrap();
        assert!(file.unknown_fields.contains_key("unknown_field"));
        assert!(file
            .render
            .as_ref()
            .unwrap()
            .unknown_fields
            .contains_key("colour"));

        let config = validate_config(file).unwrap();
        assert_eq!(config.locale, Some(Locale::En));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.locale.is_none());
        assert!(config.data_dir.is_none());
        assert_eq!(config.visibility(), TypeVisibility::all());
        assert_eq!(config.render.base_url, "https://www.plantuml.com/plantuml");
    }
}
