//! Configuration system

use std::path::PathBuf;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_str_with_format(&contents, path)
    }

    /// Parse configuration text, picking the format from the file extension in `path`
    fn from_str_with_format(contents: &str, path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window settings used by the demo host and as the context size fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial client width in pixels
    pub width: u32,
    /// Initial client height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "UI Glue".to_string(),
        }
    }
}

/// Glue configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlueConfig {
    /// Name given to the GUI context created by [`crate::init`]
    pub context_name: String,
    /// Directory relative file paths are resolved against
    pub asset_root: Option<PathBuf>,
    /// Window settings
    pub window: WindowConfig,
    /// Optional `env_logger` filter, e.g. `"ui_glue=debug"`
    pub log_filter: Option<String>,
}

impl Default for GlueConfig {
    fn default() -> Self {
        Self {
            context_name: "main".to_string(),
            asset_root: None,
            window: WindowConfig::default(),
            log_filter: None,
        }
    }
}

impl Config for GlueConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GlueConfig::default();
        assert_eq!(config.context_name, "main");
        assert!(config.asset_root.is_none());
        assert_eq!((config.window.width, config.window.height), (1024, 768));
    }

    #[test]
    fn test_parse_toml_partial() {
        let text = r#"
            context_name = "hud"
            asset_root = "assets/ui"

            [window]
            width = 640
        "#;
        let config = GlueConfig::from_str_with_format(text, "glue.toml").unwrap();
        assert_eq!(config.context_name, "hud");
        assert_eq!(config.asset_root, Some(PathBuf::from("assets/ui")));
        assert_eq!(config.window.width, 640);
        // Unspecified fields keep their defaults
        assert_eq!(config.window.height, 768);
    }

    #[test]
    fn test_parse_ron() {
        let text = r#"(context_name: "menu", log_filter: Some("debug"))"#;
        let config = GlueConfig::from_str_with_format(text, "glue.ron").unwrap();
        assert_eq!(config.context_name, "menu");
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unsupported_format() {
        let result = GlueConfig::from_str_with_format("", "glue.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
