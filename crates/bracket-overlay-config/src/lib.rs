use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default highlight border thickness in logical pixels.
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;
/// Default x of the overlay's left gutter in logical pixels.
pub const DEFAULT_LEFT_MARGIN_X: f64 = 16.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub style: StyleConfig,
}

/// Pixel constants for painting the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_left_margin_x")]
    pub left_margin_x: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            border_width: DEFAULT_BORDER_WIDTH,
            left_margin_x: DEFAULT_LEFT_MARGIN_X,
        }
    }
}

fn default_border_width() -> f64 {
    DEFAULT_BORDER_WIDTH
}

fn default_left_margin_x() -> f64 {
    DEFAULT_LEFT_MARGIN_X
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/bracket-overlay");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Border width must be finite and non-negative, the margin finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let StyleConfig {
            border_width,
            left_margin_x,
        } = self.style;

        if !border_width.is_finite() || border_width < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "style.border_width",
                value: border_width,
            });
        }
        if !left_margin_x.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "style.left_margin_x",
                value: left_margin_x,
            });
        }
        Ok(())
    }
}
