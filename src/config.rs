use std::path::Path;

use crate::engine::SearchConfig;
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub connect_four: ConnectFourSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConnectFourSettings {
    /// Search depth in plies. Higher is stronger and slower.
    pub search_depth: usize,
    /// Per-piece score for holding the center column.
    pub center_bonus: i32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Pause before the AI moves, so its reply doesn't appear instantaneous.
    pub ai_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            connect_four: ConnectFourSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Default for ConnectFourSettings {
    fn default() -> Self {
        ConnectFourSettings {
            search_depth: 5,
            center_bonus: 3,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings { ai_delay_ms: 500 }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_four.search_depth == 0 {
            return Err(ConfigError::Validation(
                "connect_four.search_depth must be > 0".into(),
            ));
        }
        if self.connect_four.search_depth > 12 {
            return Err(ConfigError::Validation(
                "connect_four.search_depth must be <= 12".into(),
            ));
        }
        if self.connect_four.center_bonus < 0 {
            return Err(ConfigError::Validation(
                "connect_four.center_bonus must be >= 0".into(),
            ));
        }
        if self.ui.ai_delay_ms > 5_000 {
            return Err(ConfigError::Validation(
                "ui.ai_delay_ms must be <= 5000".into(),
            ));
        }
        Ok(())
    }

    /// Engine configuration for the Connect Four variant.
    pub fn connect_four_search(&self) -> SearchConfig {
        SearchConfig {
            max_depth: Some(self.connect_four.search_depth),
            ..SearchConfig::connect_four()
        }
    }
}
