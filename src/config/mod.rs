//! Configuration file support for freedraw.
//!
//! Settings are read from `~/.config/freedraw/config.toml` and cover how the
//! canvas is embedded (height, border, cursor) and the main window. If no
//! config file exists, defaults are used.

pub mod types;

pub use types::{CanvasConfig, WindowConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Bundled example written by [`Config::create_default_file`].
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Root configuration deserialized from the TOML file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// draggable = false
/// height = 480.0
/// border_width = 2.0
///
/// [window]
/// width = 1024.0
/// height = 720.0
/// title = "Sketchpad"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Config {
    /// Canvas region settings
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Main window settings
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Validates and clamps all values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    pub fn validate_and_clamp(&mut self) {
        clamp_field("canvas.height", &mut self.canvas.height, 100.0, 4000.0);
        clamp_field("canvas.border_width", &mut self.canvas.border_width, 0.0, 16.0);
        clamp_field("window.width", &mut self.window.width, 320.0, 7680.0);
        clamp_field("window.height", &mut self.window.height, 240.0, 4320.0);

        if self.window.title.trim().is_empty() {
            log::warn!("Empty window.title, falling back to 'Freedraw'");
            self.window.title = WindowConfig::default().title;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("freedraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the configuration to TOML and writes it to `path`,
    /// creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the default location.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_field(name: &str, value: &mut f32, min: f32, max: f32) {
    if !(min..=max).contains(&*value) {
        log::warn!("Invalid {name} {value:.1}, clamping to {min:.0}-{max:.0} range");
        *value = if value.is_nan() {
            min
        } else {
            (*value).clamp(min, max)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.canvas.draggable);
        assert_eq!(config.canvas.height, 387.0);
        assert_eq!(config.canvas.border_width, 2.0);
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.height = 10.0;
        config.canvas.border_width = 99.0;
        config.window.width = 100_000.0;
        config.window.title = "   ".to_string();

        config.validate_and_clamp();

        assert_eq!(config.canvas.height, 100.0);
        assert_eq!(config.canvas.border_width, 16.0);
        assert_eq!(config.window.width, 7680.0);
        assert_eq!(config.window.title, "Freedraw");
    }

    #[test]
    fn load_from_reads_and_clamps() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas]\ndraggable = false\nheight = 5.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.canvas.draggable);
        assert_eq!(config.canvas.height, 100.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[canvas\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn save_to_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.canvas.draggable = false;
        config.window.title = "Sketch".to_string();

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("canvas"));
        assert!(schema.contains("window"));
    }
}
