//! Configuration file support for HueStep.
//!
//! Settings are stored as pretty JSON next to other per-user config files and
//! are versioned so older binaries refuse files they cannot understand.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

const APP_DIR: &str = "huestep";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    #[serde(default)]
    pub preferences: UserPreferences,

    #[serde(default)]
    pub render: RenderSettings,

    #[serde(default)]
    pub steps: StepSettings,
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory holding per-user documents. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,
}

/// Palette card rendering defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default = "default_preview_size")]
    pub preview_size: u32,

    #[serde(default = "default_export_size")]
    pub export_size: u32,

    #[serde(default = "default_color_name")]
    pub default_color_name: String,
}

fn default_preview_size() -> u32 {
    huestep_canvas::PREVIEW_SIZE as u32
}

fn default_export_size() -> u32 {
    huestep_canvas::EXPORT_SIZE
}

fn default_color_name() -> String {
    crate::share::DEFAULT_COLOR_NAME.to_string()
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            preview_size: default_preview_size(),
            export_size: default_export_size(),
            default_color_name: default_color_name(),
        }
    }
}

/// Step counter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSettings {
    #[serde(default = "default_meters_per_step")]
    pub meters_per_step: f64,
}

fn default_meters_per_step() -> f64 {
    crate::steps::DEFAULT_METERS_PER_STEP
}

impl Default for StepSettings {
    fn default() -> Self {
        Self {
            meters_per_step: default_meters_per_step(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            render: RenderSettings::default(),
            steps: StepSettings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    pub fn default_filename() -> &'static str {
        "huestep-config.json"
    }

    /// Default config file path for auto-load/save.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join(APP_DIR).join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join(APP_DIR)
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Directory for per-user documents: the configured one, or
    /// `<data dir>/huestep`, or `./huestep-data` when neither is known.
    pub fn data_dir(&self) -> PathBuf {
        if !self.preferences.data_dir.is_empty() {
            return PathBuf::from(&self.preferences.data_dir);
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("huestep-data"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
