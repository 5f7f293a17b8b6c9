//! fibbench configuration system
//!
//! User-level configuration with built-in defaults.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high -> low):
//! 1. CLI arguments
//! 2. User-level (~/.config/fibbench/config.toml)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use fibbench::util::config::load_user_config;
//!
//! // Load user-level config (defaults if not present)
//! let config = load_user_config().unwrap();
//! assert_eq!(config.run.index, 99999);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-level configuration for fibbench
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Run settings
    #[serde(default)]
    pub run: RunConfig,
    /// Conversion limits
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Log settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Default term index for a bare run
    #[serde(default = "default_index")]
    pub index: i64,
}

fn default_index() -> i64 {
    99999
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { index: 99999 }
    }
}

/// Conversion limit configuration
///
/// Caps the decimal rendering of results, not their computation. Absent
/// means unlimited.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LimitsConfig {
    /// Maximum digits a result may be rendered to
    #[serde(default)]
    pub max_str_digits: Option<usize>,
}

/// Log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level name: debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("fibbench"));
    }

    // Fallback to ~/.config/fibbench
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("fibbench"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("fibbench"));
    }

    None
}

/// Get the user config file path (~/.config/fibbench/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    let path = match get_config_path() {
        Some(p) => p,
        None => return Ok(UserConfig::default()),
    };

    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(ConfigError::IoError)?;

    toml::from_str(&content).map_err(ConfigError::ParseError)
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
