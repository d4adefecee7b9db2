//! Configuration for the loxc driver.
//!
//! Settings come from an optional `loxc.toml`. Command-line flags take
//! precedence over anything read here.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};
use crate::render::OutputFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxc.toml";

/// Exit status used when a scan reports lexical errors.
pub const DEFAULT_ERROR_EXIT_CODE: u8 = 65;

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Tokenize-specific configuration.
    #[serde(default)]
    pub tokenize: TokenizeConfig,
}

/// Tokenize-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenizeConfig {
    /// Exit status when lexical errors occurred.
    #[serde(default = "default_error_exit_code")]
    pub error_exit_code: u8,

    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_error_exit_code() -> u8 {
    DEFAULT_ERROR_EXIT_CODE
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            error_exit_code: DEFAULT_ERROR_EXIT_CODE,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/loxc/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&content).map_err(|e| {
            DriverError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot be honoured.
    ///
    /// A zero `error_exit_code` would make a scan with lexical errors look
    /// successful, so it is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.tokenize.error_exit_code == 0 {
            return Err(DriverError::Config(
                "tokenize.error_exit_code must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("loxc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("loxc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    pub fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
