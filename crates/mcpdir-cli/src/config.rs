//! User configuration file
//!
//! Read from `<config dir>/mcpdir/config.toml` unless `--config` or
//! `MCPDIR_CONFIG` names another path. Every key is optional.

use mcpdir_snippets::Platform;
use mcpdir_verify::VerifyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Settings loaded from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Platform used when a command is not given `--platform`
    pub default_platform: Platform,

    pub verify: VerifyConfig,
}

impl Config {
    /// Platform config directory location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mcpdir").join("config.toml"))
    }

    /// Load from `explicit` or the default location. A missing file yields
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })?;
        config.verify.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// `--platform` when given, otherwise the configured default.
    pub fn platform_or_default(&self, platform: Option<Platform>) -> Platform {
        platform.unwrap_or(self.default_platform)
    }
}
