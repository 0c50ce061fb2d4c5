//! Row building configuration
//!
//! Settings are persisted with `confy` in the OS-specific config directory,
//! so a host application can tune the context window without recompiling.

use crate::constant::{APP_NAME, DEFAULT_CONTEXT_LINES};
use crate::offset::OffsetUnit;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Unchanged lines shown next to a change before the rest is collapsed
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Run semantic cleanup on intra-line character diffs
    #[serde(default = "default_cleanup")]
    pub cleanup: bool,

    /// How the offset index measures line length
    #[serde(default)]
    pub offset_unit: OffsetUnit,
}

fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

fn default_cleanup() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            cleanup: default_cleanup(),
            offset_unit: OffsetUnit::default(),
        }
    }
}
