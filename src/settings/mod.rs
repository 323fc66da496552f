//! Settings for the `zini` command line tool
//!
//! Settings come from an optional TOML file:
//!
//! ```toml
//! log_level = "debug"
//!
//! [limits]
//! max_section_len = 64
//! max_key_len = 64
//! max_value_len = 512
//! ```
//!
//! Every field is optional and falls back to its default.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::IniError;
use crate::models::Limits;

pub fn default_log_level() -> String {
    "info".to_string()
}

/// Settings structure for the command line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Field bounds for documents opened by the tool
    #[serde(default)]
    pub limits: Limits,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            limits: Limits::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, IniError> {
        let settings: Settings = toml::from_str(content)?;
        settings.limits.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, falling back to defaults if it is absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Settings file '{}' not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
