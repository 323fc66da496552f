use std::io;

use thiserror::Error;

/// Errors produced while loading, mutating or saving an INI document
#[derive(Error, Debug)]
pub enum IniError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Key '{key}' not found in section '{section}'")]
    KeyNotFound { section: String, key: String },

    #[error("Allocation failure: {0}")]
    AllocationFailure(String),

    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
