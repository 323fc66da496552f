pub mod cli;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the document types for easier access
pub use models::{Document, Limits, Pair, Section};

pub use error::IniError;
pub use settings::Settings;
