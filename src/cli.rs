//! Command line interface for the `zini` binary

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use crate::error::IniError;
use crate::models::Document;
use crate::settings::Settings;

/// Inspect and edit INI configuration files
#[derive(Parser, Debug)]
#[command(name = "zini", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. debug or warn (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// INI file to operate on
    #[arg(value_name = "INI_FILE")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the normalized INI text to stdout
    Print,
    /// List section names
    Sections,
    /// Print the value of a key
    Get { section: String, key: String },
    /// Update a key, adding it (and its section) when missing
    Set {
        section: String,
        key: String,
        value: String,
    },
    /// Remove every pair with the given key
    RemoveKey { section: String, key: String },
    /// Remove a whole section
    RemoveSection { section: String },
}

/// Execute one command against the INI file named in `args`
///
/// Output of `print`, `sections` and `get` goes to `out`. Mutating commands
/// save the file before returning.
pub fn run<W: Write>(args: Args, settings: &Settings, out: &mut W) -> Result<(), IniError> {
    let mut doc = Document::with_limits(settings.limits)?;
    doc.open(&args.file)?;

    match args.command {
        Command::Print => {
            doc.print(out)?;
        }
        Command::Sections => {
            for name in doc.section_names() {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Get { section, key } => match doc.get_value_ex(&section, &key) {
            Some(value) => writeln!(out, "{}", value)?,
            None => return Err(IniError::KeyNotFound { section, key }),
        },
        Command::Set {
            section,
            key,
            value,
        } => {
            // Address the section and key by the names they are stored under
            let limits = doc.limits();
            let section = limits.section_name(&section).to_string();
            let key = limits.key(&key).to_string();

            if !doc.section_exists(&section) {
                doc.add_section(&section)?;
            }
            if !doc.set_value_ex(&section, &key, &value)? {
                doc.add_pair_ex(&section, &key, &value)?;
            }
            doc.save(&args.file)?;
            info!("Set [{}] {} in '{}'", section, key, args.file.display());
        }
        Command::RemoveKey { section, key } => {
            let removed = doc.remove_pair_ex(&section, &key)?;
            if removed == 0 {
                return Err(IniError::KeyNotFound { section, key });
            }
            doc.save(&args.file)?;
            info!("Removed {} pair(s) from [{}]", removed, section);
        }
        Command::RemoveSection { section } => {
            doc.remove_section(&section)?;
            doc.save(&args.file)?;
            info!("Removed section [{}]", section);
        }
    }

    Ok(())
}
