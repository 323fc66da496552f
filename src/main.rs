use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use zini::cli::{run, Args};
use zini::Settings;

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error: failed to load settings '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    // Initialize the logger
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| settings.log_level.clone());
    env_logger::init_from_env(Env::default().default_filter_or(level));

    match run(args, &settings, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
