use std::{io, process::ExitCode};

use clap::Parser;
use log::error;

mod app;
mod cli;
mod constants;
mod domain;
mod error;
mod logging;
mod picker;
mod state;
mod storage;

fn main() -> Result<ExitCode, io::Error> {
    let args = cli::Cli::parse();

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| logging::default_log_level().to_string());
    if let Err(e) = logging::init_logging(&level, &storage::get_state_dir()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let paths = storage::ResourcePaths::resolve(args.categories.clone(), args.recipes.clone());

    match args.command {
        Some(command) => match cli::run_command(command, &paths, args.hour) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                error!("event=command_failed error={}", e);
                eprintln!("Error: {}", e);
                Ok(ExitCode::FAILURE)
            }
        },
        None => app::run_ui(&paths, cli::clock(args.hour)).map(|()| ExitCode::SUCCESS),
    }
}
