//! CLI entry point for maze generation and tileset extraction

use clap::Parser;
use log::error;
use mazetile::io::cli::{Cli, CommandRunner};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli);
    match runner.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
