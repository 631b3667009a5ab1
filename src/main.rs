#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! catalog-list — list catalog products with inventory fields and website assignments.

mod catalog;
mod cli;
mod commands;
mod config;
mod types;

use clap::Parser;

use cli::{Cli, write_error};
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = Config::from_env();
    config::init_logging(&config);

    if let Err(err) = commands::dispatch(&cli.command, &config) {
        tracing::debug!(error = ?err, "command failed");
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
