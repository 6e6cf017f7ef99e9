// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

//! The `picu` console: command-line arguments, configuration file and the
//! interactive prompt.

mod cli;
mod command;
mod config;
mod repl;

use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub use crate::cli::Cli;
pub use crate::command::{ReplCommand, help_text};
pub use crate::config::parse_config;
pub use crate::repl::Repl;

const PICU_LOG_ENV: &str = "PICU_LOG";

/// Run the Picu command-line interface.
pub fn run() -> ExitCode {
    init_tracing();

    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the prompt.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(PICU_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
