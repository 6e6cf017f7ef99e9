// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use picu_core::{APP_NAME, Picu};

use crate::config::parse_config;
use crate::repl::Repl;

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Path to the list file, overriding the configuration
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A console to-do list for assignments, with NextThurs dates.")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/picu/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/picu/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-f --file [FILE] "Path to the list file")
                    .long_help(
                        "\
Path to the list file. Overrides `list_path` from the configuration, which defaults to \
$XDG_STATE_HOME/picu/List.txt.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Self {
        Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            file: matches.get_one::<PathBuf>("file").cloned(),
        }
    }

    /// Open the list and run the interactive session on the terminal
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let mut config = parse_config(self.config)?;
        if let Some(file) = self.file {
            config.list_path = Some(file);
        }

        let mut picu = Picu::open(config)?;
        tracing::debug!(path = %picu.store().path().display(), "list opened");

        let stdin = io::stdin();
        let stdout = io::stdout();
        Repl::new(&mut picu, stdin.lock(), stdout.lock()).run()?;
        Ok(())
    }
}
