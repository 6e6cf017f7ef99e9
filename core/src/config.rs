// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::Error;

/// The name of the Picu application.
pub const APP_NAME: &str = "picu";

/// File name of the list inside the state directory.
pub const LIST_FILE_NAME: &str = "List.txt";

/// Configuration for the Picu application.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the list file. Defaults to `$XDG_STATE_HOME/picu/List.txt`.
    #[serde(default)]
    pub list_path: Option<PathBuf>,

    /// Assignments due in fewer than this many days are highlighted.
    #[serde(default = "default_urgent_days")]
    pub urgent_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_path: None,
            urgent_days: default_urgent_days(),
        }
    }
}

impl Config {
    /// Normalize the configuration, resolving the list path.
    pub fn normalize(&mut self) -> Result<(), Error> {
        self.list_path = Some(match &self.list_path {
            Some(path) => expand_path(path)?,
            None => get_state_dir()?.join(APP_NAME).join(LIST_FILE_NAME),
        });

        if self.urgent_days < 0 {
            tracing::warn!(
                urgent_days = self.urgent_days,
                "negative urgent_days, only long overdue assignments will be highlighted"
            );
        }
        Ok(())
    }
}

fn default_urgent_days() -> i64 {
    1
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Config(format!("Invalid path: {}", path.display())))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::Config("User-specific home directory not found".into()))
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| Error::Config("User-specific config directory not found".into()))
}

fn get_state_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| Error::Config("User-specific state directory not found".into()))
}
