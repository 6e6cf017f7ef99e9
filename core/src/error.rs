// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors produced by the Picu core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed user input, such as a bad date or a wrong number of fields.
    #[error("{0}")]
    Parse(String),

    /// A persisted line that cannot be turned back into an assignment.
    #[error("Invalid assignment line '{line}': {reason}")]
    Format {
        /// The offending line, trimmed
        line: String,

        /// Why the line was rejected
        reason: String,
    },

    /// No assignment matches the given key.
    #[error("There is no assignment \"{name}\" in subject \"{subject}\"")]
    NotFound {
        /// Name of the requested assignment
        name: String,

        /// Subject of the requested assignment
        subject: String,
    },

    /// The list file could not be read or written.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// Path of the file being accessed
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub(crate) fn format(line: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            line: line.trim().to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
