// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary list files for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A list file path inside a temporary directory.
///
/// The directory, and everything in it, is removed when this is dropped.
#[derive(Debug)]
pub struct TempList {
    _dir: TempDir,
    /// Path of the list file, which does not exist until written.
    pub path: PathBuf,
}

impl TempList {
    /// Creates a fresh temporary directory with no list file in it.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("List.txt");
        Self { _dir: dir, path }
    }

    /// Creates a temporary list file with the given content.
    pub fn with_content(content: &str) -> Self {
        let list = Self::new();
        fs::write(&list.path, content).expect("failed to write list file");
        list
    }

    /// Reads the list file back.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("failed to read list file")
    }
}
