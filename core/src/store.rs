// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use crate::{AssignmentList, Error};

/// The plain text file an [`AssignmentList`] lives in between runs.
#[derive(Debug, Clone)]
pub struct ListStore {
    path: PathBuf,
}

impl ListStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the list file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the list, creating an empty file if none exists yet.
    ///
    /// Lines that cannot be parsed are skipped with a warning.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<AssignmentList, Error> {
        if !self.path.exists() {
            tracing::info!("list file not found, creating an empty one");
            self.save(&AssignmentList::new())?;
            return Ok(AssignmentList::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let (list, errors) = AssignmentList::parse(&content);
        for e in &errors {
            tracing::warn!(line_no = e.line_no, err = %e.error, "skipping malformed line");
        }

        tracing::debug!(count = list.count(), skipped = errors.len(), "list loaded");
        Ok(list)
    }

    /// Replaces the list file with the serialized list.
    ///
    /// The content goes to a sibling temporary file first and is then renamed
    /// over the list file, so an interrupted write leaves the old file intact.
    pub fn save(&self, list: &AssignmentList) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, list.serialize()).map_err(|e| Error::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| Error::io(&self.path, e))?;

        tracing::trace!(path = %self.path.display(), count = list.count(), "list saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|a| a.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
