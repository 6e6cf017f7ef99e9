// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::{Assignment, Error};

/// Assignments kept in ascending order of due date.
///
/// A newly added assignment goes before any already due on the same day. A
/// list read back from its serialized form keeps the order of the file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssignmentList {
    assignments: Vec<Assignment>,
}

/// One assignment rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// `subject: name, <NextThurs due date>`
    pub text: String,

    /// Due today or overdue, should be highlighted.
    pub urgent: bool,
}

/// A line of a list file that could not be loaded.
#[derive(Debug)]
pub struct LineError {
    /// 1-based line number.
    pub line_no: usize,

    /// Why the line was rejected.
    pub error: Error,
}

impl AssignmentList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the body of a list file, one assignment per line.
    ///
    /// Blank lines are ignored. Malformed lines are skipped and returned
    /// alongside the list so the caller can report them. Lines already in due
    /// date order are kept in file order; out of order lines are inserted.
    pub fn parse(text: &str) -> (Self, Vec<LineError>) {
        let mut list = Self::new();
        let mut errors = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match Self::deserialize(line) {
                Ok(a) => list.append(a),
                Err(error) => errors.push(LineError {
                    line_no: i + 1,
                    error,
                }),
            }
        }
        (list, errors)
    }

    /// Parses a single line of a list file.
    pub fn deserialize(line: &str) -> Result<Assignment, Error> {
        line.parse()
    }

    /// Number of assignments.
    pub fn count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the list has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates the assignments in due date order.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// Inserts an assignment before the first one due on the same day or later.
    pub fn add(&mut self, assignment: Assignment) {
        let pos = self
            .assignments
            .iter()
            .position(|a| a.due >= assignment.due)
            .unwrap_or(self.assignments.len());

        tracing::debug!(
            subject = %assignment.subject,
            name = %assignment.name,
            due = %assignment.due,
            pos,
            "adding assignment"
        );
        self.assignments.insert(pos, assignment);
    }

    /// Pushes an assignment read from a file, falling back to [`Self::add`] if
    /// it would break the due date order.
    fn append(&mut self, assignment: Assignment) {
        match self.assignments.last() {
            Some(last) if last.due > assignment.due => self.add(assignment),
            _ => self.assignments.push(assignment),
        }
    }

    /// Removes the first assignment with the given name and subject.
    ///
    /// Both must match exactly. The list is left untouched if nothing matches.
    pub fn remove_by_key(&mut self, name: &str, subject: &str) -> Result<Assignment, Error> {
        let pos = self
            .assignments
            .iter()
            .position(|a| a.is(name, subject))
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
                subject: subject.to_string(),
            })?;

        Ok(self.assignments.remove(pos))
    }

    /// Renders every assignment with its due date relative to `today`.
    ///
    /// Lines due within `urgent_days` days of `today`, or already overdue, are
    /// flagged as urgent.
    pub fn render_for_display(&self, today: NaiveDate, urgent_days: i64) -> Vec<RenderedLine> {
        self.assignments
            .iter()
            .map(|a| RenderedLine {
                text: a.display_relative(today).to_string(),
                urgent: a.due.signed_duration_since(today).num_days() < urgent_days,
            })
            .collect()
    }

    /// Serializes the list into the list file format, one line per assignment.
    pub fn serialize(&self) -> String {
        self.assignments
            .iter()
            .map(|a| a.to_line() + "\n")
            .collect()
    }
}

impl<'a> IntoIterator for &'a AssignmentList {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
