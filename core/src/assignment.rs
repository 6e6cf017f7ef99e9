// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::Error;
use crate::datetime::{RelativeDate, STABLE_FORMAT_DATE};

/// An assignment on the to-do list.
///
/// Assignments are identified by their `(name, subject)` pair; the due date is
/// only used for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The class the assignment belongs to, e.g. `Math`.
    pub subject: String,

    /// The assignment itself, e.g. `Homework 1`.
    pub name: String,

    /// The day the assignment is due.
    pub due: NaiveDate,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(subject: impl Into<String>, name: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            subject: subject.into(),
            name: name.into(),
            due,
        }
    }

    /// Whether this assignment has the given key.
    pub fn is(&self, name: &str, subject: &str) -> bool {
        self.name == name && self.subject == subject
    }

    /// Formats the assignment as one line of the list file, without the newline.
    pub fn to_line(&self) -> String {
        format!(
            "{}: {}, {}",
            self.subject,
            self.name,
            self.due.format(STABLE_FORMAT_DATE)
        )
    }

    /// Returns a displayable view with the due date written relative to `today`.
    pub fn display_relative(&self, today: NaiveDate) -> impl fmt::Display + '_ {
        RelativeView {
            assignment: self,
            due: RelativeDate::from_date(self.due, today),
        }
    }
}

impl FromStr for Assignment {
    type Err = Error;

    /// Parses one line of the list file, formatted as `subject: name, MM/DD/YYYY`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (subject, rest) = line
            .split_once(':')
            .ok_or_else(|| Error::format(line, "missing ':' after the subject"))?;
        let (name, due) = rest
            .split_once(',')
            .ok_or_else(|| Error::format(line, "missing ',' after the name"))?;

        let due = due.trim();
        let due = NaiveDate::parse_from_str(due, STABLE_FORMAT_DATE)
            .map_err(|e| Error::format(line, format!("invalid due date '{due}': {e}")))?;

        Ok(Self::new(subject.trim(), name.trim(), due))
    }
}

struct RelativeView<'a> {
    assignment: &'a Assignment,
    due: RelativeDate,
}

impl fmt::Display for RelativeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.assignment;
        write!(f, "{}: {}, {}", a.subject, a.name, self.due)
    }
}
