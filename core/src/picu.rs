// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Local, NaiveDate};

use crate::datetime::{RelativeDate, parse_absolute_date};
use crate::{Assignment, AssignmentList, Config, Error, ListStore, RenderedLine};

/// Marks a due date written in NextThurs notation.
const RELATIVE_PREFIX: char = '#';

/// Picu session state: the to-do list and the file it is persisted to.
#[derive(Debug, Clone)]
pub struct Picu {
    now: NaiveDate,
    list: AssignmentList,
    store: ListStore,
    urgent_days: i64,
}

impl Picu {
    /// Opens the list described by the configuration, creating the file if needed.
    pub fn open(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;
        let path = config
            .list_path
            .ok_or_else(|| Error::Config("list path is not set".into()))?;

        let store = ListStore::new(path);
        let list = store.load()?;
        Ok(Self::with_list(list, store, config.urgent_days))
    }

    /// Creates a session from an already loaded list.
    pub fn with_list(list: AssignmentList, store: ListStore, urgent_days: i64) -> Self {
        Self {
            now: Local::now().date_naive(),
            list,
            store,
            urgent_days,
        }
    }

    /// The current date in the session.
    pub fn now(&self) -> NaiveDate {
        self.now
    }

    /// Set the date that relative due dates are resolved against.
    pub fn set_now(&mut self, now: NaiveDate) {
        self.now = now;
    }

    /// The to-do list.
    pub fn list(&self) -> &AssignmentList {
        &self.list
    }

    /// The store backing the list.
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Number of assignments on the list.
    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// Adds an assignment described as `subject, name, due date`.
    ///
    /// A due date starting with `#` is read as a NextThurs expression such as
    /// `#1 Thurs`; anything else must be an absolute date.
    pub fn new_assignment(&mut self, input: &str) -> Result<Assignment, Error> {
        let [subject, name, due] = split_fields::<3>(input).ok_or_else(|| {
            Error::parse("Please format the assignment as {subject}, {name}, {due date}")
        })?;

        if subject.contains(':') {
            return Err(Error::parse("The subject cannot contain ':'"));
        }

        let due = match due.strip_prefix(RELATIVE_PREFIX) {
            Some(expr) => expr.parse::<RelativeDate>()?.resolve(self.now)?,
            None => parse_absolute_date(due, self.now)?,
        };

        let assignment = Assignment::new(subject, name, due);
        tracing::debug!(?assignment, "new assignment");
        self.list.add(assignment.clone());
        Ok(assignment)
    }

    /// Removes the assignment described as `name, subject`.
    pub fn complete(&mut self, input: &str) -> Result<Assignment, Error> {
        let [name, subject] = split_fields::<2>(input)
            .ok_or_else(|| Error::parse("Please format the assignment as {name}, {subject}"))?;

        let removed = self.list.remove_by_key(name, subject)?;
        tracing::debug!(?removed, "assignment completed");
        Ok(removed)
    }

    /// Renders the list relative to the session date.
    pub fn check(&self) -> Vec<RenderedLine> {
        self.list.render_for_display(self.now, self.urgent_days)
    }

    /// Writes the list back to its file.
    pub fn save(&self) -> Result<(), Error> {
        self.store.save(&self.list)
    }
}

/// Splits comma separated input into exactly `N` non-empty, trimmed fields.
fn split_fields<const N: usize>(input: &str) -> Option<[&str; N]> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    let fields: [&str; N] = fields.try_into().ok()?;
    fields.iter().all(|f| !f.is_empty()).then_some(fields)
}
