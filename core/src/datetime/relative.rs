// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use regex::Regex;

use crate::Error;
use crate::datetime::weekday::{parse_weekday, weekday_index, weekday_name};

/// A date expressed relative to the current week, also known as NextThurs.
///
/// Weeks begin on Monday. `1 Thurs` is the Thursday of the week after the
/// current one, `0 Mon` is the Monday of the current week and `-3 Fri` is the
/// Friday three weeks back. The expression carries no reference date: it is
/// resolved against whatever "now" the caller passes in, so the same
/// expression names different calendar dates on different days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeDate {
    /// Number of weeks from the current week, negative for the past.
    pub week_offset: i64,

    /// Day within the target week.
    pub weekday: Weekday,
}

impl RelativeDate {
    /// Creates a new relative date.
    pub fn new(week_offset: i64, weekday: Weekday) -> Self {
        Self {
            week_offset,
            weekday,
        }
    }

    /// Resolves the expression to a calendar date, relative to the Monday of
    /// the week containing `now`.
    pub fn resolve(&self, now: NaiveDate) -> Result<NaiveDate, Error> {
        let out_of_range = || Error::parse(format!("Date '{self}' is out of range"));

        let shift = weekday_index(self.weekday) - weekday_index(now.weekday());
        let days = self
            .week_offset
            .checked_mul(7)
            .and_then(|d| d.checked_add(shift))
            .ok_or_else(out_of_range)?;

        TimeDelta::try_days(days)
            .and_then(|delta| now.checked_add_signed(delta))
            .ok_or_else(out_of_range)
    }

    /// Expresses `date` relative to the week containing `now`.
    ///
    /// This is the inverse of [`RelativeDate::resolve`] for a fixed `now`.
    pub fn from_date(date: NaiveDate, now: NaiveDate) -> Self {
        // Distance between the two week anchors (Mondays), always a multiple of 7.
        let days = date.signed_duration_since(now).num_days() - weekday_index(date.weekday())
            + weekday_index(now.weekday());
        Self::new(days / 7, date.weekday())
    }
}

impl fmt::Display for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.week_offset, weekday_name(self.weekday))
    }
}

impl FromStr for RelativeDate {
    type Err = Error;

    /// Parses expressions like `1 Thurs`, `0 mon`, `-3 F` or `+2 sunday`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const RE: &str = r"^\s*([+-]?\d+)\s+(\S+)\s*$";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

        let Some(captures) = re.captures(s) else {
            return Err(Error::parse(format!(
                "Invalid NextThurs date '{s}', expected '<weeks> <day>' such as '1 Thurs'"
            )));
        };

        let week_offset = captures[1]
            .parse::<i64>()
            .map_err(|e| Error::parse(format!("Invalid week offset '{}': {e}", &captures[1])))?;
        let weekday = parse_weekday(&captures[2])?;
        Ok(Self::new(week_offset, weekday))
    }
}
