// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta};

use crate::Error;

/// NOTE: Used for storing in the list file, so it should be stable across different runs.
pub const STABLE_FORMAT_DATE: &str = "%m/%d/%Y";

/// Formats accepted for absolute due dates, tried in order.
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", STABLE_FORMAT_DATE, "%B %d %Y"];

/// Parses an absolute due date such as `2024-03-15`, `03/15/2024`, `March 15 2024`
/// or one of the keywords `today`, `tomorrow` and `yesterday`.
pub fn parse_absolute_date(s: &str, today: NaiveDate) -> Result<NaiveDate, Error> {
    let s = s.trim();

    // Handle keywords
    let offset = match s.to_lowercase().as_str() {
        "yesterday" => Some(-1),
        "today" => Some(0),
        "tomorrow" => Some(1),
        _ => None,
    };
    if let Some(days) = offset {
        return today
            .checked_add_signed(TimeDelta::days(days))
            .ok_or_else(|| Error::parse(format!("Date '{s}' is out of range")));
    }

    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| {
            Error::parse(format!(
                "Not a valid date format: '{s}'. Expected YYYY-MM-DD, MM/DD/YYYY or 'Month DD YYYY'"
            ))
        })
}
