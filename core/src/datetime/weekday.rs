// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;

use crate::Error;

/// Accepted spellings for each day, all lowercase.
const WEEKDAY_TOKENS: [(Weekday, &[&str]); 7] = [
    (Weekday::Mon, &["monday", "mon", "m"]),
    (Weekday::Tue, &["tuesday", "tues", "tue", "tu", "t"]),
    (Weekday::Wed, &["wednesday", "wedn", "wed", "w"]),
    (Weekday::Thu, &["thursday", "thurs", "thur", "thu", "th", "r"]),
    (Weekday::Fri, &["friday", "fri", "f"]),
    (Weekday::Sat, &["saturday", "sat", "sa"]),
    (Weekday::Sun, &["sunday", "sun", "su"]),
];

/// Parses a day name or one of its abbreviations, case-insensitively.
///
/// Single letters follow the usual timetable convention, so `t` is Tuesday and
/// `r` is Thursday. Saturday and Sunday have no single-letter form.
pub fn parse_weekday(token: &str) -> Result<Weekday, Error> {
    let lower = token.trim().to_lowercase();
    WEEKDAY_TOKENS
        .iter()
        .find(|(_, tokens)| tokens.contains(&lower.as_str()))
        .map(|(day, _)| *day)
        .ok_or_else(|| Error::parse(format!("Unknown day of week: '{token}'")))
}

/// Day index used in week arithmetic: Monday is 1 and Sunday is 7.
pub fn weekday_index(day: Weekday) -> i64 {
    i64::from(day.number_from_monday())
}

/// Full English name of the day.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
