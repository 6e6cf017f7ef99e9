// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

mod relative;
mod util;
mod weekday;

pub use relative::RelativeDate;
pub use util::{STABLE_FORMAT_DATE, parse_absolute_date};
pub use weekday::{parse_weekday, weekday_index, weekday_name};
