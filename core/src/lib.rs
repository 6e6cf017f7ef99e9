// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Picu core: assignments, the sorted to-do list, NextThurs relative dates and
//! the plain text file the list is kept in.

mod assignment;
mod assignment_list;
mod config;
mod datetime;
mod error;
mod picu;
mod store;

pub use crate::assignment::Assignment;
pub use crate::assignment_list::{AssignmentList, LineError, RenderedLine};
pub use crate::config::{APP_NAME, Config, LIST_FILE_NAME, expand_path, get_config_dir};
pub use crate::datetime::{
    RelativeDate, STABLE_FORMAT_DATE, parse_absolute_date, parse_weekday, weekday_index,
    weekday_name,
};
pub use crate::error::Error;
pub use crate::picu::Picu;
pub use crate::store::ListStore;
