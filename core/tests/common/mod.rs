// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary list files with auto-cleanup

mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_file_lines, assert_sorted};
#[allow(unused_imports)]
pub use fixtures::{date, open_at, test_config, wednesday};
pub use temp_dir::TempList;
