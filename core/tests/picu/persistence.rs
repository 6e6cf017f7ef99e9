// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Loading and saving the list file through the session.

use std::fs;

use picu_core::{Error, Picu};

use crate::common::{TempList, assert_file_lines, open_at, test_config, wednesday};

#[test]
fn picu_open_creates_missing_list() {
    let tmp = TempList::new();
    assert!(!tmp.path.exists());

    let picu = open_at(&tmp.path, wednesday());
    assert_eq!(picu.count(), 0);
    assert!(tmp.path.exists());
    assert_eq!(picu.store().path(), tmp.path);
}

#[test]
fn picu_open_tolerates_blank_first_line() {
    let tmp = TempList::with_content("\nMath: Homework1, 01/08/2024\n");
    let picu = open_at(&tmp.path, wednesday());
    assert_eq!(picu.count(), 1);
}

#[test]
fn picu_open_skips_malformed_lines() {
    let tmp = TempList::with_content(
        "Math: Homework1, 01/08/2024\nthis line is broken\nCS: Project, 03/15/2024\nCS: Lab, 1/1\n",
    );
    let picu = open_at(&tmp.path, wednesday());
    assert_eq!(picu.count(), 2);
}

#[test]
fn picu_open_fails_on_unreadable_list() {
    let tmp = TempList::new();
    fs::create_dir(&tmp.path).unwrap();

    let err = Picu::open(test_config(&tmp.path)).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn picu_save_writes_sorted_lines() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());
    picu.new_assignment("CS, Project, 2024-03-15").unwrap();
    picu.new_assignment("Math, Homework1, #1 Mon").unwrap();
    picu.save().unwrap();

    assert_file_lines(
        &tmp.path,
        &["Math: Homework1, 01/08/2024", "CS: Project, 03/15/2024"],
    );
    assert!(tmp.read().ends_with('\n'));
}

#[test]
fn picu_save_then_reopen_round_trips() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());
    picu.new_assignment("Math, Homework1, #1 Mon").unwrap();
    picu.new_assignment("Math, Homework2, #1 Mon").unwrap();
    picu.new_assignment("CS, Project, 2024-03-15").unwrap();
    picu.save().unwrap();

    let reopened = open_at(&tmp.path, wednesday());
    assert_eq!(reopened.list(), picu.list());
}

#[test]
fn picu_save_rewrites_bad_lines_away() {
    let tmp = TempList::with_content("garbage\nMath: Homework1, 01/08/2024\n");
    let picu = open_at(&tmp.path, wednesday());
    picu.save().unwrap();

    assert_file_lines(&tmp.path, &["Math: Homework1, 01/08/2024"]);
}
