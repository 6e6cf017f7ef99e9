// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Adding and completing assignments through the session.

use chrono::Weekday;
use picu_core::{Error, RelativeDate};

use crate::common::{TempList, assert_sorted, date, open_at, wednesday};

#[test]
fn picu_new_assignment_resolves_relative_date() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());

    let a = picu.new_assignment("Math, Homework1, #1 Mon").unwrap();
    assert_eq!(a.subject, "Math");
    assert_eq!(a.name, "Homework1");
    assert_eq!(a.due, date(2024, 1, 8));
}

#[test]
fn picu_new_assignment_accepts_abbreviated_days() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());

    for (input, expected) in [
        ("Bio, Lab, #0 r", date(2024, 1, 4)),
        ("Bio, Quiz, #-1 F", date(2023, 12, 29)),
        ("Bio, Essay, #2 sunday", date(2024, 1, 21)),
        ("Bio, Reading, #0 TUES", date(2024, 1, 2)),
    ] {
        let a = picu.new_assignment(input).unwrap();
        assert_eq!(a.due, expected, "input '{input}'");
    }
    assert_eq!(picu.count(), 4);
    assert_sorted(picu.list());
}

#[test]
fn picu_new_assignment_keeps_absolute_date() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());

    let a = picu.new_assignment("CS, Project, 2024-03-15").unwrap();
    assert_eq!(a.due, date(2024, 3, 15));

    let a = picu.new_assignment("CS, Midterm, 04/02/2024").unwrap();
    assert_eq!(a.due, date(2024, 4, 2));

    let a = picu.new_assignment("CS, Reading, tomorrow").unwrap();
    assert_eq!(a.due, date(2024, 1, 4));
}

#[test]
fn picu_new_assignment_rejects_wrong_field_count() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());

    for input in ["OnlyOneField", "Math, Homework1", "a, b, c, d", "", "Math, , #1 Mon"] {
        let err = picu.new_assignment(input).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "input '{input}'");
    }
    assert_eq!(picu.count(), 0);
}

#[test]
fn picu_new_assignment_rejects_bad_dates() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());

    for input in [
        "Math, Homework1, #1 xyz",
        "Math, Homework1, #Mon",
        "Math, Homework1, #",
        "Math, Homework1, someday",
        "Math, Homework1, 2024-02-30",
    ] {
        assert!(picu.new_assignment(input).is_err(), "input '{input}'");
    }
    assert_eq!(picu.count(), 0);
}

#[test]
fn picu_complete_removes_assignment() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());
    picu.new_assignment("Math, Homework1, #1 Mon").unwrap();
    picu.new_assignment("CS, Project, 2024-03-15").unwrap();

    let removed = picu.complete("Homework1, Math").unwrap();
    assert_eq!(removed.name, "Homework1");
    assert_eq!(picu.count(), 1);
    assert!(picu.list().iter().all(|a| a.name != "Homework1"));
}

#[test]
fn picu_complete_reports_unknown_assignment() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());
    picu.new_assignment("Math, Homework1, #1 Mon").unwrap();

    // Key order is name first, then subject.
    let err = picu.complete("Math, Homework1").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(
        err.to_string(),
        "There is no assignment \"Math\" in subject \"Homework1\""
    );
    assert_eq!(picu.count(), 1);

    let err = picu.complete("Homework1").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn picu_check_renders_relative_dates() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());
    picu.new_assignment("CS, Project, 2024-03-15").unwrap();
    picu.new_assignment("Math, Homework1, #1 Mon").unwrap();
    picu.new_assignment("Art, Sketch, today").unwrap();

    let lines = picu.check();
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Art: Sketch, 0 Wednesday",
            "Math: Homework1, 1 Monday",
            "CS: Project, 10 Friday",
        ]
    );
    let urgent: Vec<_> = lines.iter().map(|l| l.urgent).collect();
    assert_eq!(urgent, vec![true, false, false]);
}

#[test]
fn picu_check_shifts_with_the_current_date() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());
    picu.new_assignment("Math, Homework1, #1 Mon").unwrap();

    // A week later the same assignment is due this week.
    picu.set_now(date(2024, 1, 10));
    let expr = RelativeDate::from_date(picu.list().iter().next().unwrap().due, picu.now());
    assert_eq!(expr, RelativeDate::new(0, Weekday::Mon));
    assert!(picu.check()[0].urgent);
}

#[test]
fn picu_new_assignment_goes_before_same_day_ones() {
    let tmp = TempList::new();
    let mut picu = open_at(&tmp.path, wednesday());
    picu.new_assignment("Math, Homework1, #1 Mon").unwrap();
    picu.new_assignment("CS, Lab, 2024-01-08").unwrap();
    picu.new_assignment("Bio, Reading, #1 Tue").unwrap();

    let names: Vec<_> = picu.list().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Lab", "Homework1", "Reading"]);

    // Reopening keeps the saved order of same-day assignments.
    picu.save().unwrap();
    let reopened = open_at(&tmp.path, wednesday());
    assert_eq!(reopened.list(), picu.list());
}
