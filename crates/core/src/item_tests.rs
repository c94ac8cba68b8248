// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;
use yare::parameterized;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn builder_sets_fields() {
    let item = WorkItem::new("t-1", "In Progress")
        .with_due_date(day(2025, 6, 10))
        .with_title("Order countertops");

    assert_eq!(item.id, "t-1");
    assert_eq!(item.status, "In Progress");
    assert_eq!(item.due_date, Some(day(2025, 6, 10)));
    assert_eq!(item.title.as_deref(), Some("Order countertops"));
    assert!(item.project_id.is_none());
}

#[parameterized(
    not_started = { "Not Started", Some(TaskStatus::NotStarted) },
    cancelled = { "Cancelled", Some(TaskStatus::Cancelled) },
    rfi_open = { "Open", None },
    submittal = { "Approved as Noted", None },
    empty = { "", None },
)]
fn task_status_parses_leniently(raw: &str, expected: Option<TaskStatus>) {
    assert_eq!(WorkItem::new("t-1", raw).task_status(), expected);
}

#[parameterized(
    completed = { "Completed", true },
    cancelled = { "Cancelled", true },
    in_progress = { "In Progress", false },
    unknown = { "Open", false },
)]
fn is_closed(raw: &str, expected: bool) {
    assert_eq!(WorkItem::new("t-1", raw).is_closed(), expected);
}

#[test]
fn is_cancelled_only_for_cancelled() {
    assert!(WorkItem::new("t-1", "Cancelled").is_cancelled());
    assert!(WorkItem::new("t-1", "cancelled").is_cancelled());
    assert!(!WorkItem::new("t-1", "Completed").is_cancelled());
    assert!(!WorkItem::new("t-1", "Open").is_cancelled());
}

#[test]
fn deserializes_snake_case_row() {
    let item: WorkItem = serde_json::from_str(
        r#"{"id":"t-1","status":"Not Started","due_date":"2025-06-10","title":"Drawings","project_id":"p-9"}"#,
    )
    .unwrap();

    assert_eq!(item.due_date, Some(day(2025, 6, 10)));
    assert_eq!(item.project_id.as_deref(), Some("p-9"));
}

#[test]
fn deserializes_camel_case_aliases() {
    let item: WorkItem = serde_json::from_str(
        r#"{"id":"t-2","status":"Open","dueDate":"2025-01-03","name":"Submit RFI","projectId":"p-9"}"#,
    )
    .unwrap();

    assert_eq!(item.due_date, Some(day(2025, 1, 3)));
    assert_eq!(item.title.as_deref(), Some("Submit RFI"));
    assert_eq!(item.project_id.as_deref(), Some("p-9"));
}

#[test]
fn missing_optional_fields_default_to_none() {
    let item: WorkItem = serde_json::from_str(r#"{"id":"t-3","status":"Completed"}"#).unwrap();
    assert!(item.due_date.is_none());
    assert!(item.title.is_none());
    assert!(item.project_id.is_none());
}
