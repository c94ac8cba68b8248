// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for station derivation feeding the calendar.
//!
//! Walks a station's linked items through the full pipeline the workflow
//! view uses: aggregate status, nearest deadline, display color, urgency.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chrono::NaiveDate;
use jobsite_core::{
    ColorToken, DaySource, FixedDay, StationStatus, StationSummary, Urgency, WorkItem,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn single_unstarted_task_near_deadline_renders_warning() {
    // One task, not started, due in two days. The station reads as not
    // started, but deadline proximity overrides the base color rule: the
    // node renders warning-amber, not the neutral not-started color.
    let today = FixedDay(day(2025, 6, 8)).today();
    let linked = vec![WorkItem::new("t-1", "Not Started").with_due_date(day(2025, 6, 10))];

    let summary = StationSummary::derive(&linked, today);
    assert_eq!(summary.status, StationStatus::NotStarted);
    assert_eq!(summary.deadline, Some(day(2025, 6, 10)));
    assert_eq!(summary.days_until, Some(2));
    assert_eq!(summary.color, ColorToken::Warning);
    assert_eq!(summary.urgency, Urgency::Critical);
}

#[test]
fn station_lifecycle_from_empty_to_completed() {
    let today = day(2025, 6, 8);

    // Nothing linked yet.
    let summary = StationSummary::derive(&[], today);
    assert_eq!(summary.status, StationStatus::NotStarted);
    assert_eq!(summary.color, ColorToken::Tertiary);

    // Work begins, due date comfortably out.
    let in_flight = vec![
        WorkItem::new("t-1", "In Progress").with_due_date(day(2025, 7, 1)),
        WorkItem::new("t-2", "Completed"),
    ];
    let summary = StationSummary::derive(&in_flight, today);
    assert_eq!(summary.status, StationStatus::InProgress);
    assert_eq!(summary.color, ColorToken::Accent);
    assert_eq!(summary.urgency, Urgency::Normal);

    // Deadline slips past.
    let slipped = vec![
        WorkItem::new("t-1", "In Progress").with_due_date(day(2025, 6, 1)),
        WorkItem::new("t-2", "Completed"),
    ];
    let summary = StationSummary::derive(&slipped, today);
    assert_eq!(summary.status, StationStatus::InProgress);
    assert_eq!(summary.color, ColorToken::Danger);
    assert_eq!(summary.urgency, Urgency::Overdue);

    // Everything wraps up: deadline disappears, color goes green.
    let finished = vec![
        WorkItem::new("t-1", "Completed").with_due_date(day(2025, 6, 1)),
        WorkItem::new("t-2", "Completed"),
    ];
    let summary = StationSummary::derive(&finished, today);
    assert_eq!(summary.status, StationStatus::Completed);
    assert_eq!(summary.deadline, None);
    assert_eq!(summary.color, ColorToken::Success);
    assert_eq!(summary.urgency, Urgency::None);
}

#[test]
fn cancelling_every_item_skips_the_station() {
    let today = day(2025, 6, 8);
    let cancelled = vec![
        WorkItem::new("t-1", "Cancelled").with_due_date(day(2025, 6, 1)),
        WorkItem::new("t-2", "Cancelled"),
    ];

    let summary = StationSummary::derive(&cancelled, today);
    assert_eq!(summary.status, StationStatus::Skipped);
    // A skipped station stays neutral even with a stale past-due date on a
    // cancelled item: cancelled work never contributes a deadline.
    assert_eq!(summary.deadline, None);
    assert_eq!(summary.color, ColorToken::Tertiary);
    assert_eq!(summary.urgency, Urgency::None);
}

#[test]
fn awaiting_response_station_with_mixed_foreign_statuses() {
    // A dealer sign-off station often links an RFI alongside its tasks.
    // The RFI's "Open" is outside the task vocabulary; it must neither
    // error nor mask a real awaiting-response signal being worst.
    let today = day(2025, 6, 8);
    let linked = vec![
        WorkItem::new("t-1", "Awaiting Response").with_due_date(day(2025, 6, 25)),
        WorkItem::new("t-2", "Completed"),
    ];
    let summary = StationSummary::derive(&linked, today);
    assert_eq!(summary.status, StationStatus::AwaitingResponse);
    assert_eq!(summary.color, ColorToken::Accent);

    let with_foreign = vec![
        WorkItem::new("t-2", "Completed"),
        WorkItem::new("rfi-1", "Open").with_due_date(day(2025, 6, 25)),
    ];
    let summary = StationSummary::derive(&with_foreign, today);
    assert_eq!(summary.status, StationStatus::InProgress);
    assert_eq!(summary.deadline, Some(day(2025, 6, 25)));
}
