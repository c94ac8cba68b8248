// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the calendar pipeline: raw persistence rows in,
//! grouped and filtered display data out.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chrono::NaiveDate;
use jobsite_calendar::{
    filter_by_range, group_by_date, month_dates, overdue_items, parse_local_date, upcoming_items,
    week_dates, CalendarItem, ItemType, SourceRecord,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rows(json: &str) -> Vec<SourceRecord> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn month_view_from_mixed_source_rows() {
    let tasks = rows(
        r#"[
            {"id":"t-1","title":"Set casework","due_date":"2025-06-10","status":"Not Started","project_id":"p-9"},
            {"id":"t-2","title":"Punch list","status":"Not Started","project_id":"p-9"}
        ]"#,
    );
    let milestones = rows(
        r#"[{"id":"m-1","name":"Millwork delivered","date":"2025-06-10","projectId":"p-9"}]"#,
    );

    let mut items = CalendarItem::from_records(tasks, ItemType::Task);
    items.extend(CalendarItem::from_records(milestones, ItemType::Milestone));

    // The undated task dropped out during building.
    assert_eq!(items.len(), 2);

    let grouped = group_by_date(&items);
    let cell = &grouped["2025-06-10"];
    let ids: Vec<&str> = cell.iter().map(|i| i.id.as_str()).collect();
    // Milestone outranks task within the day cell.
    assert_eq!(ids, ["m-1", "t-1"]);

    // The grid for the viewed month contains every day the items land on.
    let grid = month_dates(day(2025, 6, 15));
    assert_eq!(grid.len() % 7, 0);
    for item in cell {
        assert!(grid.contains(&item.date));
    }
}

#[test]
fn week_view_range_filter_matches_week_bounds() {
    let items = CalendarItem::from_records(
        rows(
            r#"[
                {"id":"t-1","title":"Mon","due_date":"2025-06-02","status":"Open"},
                {"id":"t-2","title":"Sun","due_date":"2025-06-08","status":"Open"},
                {"id":"t-3","title":"Next Mon","due_date":"2025-06-09","status":"Open"}
            ]"#,
        ),
        ItemType::Task,
    );

    let week = week_dates(day(2025, 6, 4));
    let visible = filter_by_range(&items, week[0], week[6]);
    let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["t-1", "t-2"]);
}

#[test]
fn overdue_and_upcoming_panels_disagree_about_closed_items() {
    let today = day(2025, 6, 8);
    let submittals = CalendarItem::from_records(
        rows(
            r#"[
                {"id":"s-1","title":"Laminate colors","due_date":"2025-06-01","status":"Approved as Noted"},
                {"id":"s-2","title":"Door hardware","due_date":"2025-06-01","status":"Open"},
                {"id":"s-3","title":"Countertop edge","due_date":"2025-06-12","status":"Open"}
            ]"#,
        ),
        ItemType::Submittal,
    );

    let overdue = overdue_items(&submittals, today);
    let ids: Vec<&str> = overdue.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["s-2"]);

    let upcoming = upcoming_items(&submittals, today, 7);
    let ids: Vec<&str> = upcoming.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["s-3"]);
}

#[test]
fn timestamped_rows_land_on_their_civil_day() {
    // Rows written by a UTC-keeping backend arrive with a time suffix. The
    // calendar must bucket them by the date component alone, or every item
    // shifts a day for users west of Greenwich.
    let items = CalendarItem::from_records(
        rows(r#"[{"id":"t-1","title":"Kickoff","due_date":"2025-03-01T00:00:00+00:00"}]"#),
        ItemType::Task,
    );

    let grouped = group_by_date(&items);
    assert!(grouped.contains_key("2025-03-01"));
    assert_eq!(parse_local_date("2025-03-01"), Some(items[0].date));
}
