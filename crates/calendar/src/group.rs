// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grouping, filtering, and day-selection of calendar items.
//!
//! Pure projections over already-built [`CalendarItem`] slices. Nothing
//! here mutates the inputs or touches a clock; the selectors that depend on
//! the current day take it as an explicit argument.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::dates::{format_date_key, is_past};
use crate::item::{CalendarItem, ItemType};

/// Buckets items by their `YYYY-MM-DD` date key.
///
/// Within each bucket, items sort by category priority (project date
/// markers, then milestones, tasks, RFIs, submittals) with title as the
/// alphabetical tie-break. Most time-critical categories surface first in a
/// day cell; views rely on this exact order.
pub fn group_by_date(items: &[CalendarItem]) -> BTreeMap<String, Vec<CalendarItem>> {
    let mut buckets: BTreeMap<String, Vec<CalendarItem>> = BTreeMap::new();
    for item in items {
        buckets
            .entry(format_date_key(item.date))
            .or_default()
            .push(item.clone());
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| {
            a.item_type
                .priority()
                .cmp(&b.item_type.priority())
                .then_with(|| a.title.cmp(&b.title))
        });
    }
    buckets
}

/// Keeps items dated within `[start, end]`, inclusive on both ends.
pub fn filter_by_range(
    items: &[CalendarItem],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CalendarItem> {
    items
        .iter()
        .filter(|item| item.date >= start && item.date <= end)
        .cloned()
        .collect()
}

/// Keeps items belonging to one project.
pub fn filter_by_project(items: &[CalendarItem], project_id: &str) -> Vec<CalendarItem> {
    items
        .iter()
        .filter(|item| item.project_id.as_deref() == Some(project_id))
        .cloned()
        .collect()
}

/// Keeps items of one display category.
pub fn filter_by_type(items: &[CalendarItem], item_type: ItemType) -> Vec<CalendarItem> {
    items
        .iter()
        .filter(|item| item.item_type == item_type)
        .cloned()
        .collect()
}

/// Keeps items whose raw status is one of `allowed` (literal match).
///
/// Items without a status never match.
pub fn filter_by_statuses(items: &[CalendarItem], allowed: &[&str]) -> Vec<CalendarItem> {
    items
        .iter()
        .filter(|item| {
            item.status
                .as_deref()
                .is_some_and(|status| allowed.contains(&status))
        })
        .cloned()
        .collect()
}

/// Open items dated strictly before today.
///
/// "Open" excludes the five closed statuses (see
/// [`crate::item::ITEM_CLOSED_STATUSES`]); items without a status count as
/// open.
pub fn overdue_items(items: &[CalendarItem], today: NaiveDate) -> Vec<CalendarItem> {
    items
        .iter()
        .filter(|item| is_past(item.date, today) && item.is_open())
        .cloned()
        .collect()
}

/// Open items dated within `[today, today + horizon_days]`.
pub fn upcoming_items(
    items: &[CalendarItem],
    today: NaiveDate,
    horizon_days: i64,
) -> Vec<CalendarItem> {
    let end = today + chrono::Duration::days(horizon_days);
    items
        .iter()
        .filter(|item| item.date >= today && item.date <= end && item.is_open())
        .cloned()
        .collect()
}

/// Items dated exactly on `day`, regardless of status.
pub fn items_on(items: &[CalendarItem], day: NaiveDate) -> Vec<CalendarItem> {
    items
        .iter()
        .filter(|item| item.date == day)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
