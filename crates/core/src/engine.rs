// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Station status derivation.
//!
//! A station's aggregate status, deadline, color, and urgency are pure
//! projections of its linked work items. Aggregation follows
//! "worst status wins": the station is only as far along as its
//! least-advanced active item.
//!
//! Every function here is total. Empty item lists, missing deadlines, and
//! status strings outside the task vocabulary all degrade to documented
//! defaults; nothing in this module returns an error or panics.

use chrono::NaiveDate;

use crate::color::{ColorToken, Urgency};
use crate::item::WorkItem;
use crate::status::{StationStatus, TaskStatus};

/// Deadlines this many days out or closer render as warnings.
const WARNING_WINDOW_DAYS: i64 = 2;

/// Upper bound of the [`Urgency::Warning`] band, in days.
const URGENCY_WARNING_DAYS: i64 = 7;

/// Derives a station's aggregate status from its linked items.
///
/// Precedence, evaluated in order:
///
/// 1. No items: `not_started`.
/// 2. No active (non-cancelled) items: `skipped`.
/// 3. Any active item not started: `not_started`.
/// 4. Any active item in progress: `in_progress`.
/// 5. Any active item awaiting response: `awaiting_response`.
/// 6. Every active item completed: `completed`.
/// 7. Otherwise `in_progress`. Only reachable when an active item carries a
///    status outside the task vocabulary; treated as live work rather than
///    surfaced as an error.
///
/// The result depends only on set membership, never on item order.
pub fn station_status(items: &[WorkItem]) -> StationStatus {
    if items.is_empty() {
        return StationStatus::NotStarted;
    }

    let active: Vec<Option<TaskStatus>> = items
        .iter()
        .filter(|item| !item.is_cancelled())
        .map(WorkItem::task_status)
        .collect();

    if active.is_empty() {
        return StationStatus::Skipped;
    }

    if active.contains(&Some(TaskStatus::NotStarted)) {
        StationStatus::NotStarted
    } else if active.contains(&Some(TaskStatus::InProgress)) {
        StationStatus::InProgress
    } else if active.contains(&Some(TaskStatus::AwaitingResponse)) {
        StationStatus::AwaitingResponse
    } else if active.iter().all(|s| *s == Some(TaskStatus::Completed)) {
        StationStatus::Completed
    } else {
        tracing::debug!("unrecognized status among active items, treating station as in progress");
        StationStatus::InProgress
    }
}

/// Returns the station's nearest open deadline.
///
/// Items that are completed or cancelled are ignored even when they carry
/// the earliest due date; "next thing due" only counts work that still
/// needs doing. Returns `None` when no open item has a due date.
pub fn station_deadline(items: &[WorkItem]) -> Option<NaiveDate> {
    items
        .iter()
        .filter(|item| !item.is_closed())
        .filter_map(|item| item.due_date)
        .min()
}

/// Signed calendar-day distance from `today` to `deadline`.
///
/// Negative values mean the deadline has passed. Day granularity only; no
/// wall-clock component enters the comparison.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Picks the display color for a station.
///
/// Decision order:
///
/// 1. `completed` is terminal green regardless of deadline.
/// 2. `skipped` is neutral regardless of deadline.
/// 3. A past deadline forces danger; a deadline within two days forces
///    warning. Proximity overrides the base status color, so an in-progress
///    station with a missed deadline renders overdue-red.
/// 4. Active stations (in progress, awaiting response) get the accent color.
/// 5. Everything else (not started) is neutral.
pub fn station_color(
    status: StationStatus,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> ColorToken {
    match status {
        StationStatus::Completed => return ColorToken::Success,
        StationStatus::Skipped => return ColorToken::Tertiary,
        _ => {}
    }

    if let Some(deadline) = deadline {
        let days = days_until(deadline, today);
        if days < 0 {
            return ColorToken::Danger;
        }
        if days <= WARNING_WINDOW_DAYS {
            return ColorToken::Warning;
        }
    }

    if status.is_active() {
        ColorToken::Accent
    } else {
        ColorToken::Tertiary
    }
}

/// Classifies deadline distance into an urgency band.
///
/// `None` means no open deadline exists. The bands are: past due, within
/// two days, within a week, further out.
pub fn urgency(days_until: Option<i64>) -> Urgency {
    match days_until {
        None => Urgency::None,
        Some(days) if days < 0 => Urgency::Overdue,
        Some(days) if days <= WARNING_WINDOW_DAYS => Urgency::Critical,
        Some(days) if days <= URGENCY_WARNING_DAYS => Urgency::Warning,
        Some(_) => Urgency::Normal,
    }
}

/// Everything a workflow node needs to render a station, computed in one
/// pass over the linked items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSummary {
    /// Aggregate status per [`station_status`].
    pub status: StationStatus,
    /// Nearest open deadline per [`station_deadline`].
    pub deadline: Option<NaiveDate>,
    /// Signed days from today to the deadline, when one exists.
    pub days_until: Option<i64>,
    /// Display color per [`station_color`].
    pub color: ColorToken,
    /// Urgency band per [`urgency`].
    pub urgency: Urgency,
}

impl StationSummary {
    /// Derives the full summary for one station's linked items.
    pub fn derive(items: &[WorkItem], today: NaiveDate) -> Self {
        let status = station_status(items);
        let deadline = station_deadline(items);
        let days = deadline.map(|d| days_until(d, today));
        StationSummary {
            status,
            deadline,
            days_until: days,
            color: station_color(status, deadline, today),
            urgency: urgency(days),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
