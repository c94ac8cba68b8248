// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The normalized calendar item and its builder.
//!
//! Calendar views render heterogeneous records (tasks, RFIs, submittals,
//! milestones, project date markers) through one display-ready shape,
//! [`CalendarItem`]. Items are ephemeral: rebuilt from current snapshots on
//! every render pass and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use jobsite_core::ColorToken;

use crate::dates::parse_local_date;
use crate::error::{Error, Result};

/// Statuses that close out a generic calendar item.
///
/// Overdue/upcoming selectors skip items in these states. This five-value
/// list spans every record kind that can land on a calendar, which is why it
/// is wider than the two-value task list (`TASK_CLOSED_STATUSES` in
/// jobsite-core); the two are different domains and stay separate.
pub const ITEM_CLOSED_STATUSES: [&str; 5] = [
    "Completed",
    "Cancelled",
    "Closed",
    "Approved",
    "Approved as Noted",
];

/// Display category of a calendar item, in fixed priority order.
///
/// Within a day cell, lower-priority numbers render first: the three
/// project-level date markers, then milestones, tasks, RFIs, submittals.
/// The ordering is a product decision and is relied on by
/// [`crate::group::group_by_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// The project's go-live date marker.
    ProjectOnline,
    /// The project's offline/shutdown date marker.
    ProjectOffline,
    /// The project's delivery date marker.
    ProjectDelivery,
    /// A named milestone.
    Milestone,
    /// A scheduled task.
    Task,
    /// A request for information.
    Rfi,
    /// A submittal awaiting review.
    Submittal,
}

impl ItemType {
    /// Returns the sort priority within a day cell (lower renders first).
    pub fn priority(&self) -> u8 {
        match self {
            ItemType::ProjectOnline => 1,
            ItemType::ProjectOffline => 2,
            ItemType::ProjectDelivery => 3,
            ItemType::Milestone => 4,
            ItemType::Task => 5,
            ItemType::Rfi => 6,
            ItemType::Submittal => 7,
        }
    }

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::ProjectOnline => "project_online",
            ItemType::ProjectOffline => "project_offline",
            ItemType::ProjectDelivery => "project_delivery",
            ItemType::Milestone => "milestone",
            ItemType::Task => "task",
            ItemType::Rfi => "rfi",
            ItemType::Submittal => "submittal",
        }
    }

    /// Default calendar color for this category.
    pub fn color(&self) -> ColorToken {
        match self {
            ItemType::ProjectOnline => ColorToken::Success,
            ItemType::ProjectOffline => ColorToken::Danger,
            ItemType::ProjectDelivery => ColorToken::Warning,
            ItemType::Milestone => ColorToken::Accent,
            ItemType::Task => ColorToken::Accent,
            ItemType::Rfi => ColorToken::Tertiary,
            ItemType::Submittal => ColorToken::Tertiary,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "project_online" => Ok(ItemType::ProjectOnline),
            "project_offline" => Ok(ItemType::ProjectOffline),
            "project_delivery" => Ok(ItemType::ProjectDelivery),
            "milestone" => Ok(ItemType::Milestone),
            "task" => Ok(ItemType::Task),
            "rfi" => Ok(ItemType::Rfi),
            "submittal" => Ok(ItemType::Submittal),
            _ => Err(Error::InvalidItemType(s.to_string())),
        }
    }
}

/// A raw row from the persistence layer, before normalization.
///
/// Field aliases absorb the snake_case/camelCase split across source tables;
/// whatever the row carries beyond the named fields is kept in `extra` and
/// travels with the built item for detail views.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    /// Stable identifier assigned by the persistence layer.
    pub id: String,
    /// Short description, when the source table carries one.
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    /// Raw date string; parsed leniently by the builder.
    #[serde(default, alias = "due_date", alias = "dueDate")]
    pub date: Option<String>,
    /// Raw status string; compared literally by the closed-status filters.
    #[serde(default)]
    pub status: Option<String>,
    /// Owning project id.
    #[serde(default, alias = "projectId")]
    pub project_id: Option<String>,
    /// Owning project display name.
    #[serde(default, alias = "projectName")]
    pub project_name: Option<String>,
    /// Everything else on the row, preserved for detail rendering.
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

/// A display-ready calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarItem {
    /// Identifier of the source record.
    pub id: String,
    /// Display category; drives in-cell ordering and the default color.
    pub item_type: ItemType,
    /// Text shown in the day cell.
    pub title: String,
    /// The calendar day this item occupies.
    pub date: NaiveDate,
    /// Owning project id, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Owning project display name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Display color token.
    pub color: ColorToken,
    /// Raw status string from the source record, when it carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Unmapped source fields, for detail views.
    pub data: serde_json::Value,
}

impl CalendarItem {
    /// Builds a calendar item from a raw persistence row.
    ///
    /// Returns `None` when the row has no parseable date; such rows are
    /// excluded from date-bearing views rather than treated as failures
    /// (the parser has already logged a warning for malformed strings).
    pub fn from_record(record: SourceRecord, item_type: ItemType) -> Option<Self> {
        let date = parse_local_date(record.date.as_deref()?)?;
        Some(CalendarItem {
            id: record.id,
            item_type,
            title: record.title.unwrap_or_default(),
            date,
            project_id: record.project_id,
            project_name: record.project_name,
            color: item_type.color(),
            status: record.status,
            data: record.extra,
        })
    }

    /// Builds calendar items for a batch of rows of one category, dropping
    /// rows without a parseable date.
    pub fn from_records(
        records: impl IntoIterator<Item = SourceRecord>,
        item_type: ItemType,
    ) -> Vec<Self> {
        records
            .into_iter()
            .filter_map(|record| CalendarItem::from_record(record, item_type))
            .collect()
    }

    /// Returns true if the item still requires action.
    ///
    /// Items with no status are treated as open; only a literal match
    /// against [`ITEM_CLOSED_STATUSES`] closes one.
    pub fn is_open(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => !ITEM_CLOSED_STATUSES.contains(&status),
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
