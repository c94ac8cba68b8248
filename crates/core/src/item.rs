// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The work-item record consumed by the station engine.
//!
//! Work items (tasks, RFIs, submittals, milestones, project date markers)
//! are owned entirely by the persistence layer; this crate never creates,
//! mutates, or deletes one. The engine only reads `status` and `due_date`.
//!
//! The `status` field stays a raw string on purpose: items linked to a
//! station come from several record kinds, and kinds outside the task
//! vocabulary (an RFI's "Open", a submittal's "Approved as Noted") must flow
//! through untouched. [`WorkItem::task_status`] parses into the closed
//! [`TaskStatus`] set where the engine needs it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::status::TaskStatus;

/// A read-only snapshot of a schedulable record linked to a station.
///
/// Field aliases accept both the snake_case and camelCase spellings the
/// persistence layer emits, so rows deserialize without a mapping step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Stable identifier assigned by the persistence layer.
    pub id: String,
    /// Raw status string; compared literally against the task vocabulary.
    pub status: String,
    /// Day the item is due, if scheduled. Day granularity only.
    #[serde(default, alias = "dueDate", alias = "date")]
    pub due_date: Option<NaiveDate>,
    /// Short description, when the source record carries one.
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Owning project, when the source record carries one.
    #[serde(default, alias = "projectId", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl WorkItem {
    /// Creates a work item with only the fields the engine reads.
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        WorkItem {
            id: id.into(),
            status: status.into(),
            due_date: None,
            title: None,
            project_id: None,
        }
    }

    /// Sets the due date (builder pattern).
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Parses the raw status into the task vocabulary.
    ///
    /// Returns `None` for statuses outside the closed set; the engine treats
    /// those defensively rather than erroring.
    pub fn task_status(&self) -> Option<TaskStatus> {
        TaskStatus::from_str(&self.status).ok()
    }

    /// Returns true if the item was cancelled and no longer counts toward
    /// station aggregation.
    pub fn is_cancelled(&self) -> bool {
        self.task_status() == Some(TaskStatus::Cancelled)
    }

    /// Returns true if the item is completed or cancelled and should be
    /// ignored when picking the station deadline.
    pub fn is_closed(&self) -> bool {
        self.task_status().is_some_and(|s| s.is_closed())
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
