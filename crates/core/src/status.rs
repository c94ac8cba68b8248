// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status vocabularies for work items and stations.
//!
//! Work-item statuses arrive from the persistence layer as literal strings
//! ("Not Started", "In Progress", ...). Case and exact wording matter on the
//! wire, so [`TaskStatus`] round-trips those exact spellings. A station never
//! stores a status of its own; [`StationStatus`] values only exist as the
//! output of the derivation engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of a single work item, as tracked by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// No work has begun. Initial state for new items.
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Currently being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Blocked on an external party (dealer, architect, vendor).
    #[serde(rename = "Awaiting Response")]
    AwaitingResponse,
    /// Successfully finished.
    #[serde(rename = "Completed")]
    Completed,
    /// Abandoned; no longer counts toward station progress.
    #[serde(rename = "Cancelled")]
    Cancelled,
}

/// Statuses that close out a work item for deadline purposes.
///
/// A station's "next thing due" ignores items in these states. This is
/// deliberately narrower than the five-value closed list used for generic
/// calendar items (`ITEM_CLOSED_STATUSES` in jobsite-calendar); the two
/// lists cover different record kinds and must not be merged.
pub const TASK_CLOSED_STATUSES: [TaskStatus; 2] = [TaskStatus::Completed, TaskStatus::Cancelled];

impl TaskStatus {
    /// Returns the exact wire spelling used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::AwaitingResponse => "Awaiting Response",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }

    /// Returns true if this status removes the item from deadline
    /// consideration (completed or cancelled).
    pub fn is_closed(&self) -> bool {
        TASK_CLOSED_STATUSES.contains(self)
    }

    /// Returns true if the item still counts toward station aggregation.
    pub fn is_active(&self) -> bool {
        *self != TaskStatus::Cancelled
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "not started" => Ok(TaskStatus::NotStarted),
            "in progress" => Ok(TaskStatus::InProgress),
            "awaiting response" => Ok(TaskStatus::AwaitingResponse),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Aggregate status of a workflow station, derived from its linked items.
///
/// Never persisted: a station's status is recomputed from the current item
/// set on every read, so it cannot go stale independently of the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationStatus {
    /// No items yet, or at least one active item has not been started.
    NotStarted,
    /// Work is underway on at least one active item.
    InProgress,
    /// Every active item is blocked on an external response.
    AwaitingResponse,
    /// Every active item is completed.
    Completed,
    /// Every linked item was cancelled; the station no longer applies.
    Skipped,
}

impl StationStatus {
    /// Returns the string representation used in display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::NotStarted => "not_started",
            StationStatus::InProgress => "in_progress",
            StationStatus::AwaitingResponse => "awaiting_response",
            StationStatus::Completed => "completed",
            StationStatus::Skipped => "skipped",
        }
    }

    /// Returns true if this is a terminal state (completed or skipped).
    pub fn is_terminal(&self) -> bool {
        matches!(self, StationStatus::Completed | StationStatus::Skipped)
    }

    /// Returns true if the station still has open work
    /// (in progress or awaiting response).
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            StationStatus::InProgress | StationStatus::AwaitingResponse
        )
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "not_started" => Ok(StationStatus::NotStarted),
            "in_progress" => Ok(StationStatus::InProgress),
            "awaiting_response" => Ok(StationStatus::AwaitingResponse),
            "completed" => Ok(StationStatus::Completed),
            "skipped" => Ok(StationStatus::Skipped),
            _ => Err(Error::InvalidStationStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
