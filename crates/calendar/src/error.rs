// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jobsite-calendar operations.
//!
//! Malformed dates are not errors here: the parser logs a warning and
//! returns `None` so a bad row drops out of date-bearing views instead of
//! failing a whole render pass. Errors are reserved for inputs the caller
//! constructed itself, like item-type names.

use thiserror::Error;

/// All possible errors that can occur in jobsite-calendar operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid item type: '{0}'\n  hint: valid types are: project_online, project_offline, project_delivery, milestone, task, rfi, submittal")]
    InvalidItemType(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for jobsite-calendar operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
