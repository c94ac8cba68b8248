// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jobsite-core operations.
//!
//! Errors only arise when parsing external inputs (status strings, phase
//! numbers). The derivation engine itself is total and never fails.

use thiserror::Error;

/// All possible errors that can occur in jobsite-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid task status: '{0}'\n  hint: valid statuses are: Not Started, In Progress, Awaiting Response, Completed, Cancelled")]
    InvalidStatus(String),

    #[error("invalid station status: '{0}'\n  hint: valid statuses are: not_started, in_progress, awaiting_response, completed, skipped")]
    InvalidStationStatus(String),

    #[error("invalid workflow phase: {0}\n  hint: phases are numbered 1 (Initiation) through 4 (Delivery)")]
    InvalidPhase(u8),

    #[error("invalid color token: '{0}'\n  hint: valid tokens are: success, warning, danger, accent, tertiary")]
    InvalidColor(String),

    #[error("invalid urgency level: '{0}'\n  hint: valid levels are: none, overdue, critical, warning, normal")]
    InvalidUrgency(String),
}

/// A specialized Result type for jobsite-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
