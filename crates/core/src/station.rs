// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stations: named nodes in the fixed four-phase workflow graph.
//!
//! A station carries no status of its own. Status, deadline, color, and
//! urgency are always derived at read time from the linked work items (see
//! [`crate::engine`]), which keeps them consistent with the current item set
//! by construction.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// The four phases of the project workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Kickoff work: surveys, drawings, estimates.
    Initiation,
    /// Customer-facing approvals: color selections, sign-off packets.
    DealerSignOffs,
    /// Back-office approvals: change orders, purchasing release.
    InternalApprovals,
    /// Manufacturing, shipping, and installation.
    Delivery,
}

impl Phase {
    /// Returns the 1-based phase number used in storage and display.
    pub fn number(&self) -> u8 {
        match self {
            Phase::Initiation => 1,
            Phase::DealerSignOffs => 2,
            Phase::InternalApprovals => 3,
            Phase::Delivery => 4,
        }
    }

    /// Returns the human-readable phase label.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Initiation => "Initiation",
            Phase::DealerSignOffs => "Dealer Sign-Offs",
            Phase::InternalApprovals => "Internal Approvals",
            Phase::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for Phase {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Phase::Initiation),
            2 => Ok(Phase::DealerSignOffs),
            3 => Ok(Phase::InternalApprovals),
            4 => Ok(Phase::Delivery),
            _ => Err(Error::InvalidPhase(n)),
        }
    }
}

/// A named node in the workflow graph.
///
/// Stations form a shallow one-level hierarchy: a station either is a
/// top-level step or points at a single parent via `parent_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Stable identifier (e.g. `"drawings"`, `"long_lead_items"`).
    pub key: String,
    /// Display name (e.g. `"Long Lead Items"`).
    pub name: String,
    /// Which of the four workflow phases this station belongs to.
    pub phase: Phase,
    /// Parent station key for sub-stations; `None` for top-level stations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    /// Position within the phase when rendering the workflow.
    pub display_order: u32,
}

impl Station {
    /// Creates a top-level station.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        phase: Phase,
        display_order: u32,
    ) -> Self {
        Station {
            key: key.into(),
            name: name.into(),
            phase,
            parent_key: None,
            display_order,
        }
    }

    /// Sets the parent station key (builder pattern).
    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    /// Returns true if this station sits under another station.
    pub fn is_sub_station(&self) -> bool {
        self.parent_key.is_some()
    }
}

impl Ord for Station {
    fn cmp(&self, other: &Self) -> Ordering {
        self.phase
            .cmp(&other.phase)
            .then_with(|| self.display_order.cmp(&other.display_order))
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Station {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[path = "station_tests.rs"]
mod tests;
