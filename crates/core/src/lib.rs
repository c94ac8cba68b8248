// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jobsite-core: Station status derivation for the jobsite workflow tracker.
//!
//! This crate provides the data types and pure derivation rules behind the
//! "workflow station" progress view: work-item statuses, the four-phase
//! station graph, and the engine that turns a station's linked items into an
//! aggregate status, deadline, color, and urgency.
//!
//! # Main Components
//!
//! - [`engine`] - "Worst status wins" aggregation and deadline/color rules
//! - [`WorkItem`] - Read-only snapshot of a linked record
//! - [`Station`] / [`Phase`] - The workflow graph nodes
//! - [`DaySource`] - Injectable "today" for deterministic tests
//!
//! All derivation functions are total: empty inputs, missing deadlines, and
//! unrecognized status strings degrade to documented defaults instead of
//! erroring. Persistence and rendering live elsewhere; nothing in this crate
//! performs I/O.

pub mod clock;
pub mod color;
pub mod engine;
pub mod error;
pub mod item;
pub mod station;
pub mod status;

pub use clock::{DaySource, FixedDay, SystemDay};
pub use color::{ColorToken, Urgency};
pub use engine::{
    days_until, station_color, station_deadline, station_status, urgency, StationSummary,
};
pub use error::{Error, Result};
pub use item::WorkItem;
pub use station::{Phase, Station};
pub use status::{StationStatus, TaskStatus, TASK_CLOSED_STATUSES};
