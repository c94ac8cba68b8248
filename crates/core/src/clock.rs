// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Injectable "today" source.
//!
//! Every time-dependent computation in this workspace takes the current
//! calendar day as an explicit argument. Callers obtain that day through
//! [`DaySource`] so production code reads the local wall clock while tests
//! pin a fixed date.

use chrono::{Local, NaiveDate};

/// Trait for obtaining the current calendar day.
///
/// This allows injecting a fixed day for testing.
pub trait DaySource: Send + Sync {
    /// Returns the current day in the runtime's local timezone.
    fn today(&self) -> NaiveDate;
}

/// Production source reading the local wall clock.
///
/// Local time, never UTC: the application's day boundaries are the user's
/// day boundaries, and a UTC read would shift the apparent day for any
/// timezone behind UTC.
#[derive(Debug, Default)]
pub struct SystemDay;

impl DaySource for SystemDay {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Deterministic source returning a pinned day, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedDay(pub NaiveDate);

impl DaySource for FixedDay {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<D: DaySource> DaySource for &D {
    fn today(&self) -> NaiveDate {
        (*self).today()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
