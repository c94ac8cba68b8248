// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jobsite-calendar: Date utilities and calendar projections for the jobsite
//! workflow tracker.
//!
//! This crate turns raw persistence rows into display-ready calendar data:
//! timezone-safe civil-date parsing, Monday-start week and month grids, and
//! the grouping/filtering that calendar views render from.
//!
//! # Main Components
//!
//! - [`dates`] - Parsing, arithmetic, and week/month grid generation
//! - [`CalendarItem`] / [`SourceRecord`] - The normalized item and its builder
//! - [`group`] - Day bucketing and the overdue/upcoming/today selectors
//!
//! Dates are [`chrono::NaiveDate`] throughout: plain calendar days with no
//! timezone, so arithmetic never crosses a timezone boundary and a parsed
//! `"2025-03-01"` renders as March 1 in every locale. Everything is pure;
//! the current day is always an explicit argument (see
//! [`jobsite_core::DaySource`]).

pub mod dates;
pub mod error;
pub mod group;
pub mod item;

pub use dates::{
    add_days, add_months, add_weeks, add_years, day_diff, format_date_key, is_future, is_past,
    is_same_day, is_today, is_weekend, month_dates, parse_local_date, week_dates,
};
pub use error::{Error, Result};
pub use group::{
    filter_by_project, filter_by_range, filter_by_statuses, filter_by_type, group_by_date,
    items_on, overdue_items, upcoming_items,
};
pub use item::{CalendarItem, ItemType, SourceRecord, ITEM_CLOSED_STATUSES};
