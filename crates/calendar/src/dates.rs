// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Civil-date parsing, arithmetic, and grid generation for calendar views.
//!
//! Every date in this module is a [`chrono::NaiveDate`]: a plain calendar
//! day with no timezone attached. That is the whole correctness story for
//! the calendar. Parsing an ISO date as a UTC instant and rendering it in a
//! local timezone behind UTC shifts the apparent day backward by one, so
//! this module parses the year/month/day components directly and never goes
//! through an instant.
//!
//! Weeks start on Monday throughout.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Parses a calendar day from a collaborator-supplied string.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a `T` or space and a time
/// suffix, which is discarded; the calendar has no time-of-day semantics.
///
/// Malformed input (wrong segment count, non-numeric or out-of-range
/// components) logs a warning and returns `None`. Callers treat `None` as
/// "exclude from date-bearing results", never as a failure.
pub fn parse_local_date(input: &str) -> Option<NaiveDate> {
    let date_part = input.split(['T', ' ']).next().unwrap_or(input);

    let segments: Vec<&str> = date_part.split('-').collect();
    if segments.len() != 3 {
        tracing::warn!(input, "malformed date string, expected YYYY-MM-DD");
        return None;
    }

    match date_from_segments(&segments) {
        Some(date) => Some(date),
        None => {
            tracing::warn!(input, "date string has non-numeric or out-of-range components");
            None
        }
    }
}

fn date_from_segments(segments: &[&str]) -> Option<NaiveDate> {
    let year: i32 = segments.first()?.parse().ok()?;
    let month: u32 = segments.get(1)?.parse().ok()?;
    let day: u32 = segments.get(2)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a day as its `YYYY-MM-DD` grouping key.
///
/// Round-trips with [`parse_local_date`] regardless of the runtime's
/// timezone offset.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the seven days of the Monday-start week containing `date`.
///
/// Always exactly seven entries, ordered Monday through Sunday, including
/// across month and year boundaries.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}

/// Returns the full Monday-aligned grid for the month containing `date`.
///
/// The month's days are padded with the trailing days of the previous month
/// and the leading days of the next, so the length is always a whole number
/// of weeks (28, 35, or 42) and a month view can render a fixed row count.
pub fn month_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);

    let last = first
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(first);

    let start = first - Duration::days(i64::from(first.weekday().num_days_from_monday()));
    let end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_monday()));

    let mut days = Vec::with_capacity(42);
    let mut cursor = start;
    while cursor <= end {
        days.push(cursor);
        cursor = cursor + Duration::days(1);
    }
    days
}

/// Returns true if the two values name the same calendar day.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Returns true if `date` is the current day.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Returns true if `date` is strictly before the current day.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Returns true if `date` is strictly after the current day.
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Returns true if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Signed whole-day difference `a - b`.
pub fn day_diff(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

/// Adds a signed number of days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Adds a signed number of weeks.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    date + Duration::weeks(weeks)
}

/// Adds a signed number of months, clamping to the end of the target month
/// (Jan 31 plus one month is Feb 28, or Feb 29 in a leap year).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let span = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(span)
    } else {
        date.checked_sub_months(span)
    };
    shifted.unwrap_or(date)
}

/// Adds a signed number of years, clamping Feb 29 to Feb 28 off leap years.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_months(date, years.saturating_mul(12))
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
