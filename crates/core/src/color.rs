// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic color tokens and urgency levels for station rendering.
//!
//! Tokens name intent, not pixels; the presentation layer maps them onto its
//! palette. Urgency is a parallel classification used for badges and
//! tooltips independently of the color decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Semantic display color for a station node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    /// Terminal good state: every active item completed.
    Success,
    /// Deadline within the next two days.
    Warning,
    /// Deadline has passed.
    Danger,
    /// Work underway or awaiting an external response.
    Accent,
    /// Not started, skipped, or otherwise inert.
    Tertiary,
}

impl ColorToken {
    /// Returns the token name used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::Accent => "accent",
            ColorToken::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "success" => Ok(ColorToken::Success),
            "warning" => Ok(ColorToken::Warning),
            "danger" => Ok(ColorToken::Danger),
            "accent" => Ok(ColorToken::Accent),
            "tertiary" => Ok(ColorToken::Tertiary),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

/// How pressing a station's nearest deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// No open deadline.
    None,
    /// Deadline has passed.
    Overdue,
    /// Due within two days.
    Critical,
    /// Due within a week.
    Warning,
    /// Due more than a week out.
    Normal,
}

impl Urgency {
    /// Returns the level name used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::None => "none",
            Urgency::Overdue => "overdue",
            Urgency::Critical => "critical",
            Urgency::Warning => "warning",
            Urgency::Normal => "normal",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Urgency::None),
            "overdue" => Ok(Urgency::Overdue),
            "critical" => Ok(Urgency::Critical),
            "warning" => Ok(Urgency::Warning),
            "normal" => Ok(Urgency::Normal),
            _ => Err(Error::InvalidUrgency(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
