// ABOUTME: Calendar date helpers for the fixed YYYY-MM-DD text form
// ABOUTME: Parsing, formatting, inclusive range checks and day arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Date Utilities
//!
//! All dates exchanged with the assistant host use the `YYYY-MM-DD` form and
//! are naive local calendar days. Parsing never fails loudly: malformed or
//! calendar-invalid input yields `None`.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate, TimeDelta};
use regex::Regex;
use serde_json::Value;

/// Text form used for every date crossing the tool boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").ok());

/// Parse `YYYY-MM-DD` text into a calendar day.
///
/// Returns `None` when the text does not match the pattern exactly (two-digit
/// month and day are mandatory) or when the components do not name a real day,
/// e.g. `2024-02-30` or `2024-13-01`.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let captures = DATE_PATTERN.as_ref()?.captures(text)?;

    let year: i32 = captures.get(1)?.as_str().parse().ok()?;
    let month: u32 = captures.get(2)?.as_str().parse().ok()?;
    let day: u32 = captures.get(3)?.as_str().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a raw JSON argument; anything other than a string yields `None`
#[must_use]
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    value.as_str().and_then(parse_date)
}

/// Format a calendar day as `YYYY-MM-DD`, or `""` when absent
#[must_use]
pub fn to_date_text(date: Option<NaiveDate>) -> String {
    date.map_or_else(String::new, |day| day.format(DATE_FORMAT).to_string())
}

/// Inclusive range membership; `false` when any bound is missing
#[must_use]
pub fn is_within_range(
    date: Option<NaiveDate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    match (date, start, end) {
        (Some(date), Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

/// Current local calendar day
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Offset a day by `days` (negative allowed), saturating at the representable range
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let fallback = if days < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    };

    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(fallback)
}

/// Leading `YYYY-MM-DD` of a timestamp-like string such as `2024-03-15T18:00:00Z`
#[must_use]
pub fn date_prefix(text: &str) -> Option<NaiveDate> {
    let prefix = text.get(..10)?;
    let rest = &text[10..];
    if rest.is_empty() || rest.starts_with(['T', 't', ' ']) {
        parse_date(prefix)
    } else {
        None
    }
}
