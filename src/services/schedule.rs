//! Show start-time handling.
//!
//! Start times are stored as text in [`STORED_FORMAT`]. "Now" is rendered
//! in the same format, so past/upcoming is a plain string comparison both
//! in SQL and here.

use chrono::{DateTime, Local, NaiveDateTime};
use thiserror::Error;

use crate::constants::schedule::{
    ACCEPTED_INPUT_FORMATS, FULL_DISPLAY_FORMAT, MEDIUM_DISPLAY_FORMAT, STORED_FORMAT,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Start time is required")]
    Missing,

    #[error("Unrecognised start time: {0}")]
    Unparseable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    Full,
    #[default]
    Medium,
}

/// Current local time in the stored format.
#[must_use]
pub fn now_stamp() -> String {
    stamp(Local::now().naive_local())
}

#[must_use]
pub fn stamp(value: NaiveDateTime) -> String {
    value.format(STORED_FORMAT).to_string()
}

/// Parses a submitted start time into the stored format.
pub fn normalize_start_time(input: &str) -> Result<String, ScheduleError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScheduleError::Missing);
    }

    parse_start_time(trimmed)
        .map(stamp)
        .ok_or_else(|| ScheduleError::Unparseable(trimmed.to_string()))
}

fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    ACCEPTED_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

#[must_use]
pub fn is_past(start_time: &str, now: &str) -> bool {
    start_time <= now
}

/// Splits items into `(past, upcoming)` by their stored start time.
pub fn partition_by_start<T>(
    items: Vec<T>,
    now: &str,
    start_time: impl Fn(&T) -> &str,
) -> (Vec<T>, Vec<T>) {
    items
        .into_iter()
        .partition(|item| is_past(start_time(item), now))
}

/// Human readable start time; values that don't parse are shown verbatim.
#[must_use]
pub fn format_datetime(value: &str, style: DateStyle) -> String {
    let Some(parsed) = parse_start_time(value.trim()) else {
        return value.to_string();
    };

    let pattern = match style {
        DateStyle::Full => FULL_DISPLAY_FORMAT,
        DateStyle::Medium => MEDIUM_DISPLAY_FORMAT,
    };
    parsed.format(pattern).to_string()
}
