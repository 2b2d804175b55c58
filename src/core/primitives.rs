use chrono::{Datelike, NaiveDate};

use crate::error::{ChartError, ChartResult};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Fixed calendar format of feed dates.
pub const FEED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a calendar date.
pub fn parse_feed_date(raw: &str) -> ChartResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, FEED_DATE_FORMAT)
        .map_err(|e| ChartError::Parse(format!("invalid date `{raw}`: {e}")))
}

#[must_use]
pub fn format_feed_date(date: NaiveDate) -> String {
    date.format(FEED_DATE_FORMAT).to_string()
}

/// Milliseconds between the unix epoch and midnight UTC of `date`.
#[must_use]
pub fn date_to_unix_millis(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE) * MILLIS_PER_DAY
}

/// Inverse of [`date_to_unix_millis`], truncating to whole days.
#[must_use]
pub fn unix_millis_to_date(millis: f64) -> Option<NaiveDate> {
    if !millis.is_finite() {
        return None;
    }
    let days = (millis / MILLIS_PER_DAY).floor();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return None;
    }
    let days_from_ce = (days as i32).checked_add(UNIX_EPOCH_DAYS_FROM_CE)?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}
