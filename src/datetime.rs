//! Date utilities for the notice board.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{NoticeError, Result};

/// Storage and display format for announcement dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar date of `now` in the given timezone.
pub fn date_in(now: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

/// Today's date in the given timezone.
pub fn today_in(tz: &Tz) -> NaiveDate {
    date_in(&Utc::now(), tz)
}

/// Parse a date typed into a form.
///
/// Blank input selects `default`. Otherwise the input must be `YYYY-MM-DD`.
pub fn parse_date_input(input: &str, default: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        NoticeError::Validation(format!("invalid date '{input}', expected YYYY-MM-DD"))
    })
}

/// Format a date the way it is stored.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
