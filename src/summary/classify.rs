use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::models::Window;

static DATE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").ok());

/// Parse a stored `YYYY-MM-DD` date. Anything else, including
/// non-zero-padded fields and impossible days, yields `None`.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.as_ref()?.captures(s)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Sunday through Saturday of the week containing `today`, both inclusive.
pub(crate) fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(today.weekday().num_days_from_sunday());
    let start = today - Duration::days(offset);
    (start, start + Duration::days(6))
}

/// Whether a record dated `record_date` falls in `window` as seen from `today`.
///
/// Month membership compares calendar year and month fields only. Records
/// with a missing or malformed date only ever match `Window::All`.
pub(crate) fn in_window(record_date: &str, window: Window, today: NaiveDate) -> bool {
    if window == Window::All {
        return true;
    }
    let Some(date) = parse_date(record_date) else {
        return false;
    };
    match window {
        Window::All => true,
        Window::Month => date.year() == today.year() && date.month() == today.month(),
        Window::Week => {
            let (start, end) = week_bounds(today);
            start <= date && date <= end
        }
    }
}
