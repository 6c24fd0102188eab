//! Calendar arithmetic for the export date encodings.
//!
//! Two integer encodings are produced from holiday dates:
//!
//! - **unix seconds**: elapsed seconds since 1970-01-01T00:00:00Z, by
//!   truncating integer division of elapsed milliseconds.
//! - **Excel serial days**: whole days since the 1900 date system epoch
//!   (day 0 = 1899-12-30). Serials 1..=60 keep the Lotus 1-2-3 leap-year
//!   offset, so 1900-01-01 is serial 1 and 1900-03-01 is serial 61.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Day zero of the spreadsheet 1900 date system.
pub const EXCEL_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 30) {
    Some(date) => date,
    None => panic!("invalid excel epoch"),
};

const LOTUS_LEAP_BUG_LIMIT: i64 = 60;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Text layouts accepted for date cells, tried in order.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Excel serial day of a calendar date.
pub fn excel_serial(date: NaiveDate) -> i64 {
    let days = date.signed_duration_since(EXCEL_EPOCH).num_days();
    if days > 0 && days <= LOTUS_LEAP_BUG_LIMIT {
        days - 1
    } else {
        days
    }
}

/// Date/time for an Excel serial value; the fraction encodes time of day.
pub fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let mut days = serial.floor();
    let fraction = serial - days;
    if days > 0.0 && days < LOTUS_LEAP_BUG_LIMIT as f64 {
        days += 1.0;
    }
    let date = EXCEL_EPOCH.checked_add_signed(Duration::try_days(days as i64)?)?;
    let millis = (fraction * SECONDS_PER_DAY * 1000.0).round() as i64;
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::try_milliseconds(millis)?)
}

/// Unix seconds of a UTC wall-clock instant.
pub fn unix_seconds(datetime: NaiveDateTime) -> i64 {
    unix_seconds_from_millis(datetime.and_utc().timestamp_millis())
}

/// Truncating division of elapsed milliseconds by one second.
pub fn unix_seconds_from_millis(millis: i64) -> i64 {
    millis / 1000
}

pub fn from_unix_seconds(seconds: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0).map(|datetime| datetime.naive_utc())
}

pub fn millis_to_datetime(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|datetime| datetime.naive_utc())
}

/// Parse a textual date or date/time (ISO or `DD/MM/YYYY`).
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
