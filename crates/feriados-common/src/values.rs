//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions and temporal extraction.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{AnyValue, TimeUnit};

use crate::dates::{EXCEL_EPOCH, millis_to_datetime};

/// Days between the Excel epoch and 1970-01-01, the origin of Polars `Date`.
const UNIX_EPOCH_EXCEL_DAYS: i64 = 25_569;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`; numbers drop trailing zeros, dates
/// render as `YYYY-MM-DD` and datetimes as `YYYY-MM-DDTHH:MM:SS`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        AnyValue::Date(days) => any_to_date(AnyValue::Date(days))
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        AnyValue::Datetime(raw, unit, tz) => any_to_datetime(AnyValue::Datetime(raw, unit, tz))
            .map(|datetime| datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Extracts a naive UTC datetime from `Date` and `Datetime` values.
pub fn any_to_datetime(value: AnyValue<'_>) -> Option<NaiveDateTime> {
    match value {
        AnyValue::Datetime(raw, unit, _) => millis_to_datetime(to_millis(raw, unit)),
        AnyValue::Date(days) => {
            let offset = chrono::Duration::try_days(i64::from(days) + UNIX_EPOCH_EXCEL_DAYS)?;
            EXCEL_EPOCH
                .checked_add_signed(offset)
                .map(|date| date.and_time(chrono::NaiveTime::MIN))
        }
        _ => None,
    }
}

/// Extracts the calendar date from `Date` and `Datetime` values.
pub fn any_to_date(value: AnyValue<'_>) -> Option<NaiveDate> {
    any_to_datetime(value).map(|datetime| datetime.date())
}

fn to_millis(raw: i64, unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Nanoseconds => raw.div_euclid(1_000_000),
        TimeUnit::Microseconds => raw.div_euclid(1_000),
        TimeUnit::Milliseconds => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn date_values_render_iso() {
        // 2024-01-01 is day 19723 since 1970-01-01.
        assert_eq!(any_to_string(AnyValue::Date(19_723)), "2024-01-01");
        let millis = 1_704_067_200_000;
        assert_eq!(
            any_to_string(AnyValue::Datetime(millis, TimeUnit::Milliseconds, None)),
            "2024-01-01T00:00:00"
        );
    }

    #[test]
    fn datetime_units_are_normalized() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1);
        let nanos = 1_704_067_200_000_000_000;
        assert_eq!(
            any_to_date(AnyValue::Datetime(nanos, TimeUnit::Nanoseconds, None)),
            expected
        );
        assert_eq!(any_to_date(AnyValue::Date(19_723)), expected);
        assert_eq!(any_to_date(AnyValue::Int32(19_723)), None);
    }
}
