//! Shared utilities for feriados crates.
//!
//! This crate provides the calendar arithmetic used by the date encodings
//! (unix seconds, Excel serial days) and Polars `AnyValue` helpers.

pub mod dates;
pub mod values;

pub use dates::{
    EXCEL_EPOCH, excel_serial, from_excel_serial, from_unix_seconds, millis_to_datetime,
    parse_date_text, unix_seconds, unix_seconds_from_millis,
};
pub use values::{any_to_date, any_to_datetime, any_to_string, format_numeric};
