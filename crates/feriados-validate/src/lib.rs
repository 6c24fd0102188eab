//! Schema validation for the holiday table.
//!
//! [`validate`] turns an untyped [`RawTable`](feriados_model::RawTable) into a
//! [`ValidatedTable`]: a Polars frame holding exactly the columns of
//! [`HOLIDAY_SCHEMA`](feriados_model::HOLIDAY_SCHEMA), every value coerced to
//! its declared type. Validation is strict: missing, duplicated or
//! unexpected columns, blank required values and uncoercible values all fail.

mod coerce;
pub mod error;
pub mod validator;

pub use error::SchemaValidationError;
pub use validator::{ValidatedTable, validate, validate_against};
