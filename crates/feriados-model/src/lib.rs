//! Holiday calendar data model.
//!
//! Shared types for the feriados workspace: the untyped [`RawTable`] decoded
//! from the published spreadsheet, the closed column schema, the constant
//! variant definitions, the built-in export formats and the run [`Settings`].

pub mod error;
pub mod format;
pub mod schema;
pub mod settings;
pub mod table;
pub mod variants;

pub use error::ConfigError;
pub use format::OutputFormat;
pub use schema::{
    ColumnKind, ColumnSpec, DATE_COLUMN, HOLIDAY_COLUMN, HOLIDAY_SCHEMA, WEEKDAY_COLUMN,
};
pub use settings::{DEFAULT_CONFIG_FILE, Settings};
pub use table::{CellValue, RawTable};
pub use variants::{
    EN, PT_BR, Translation, VARIANT_NAMESPACE, VARIANTS, VariantDefinition, WEEKDAYS_PT_TO_EN,
};
