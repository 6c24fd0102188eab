//! Closed column schema of the holiday table.

/// Source header of the holiday date column.
pub const DATE_COLUMN: &str = "Data";
/// Source header of the weekday-name column.
pub const WEEKDAY_COLUMN: &str = "Dia da Semana";
/// Source header of the holiday-name column.
pub const HOLIDAY_COLUMN: &str = "Feriado";

/// Declared type a raw column is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Date/time instant, stored as millisecond `Datetime`.
    Timestamp,
    /// Free text.
    Text,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Timestamp => "timestamp",
            ColumnKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
}

/// Columns of a validated holiday table, in output order.
pub const HOLIDAY_SCHEMA: &[ColumnSpec] = &[
    ColumnSpec {
        name: DATE_COLUMN,
        kind: ColumnKind::Timestamp,
        nullable: false,
    },
    ColumnSpec {
        name: WEEKDAY_COLUMN,
        kind: ColumnKind::Text,
        nullable: false,
    },
    ColumnSpec {
        name: HOLIDAY_COLUMN,
        kind: ColumnKind::Text,
        nullable: false,
    },
];
