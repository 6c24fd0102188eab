//! Locale variants of the holiday table.
//!
//! Each variant is plain data: a column mapping and an optional value
//! translation. Adding a locale means adding a [`VariantDefinition`] to
//! [`VARIANTS`].

use crate::schema::{DATE_COLUMN, HOLIDAY_COLUMN, WEEKDAY_COLUMN};

/// Prefix of every variant key (`feriados_<locale>`).
pub const VARIANT_NAMESPACE: &str = "feriados";

/// Value rewrite applied to one (already renamed) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub column: &'static str,
    /// Lower-case source value to translated value.
    pub table: &'static [(&'static str, &'static str)],
}

impl Translation {
    /// Translated value for `value`, matched case-insensitively.
    pub fn lookup(&self, value: &str) -> Option<&'static str> {
        let key = value.to_lowercase();
        self.table
            .iter()
            .find(|(source, _)| *source == key)
            .map(|(_, target)| *target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDefinition {
    pub locale: &'static str,
    /// Source header to variant column name.
    pub columns: &'static [(&'static str, &'static str)],
    pub translation: Option<Translation>,
}

impl VariantDefinition {
    /// Output key, e.g. `feriados_pt_br`.
    pub fn key(&self) -> String {
        format!("{VARIANT_NAMESPACE}_{}", self.locale)
    }

    /// Variant name of a source column; unmapped columns keep their name.
    pub fn column_name<'a>(&self, source: &'a str) -> &'a str {
        self.columns
            .iter()
            .find(|(from, _)| *from == source)
            .map_or(source, |(_, to)| *to)
    }

    /// Name the date column carries in this variant.
    pub fn date_column(&self) -> &'static str {
        self.column_name(DATE_COLUMN)
    }
}

pub const WEEKDAYS_PT_TO_EN: &[(&str, &str)] = &[
    ("segunda-feira", "monday"),
    ("terça-feira", "tuesday"),
    ("quarta-feira", "wednesday"),
    ("quinta-feira", "thursday"),
    ("sexta-feira", "friday"),
    ("sábado", "saturday"),
    ("domingo", "sunday"),
];

pub const PT_BR: VariantDefinition = VariantDefinition {
    locale: "pt_br",
    columns: &[
        (DATE_COLUMN, DATE_COLUMN),
        (WEEKDAY_COLUMN, WEEKDAY_COLUMN),
        (HOLIDAY_COLUMN, HOLIDAY_COLUMN),
    ],
    translation: None,
};

pub const EN: VariantDefinition = VariantDefinition {
    locale: "en",
    columns: &[
        (DATE_COLUMN, "dt"),
        (WEEKDAY_COLUMN, "weekday"),
        (HOLIDAY_COLUMN, "holiday"),
    ],
    translation: Some(Translation {
        column: "weekday",
        table: WEEKDAYS_PT_TO_EN,
    }),
};

pub const VARIANTS: &[VariantDefinition] = &[PT_BR, EN];
