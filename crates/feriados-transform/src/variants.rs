//! Locale variants of the validated holiday table.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;

use feriados_common::any_to_string;
use feriados_model::{Translation, VARIANTS, VariantDefinition};
use feriados_validate::ValidatedTable;

use crate::encoding::{DateEncoding, encode_dates};
use crate::error::TransformError;

/// A renamed (and possibly translated) copy of the validated table.
#[derive(Debug, Clone)]
pub struct Variant {
    key: String,
    definition: VariantDefinition,
    data: DataFrame,
}

impl Variant {
    /// Namespaced key, e.g. `feriados_en`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn locale(&self) -> &'static str {
        self.definition.locale
    }

    pub fn date_column(&self) -> &'static str {
        self.definition.date_column()
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Base file name of one encoded form, e.g. `feriados_en_unix`.
    pub fn export_name(&self, encoding: DateEncoding) -> String {
        format!("{}_{}", self.key, encoding.suffix())
    }

    /// Fresh frame with the date column re-encoded; the variant is untouched.
    pub fn encode(&self, encoding: DateEncoding) -> Result<DataFrame, TransformError> {
        encode_dates(&self.data, self.date_column(), encoding)
    }
}

/// Derive every variant in [`VARIANTS`], keyed by variant key.
pub fn derive_variants(
    table: &ValidatedTable,
) -> Result<BTreeMap<String, Variant>, TransformError> {
    derive_with(table, VARIANTS)
}

pub fn derive_with(
    table: &ValidatedTable,
    definitions: &[VariantDefinition],
) -> Result<BTreeMap<String, Variant>, TransformError> {
    let mut variants = BTreeMap::new();
    for definition in definitions {
        let variant = derive_variant(table, definition)?;
        variants.insert(variant.key.clone(), variant);
    }
    Ok(variants)
}

/// Build one variant from its definition.
pub fn derive_variant(
    table: &ValidatedTable,
    definition: &VariantDefinition,
) -> Result<Variant, TransformError> {
    let mut data = table.data().clone();
    for (from, to) in definition.columns {
        if from == to {
            continue;
        }
        data.rename(from, (*to).into())
            .map_err(|_| TransformError::MissingColumn {
                column: (*from).to_string(),
            })?;
    }
    if let Some(translation) = &definition.translation {
        translate_column(&mut data, translation)?;
    }
    let key = definition.key();
    debug!(
        variant = %key,
        row_count = data.height(),
        translated = definition.translation.is_some(),
        "variant derived"
    );
    Ok(Variant {
        key,
        definition: *definition,
        data,
    })
}

/// Rewrite a column through the translation table; misses keep their value.
fn translate_column(data: &mut DataFrame, translation: &Translation) -> Result<(), TransformError> {
    let column = data
        .column(translation.column)
        .map_err(|_| TransformError::MissingColumn {
            column: translation.column.to_string(),
        })?;
    let mut values: Vec<Option<String>> = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        if matches!(value, AnyValue::Null) {
            values.push(None);
            continue;
        }
        let original = any_to_string(value);
        let translated = translation
            .lookup(&original)
            .map_or(original, str::to_string);
        values.push(Some(translated));
    }
    data.with_column(Column::new(translation.column.into(), values))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feriados_model::{CellValue, EN, PT_BR, RawTable};

    fn validated(weekdays: &[&str]) -> ValidatedTable {
        let rows = weekdays
            .iter()
            .enumerate()
            .map(|(idx, weekday)| {
                vec![
                    CellValue::Text(format!("2024-01-0{}", idx + 1)),
                    CellValue::Text((*weekday).to_string()),
                    CellValue::Text(format!("Feriado {idx}")),
                ]
            })
            .collect();
        let raw = RawTable::new(
            vec!["Data".into(), "Dia da Semana".into(), "Feriado".into()],
            rows,
        );
        feriados_validate::validate(&raw).unwrap()
    }

    fn column_strings(df: &DataFrame, name: &str) -> Vec<String> {
        let column = df.column(name).unwrap();
        (0..column.len())
            .map(|idx| any_to_string(column.get(idx).unwrap()))
            .collect()
    }

    #[test]
    fn pt_br_keeps_source_headers() {
        let variant = derive_variant(&validated(&["segunda-feira"]), &PT_BR).unwrap();
        assert_eq!(variant.key(), "feriados_pt_br");
        assert_eq!(
            variant.data().get_column_names_str(),
            vec!["Data", "Dia da Semana", "Feriado"]
        );
        assert_eq!(
            column_strings(variant.data(), "Dia da Semana"),
            vec!["segunda-feira"]
        );
    }

    #[test]
    fn en_renames_and_translates() {
        let table = validated(&["Segunda-Feira", "sábado", "Domingo"]);
        let variant = derive_variant(&table, &EN).unwrap();
        assert_eq!(
            variant.data().get_column_names_str(),
            vec!["dt", "weekday", "holiday"]
        );
        assert_eq!(
            column_strings(variant.data(), "weekday"),
            vec!["monday", "saturday", "sunday"]
        );
    }

    #[test]
    fn untranslatable_values_are_kept_verbatim() {
        let table = validated(&["Feriado Móvel", "quarta-feira"]);
        let variant = derive_variant(&table, &EN).unwrap();
        assert_eq!(
            column_strings(variant.data(), "weekday"),
            vec!["Feriado Móvel", "wednesday"]
        );
    }

    #[test]
    fn derivation_leaves_input_untouched() {
        let table = validated(&["segunda-feira"]);
        let _ = derive_variants(&table).unwrap();
        assert_eq!(
            table.data().get_column_names_str(),
            vec!["Data", "Dia da Semana", "Feriado"]
        );
        assert_eq!(
            column_strings(table.data(), "Dia da Semana"),
            vec!["segunda-feira"]
        );
    }

    #[test]
    fn export_names_combine_key_and_encoding() {
        let variant = derive_variant(&validated(&["domingo"]), &EN).unwrap();
        assert_eq!(variant.export_name(DateEncoding::Date), "feriados_en_date");
        assert_eq!(variant.export_name(DateEncoding::Unix), "feriados_en_unix");
    }
}
