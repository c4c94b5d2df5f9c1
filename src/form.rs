use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::record::{Record, Value};
use crate::schema::{FieldType, OptionsSource, SheetSchema, LISTAS_SHEET};
use crate::store::SheetStore;

/// Source of selectable values for a form field: a fixed list, or a
/// live lookup against the side options worksheet.
pub trait OptionsProvider {
    fn options(&self, source: &OptionsSource) -> Result<Vec<String>>;
}

/// Resolves lookups through a `SheetStore`: the configured range of the
/// `LISTAS` worksheet, first cell per row, empties dropped.
pub struct StoreOptions<'a, S: SheetStore> {
    store: &'a S,
}

impl<'a, S: SheetStore> StoreOptions<'a, S> {
    pub fn new(store: &'a S) -> Self {
        StoreOptions { store }
    }
}

impl<S: SheetStore> OptionsProvider for StoreOptions<'_, S> {
    fn options(&self, source: &OptionsSource) -> Result<Vec<String>> {
        match source {
            OptionsSource::Static(options) => {
                Ok(options.iter().map(|s| s.to_string()).collect())
            }
            OptionsSource::Lookup { range } => {
                let values = self.store.read_range(LISTAS_SHEET, range)?;
                Ok(values
                    .into_iter()
                    .filter_map(|row| row.into_iter().next())
                    .filter(|cell| !cell.is_empty())
                    .collect())
            }
        }
    }
}

/// Build the in-progress record for a sheet's form: one value per
/// configured field, seeded from an existing row when editing. The
/// result is pre-validation; callers overlay user input with
/// `set_field` and then validate.
pub fn build_record(
    schema: &SheetSchema,
    existing: Option<&IndexMap<String, String>>,
    provider: &impl OptionsProvider,
) -> Result<Record> {
    let mut record = Record::new();

    for field in schema.fields {
        let default = existing
            .and_then(|row| row.get(field.name))
            .map(String::as_str)
            .unwrap_or("");

        let value = match &field.field_type {
            FieldType::Select(source) => {
                let options = provider.options(source)?;
                // Keep the stored value only while it is still offered.
                if options.iter().any(|o| o == default) {
                    Value::text(default)
                } else {
                    options
                        .first()
                        .map(|o| Value::text(o.as_str()))
                        .unwrap_or(Value::Empty)
                }
            }
            FieldType::Date { min_year } => clamp_date(Value::parse_date(field.name, default)?, *min_year),
            FieldType::Time => Value::parse_time(field.name, default)?,
            FieldType::Text { .. } | FieldType::TextArea => Value::text(default),
        };

        record.set(field.name, value);
    }

    Ok(record)
}

/// Apply one piece of raw user input to a record, going through the
/// same typed parsing as stored values. Select fields must name one of
/// the currently offered options; length-capped text must fit.
pub fn set_field(
    schema: &SheetSchema,
    record: &mut Record,
    field_name: &str,
    raw: &str,
    provider: &impl OptionsProvider,
) -> Result<()> {
    let field = schema.field(field_name).ok_or_else(|| {
        Error::validation(
            field_name,
            format!("not a form field of sheet '{}'", schema.name),
        )
    })?;

    let value = match &field.field_type {
        FieldType::Select(source) => {
            if raw.is_empty() {
                Value::Empty
            } else {
                let options = provider.options(source)?;
                if !options.iter().any(|o| o == raw) {
                    return Err(Error::validation(
                        field_name,
                        format!("'{raw}' is not one of the offered options"),
                    ));
                }
                Value::text(raw)
            }
        }
        FieldType::Date { min_year } => {
            let value = Value::parse_date(field.name, raw)?;
            if let (Value::Date(d), Some(year)) = (&value, min_year) {
                if d.year() < *year {
                    return Err(Error::validation(
                        field_name,
                        format!("date must not be earlier than {year}"),
                    ));
                }
            }
            value
        }
        FieldType::Time => Value::parse_time(field.name, raw)?,
        FieldType::Text { max_len } => {
            if let Some(max) = max_len {
                if raw.chars().count() > *max {
                    return Err(Error::validation(
                        field_name,
                        format!("must not exceed {max} characters"),
                    ));
                }
            }
            Value::text(raw)
        }
        FieldType::TextArea => Value::text(raw),
    };

    record.set(field.name, value);
    Ok(())
}

/// A stored date below the field's floor is pulled up to January 1st of
/// the minimum year, mirroring how the form used to snap old defaults.
fn clamp_date(value: Value, min_year: Option<i32>) -> Value {
    match (value, min_year) {
        (Value::Date(d), Some(year)) if d < NaiveDate::from_ymd_opt(year, 1, 1).unwrap() => {
            Value::Date(NaiveDate::from_ymd_opt(year, 1, 1).unwrap())
        }
        (value, _) => value,
    }
}
