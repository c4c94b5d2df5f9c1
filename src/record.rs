use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Date format used when writing to the backend. Stored rows may also
/// carry ISO dates, so reads accept both (see `Value::parse_date`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const TIME_FORMAT_SHORT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Empty,
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() { Value::Empty } else { Value::Text(s) }
    }

    /// Parse a stored date string. Accepts the ISO form first, then the
    /// display form, matching the order the original forms tried.
    pub fn parse_date(field: &str, raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Value::Empty);
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT_ISO)
            .or_else(|_| NaiveDate::parse_from_str(raw, DATE_FORMAT))
            .map(Value::Date)
            .map_err(|_| Error::Parse {
                field: field.to_string(),
                value: raw.to_string(),
                expected: "a date (DD/MM/YYYY)",
            })
    }

    /// Parse a stored time string, with or without seconds.
    pub fn parse_time(field: &str, raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Value::Empty);
        }
        NaiveTime::parse_from_str(raw, TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, TIME_FORMAT_SHORT))
            .map(Value::Time)
            .map_err(|_| Error::Parse {
                field: field.to_string(),
                value: raw.to_string(),
                expected: "a time (HH:MM:SS)",
            })
    }

    /// Stringify for the backend: dates as DD/MM/YYYY, times as HH:MM:SS,
    /// absent values as the empty string.
    pub fn to_cell(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Text(s) => s.clone(),
            Value::Date(d) => d.format(DATE_FORMAT).to_string(),
            Value::Time(t) => t.format(TIME_FORMAT).to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

/// A single record: column name -> value, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.values.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn cell(&self, column: &str) -> String {
        self.get(column).map(Value::to_cell).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build the full-width backend row in the schema's column order,
    /// filling columns the record does not carry with empty strings.
    pub fn to_row(&self, full_columns: &[&str]) -> Vec<String> {
        full_columns.iter().map(|col| self.cell(col)).collect()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Record {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parses_both_formats() {
        let iso = Value::parse_date("INGRESO", "2023-04-01").unwrap();
        let display = Value::parse_date("INGRESO", "01/04/2023").unwrap();
        assert_eq!(iso, display);
        assert_eq!(iso.to_cell(), "01/04/2023");
    }

    #[test]
    fn time_parses_with_and_without_seconds() {
        let long = Value::parse_time("HORARIO", "08:30:00").unwrap();
        let short = Value::parse_time("HORARIO", "08:30").unwrap();
        assert_eq!(long, short);
        assert_eq!(short.to_cell(), "08:30:00");
    }

    #[test]
    fn malformed_date_is_an_error_not_empty() {
        let err = Value::parse_date("INGRESO", "31/31/2023").unwrap_err();
        match err {
            Error::Parse { field, value, .. } => {
                assert_eq!(field, "INGRESO");
                assert_eq!(value, "31/31/2023");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(Value::parse_date("X", "").unwrap(), Value::Empty);
        assert_eq!(Value::parse_time("X", "").unwrap(), Value::Empty);
    }

    #[test]
    fn full_width_row_fills_missing_columns() {
        let mut record = Record::new();
        record.set("EXPEDIENTE", Value::text("EX-2024-001"));
        record.set("DESDE", Value::parse_date("DESDE", "05/02/2024").unwrap());

        let row = record.to_row(&["EXPEDIENTE", "GRADO", "DESDE"]);
        assert_eq!(row, vec!["EX-2024-001", "", "05/02/2024"]);
    }
}
