/// Where a selection field takes its choices from: a fixed list, or a
/// lazily fetched column range of the side `LISTAS` worksheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionsSource {
    Static(&'static [&'static str]),
    Lookup { range: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// Single-line text, optionally length-capped.
    Text { max_len: Option<usize> },
    /// Multi-line free text.
    TextArea,
    /// Calendar date; `min_year` bounds how far back the field may go.
    Date { min_year: Option<i32> },
    /// Time of day.
    Time,
    Select(OptionsSource),
}

impl FieldType {
    pub const fn text() -> Self {
        FieldType::Text { max_len: None }
    }

    pub const fn text_max(max_len: usize) -> Self {
        FieldType::Text {
            max_len: Some(max_len),
        }
    }

    pub const fn date() -> Self {
        FieldType::Date { min_year: None }
    }

    pub const fn date_from(min_year: i32) -> Self {
        FieldType::Date {
            min_year: Some(min_year),
        }
    }
}

/// Per-field validation rule. Every rule passes an empty value through:
/// rules gate format, not presence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Numeric string of exactly this many digits (5 for credentials,
    /// 8 for national identity numbers).
    Digits(usize),
    /// Dash-separated xx-xxxxxxxx-x tax identifier.
    TaxId,
    /// Digits only, any length.
    Numeric,
    /// Digits only, value bounded above.
    NumericMax(u32),
    /// Digits only, value inside a closed range.
    NumericRange(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub name: &'static str,
    pub field_type: FieldType,
    pub rule: Option<Rule>,
}

impl FieldConfig {
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        FieldConfig {
            name,
            field_type,
            rule: None,
        }
    }

    pub const fn with_rule(name: &'static str, field_type: FieldType, rule: Rule) -> Self {
        FieldConfig {
            name,
            field_type,
            rule: Some(rule),
        }
    }
}
