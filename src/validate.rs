use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::{FieldConfig, Rule};

fn tax_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}-\d{8}-\d$").expect("literal pattern"))
}

/// Check a candidate record against the sheet's field rules, in record
/// iteration order, stopping at the first violation. Empty values pass
/// every rule: presence is not what rules gate.
pub fn validate(fields: &[FieldConfig], record: &Record) -> Result<()> {
    for (name, value) in record.iter() {
        let Some(rule) = fields.iter().find(|f| f.name == name).and_then(|f| f.rule) else {
            continue;
        };

        let cell = value.to_cell();
        if cell.is_empty() {
            continue;
        }

        check(&rule, &cell).map_err(|message| Error::validation(name, message))?;
    }

    Ok(())
}

fn check(rule: &Rule, cell: &str) -> std::result::Result<(), String> {
    let all_digits = !cell.is_empty() && cell.chars().all(|c| c.is_ascii_digit());

    match rule {
        Rule::Digits(n) => {
            if !all_digits || cell.chars().count() != *n {
                return Err(format!("must be a number of exactly {n} digits"));
            }
        }
        Rule::TaxId => {
            if !tax_id_pattern().is_match(cell) {
                return Err("must match the format xx-xxxxxxxx-x".to_string());
            }
        }
        Rule::Numeric => {
            if !all_digits {
                return Err("must contain digits only".to_string());
            }
        }
        Rule::NumericMax(max) => {
            let ok = all_digits && cell.parse::<u32>().is_ok_and(|n| n <= *max);
            if !ok {
                return Err(format!("must be a number no greater than {max}"));
            }
        }
        Rule::NumericRange(lo, hi) => {
            let ok = all_digits && cell.parse::<u32>().is_ok_and(|n| n >= *lo && n <= *hi);
            if !ok {
                return Err(format!("must be a number between {lo} and {hi}"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use crate::schema::{FieldType, Registry};

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::text(*v)))
            .collect()
    }

    fn field(name: &'static str, rule: Rule) -> FieldConfig {
        FieldConfig::with_rule(name, FieldType::text(), rule)
    }

    #[test]
    fn five_digit_rule_boundaries() {
        let fields = [field("CRED.", Rule::Digits(5))];
        assert!(validate(&fields, &record(&[("CRED.", "12345")])).is_ok());
        assert!(validate(&fields, &record(&[("CRED.", "1234")])).is_err());
        assert!(validate(&fields, &record(&[("CRED.", "123456")])).is_err());
        assert!(validate(&fields, &record(&[("CRED.", "1234a")])).is_err());
    }

    #[test]
    fn eight_digit_rule_boundaries() {
        let fields = [field("D.N.I.", Rule::Digits(8))];
        assert!(validate(&fields, &record(&[("D.N.I.", "30123456")])).is_ok());
        assert!(validate(&fields, &record(&[("D.N.I.", "3012345")])).is_err());
        assert!(validate(&fields, &record(&[("D.N.I.", "301234567")])).is_err());
    }

    #[test]
    fn tax_id_rule() {
        let fields = [field("C.U.I.L.", Rule::TaxId)];
        assert!(validate(&fields, &record(&[("C.U.I.L.", "20-30123456-7")])).is_ok());
        assert!(validate(&fields, &record(&[("C.U.I.L.", "20301234567")])).is_err());
        assert!(validate(&fields, &record(&[("C.U.I.L.", "2-30123456-7")])).is_err());
    }

    #[test]
    fn bounded_and_ranged_numbers() {
        let fields = [
            field("CANTIDAD", Rule::NumericMax(30)),
            field("NIVEL", Rule::NumericRange(1, 4)),
        ];
        assert!(validate(&fields, &record(&[("CANTIDAD", "30")])).is_ok());
        assert!(validate(&fields, &record(&[("CANTIDAD", "31")])).is_err());
        for ok in ["1", "2", "3", "4"] {
            assert!(validate(&fields, &record(&[("NIVEL", ok)])).is_ok());
        }
        assert!(validate(&fields, &record(&[("NIVEL", "0")])).is_err());
        assert!(validate(&fields, &record(&[("NIVEL", "5")])).is_err());
    }

    #[test]
    fn empty_values_pass_every_rule() {
        let fields = [
            field("CRED.", Rule::Digits(5)),
            field("C.U.I.L.", Rule::TaxId),
        ];
        assert!(validate(&fields, &record(&[("CRED.", ""), ("C.U.I.L.", "")])).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let fields = [
            field("CRED.", Rule::Digits(5)),
            field("TELEFONO", Rule::Numeric),
        ];
        let candidate = record(&[("CRED.", "99"), ("TELEFONO", "abc")]);
        let err = validate(&fields, &candidate).unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "CRED."),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn registry_rules_apply_to_real_sheets() {
        let registry = Registry::builtin();
        let fields = registry.fields("DOTACION");
        let bad = record(&[("TELEFONO", "387-400")]);
        assert!(validate(fields, &bad).is_err());
        let good = record(&[("TELEFONO", "3874000000")]);
        assert!(validate(fields, &good).is_ok());
    }
}
