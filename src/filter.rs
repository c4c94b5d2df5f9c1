use crate::table::Table;

/// Row predicate applied over a set of selected columns. Every
/// condition is OR-combined across the columns: a row stays when at
/// least one selected column satisfies it.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-insensitive substring match on the literal term.
    Contains(String),
    IsEmpty,
    IsNotEmpty,
}

impl Condition {
    fn matches(&self, cell: &str) -> bool {
        match self {
            Condition::Contains(term) => case_insensitive_contains(cell, term),
            Condition::IsEmpty => cell.is_empty(),
            Condition::IsNotEmpty => !cell.is_empty(),
        }
    }
}

fn case_insensitive_contains(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter a view table down to the rows matching the condition on any
/// of the selected columns. No selected columns (or none of them
/// present in the table) leaves the table unchanged.
pub fn apply(table: &Table, columns: &[&str], condition: &Condition) -> Table {
    let picked: Vec<usize> = columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    if picked.is_empty() {
        return table.clone();
    }

    let rows = table
        .rows
        .iter()
        .filter(|row| {
            picked.iter().any(|&col| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                condition.matches(cell)
            })
        })
        .cloned()
        .collect();

    Table {
        headers: table.headers.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_values(&[
            vec!["EXPEDIENTE".into(), "DESTINO".into(), "MOTIVO".into()],
            vec!["EX-1".into(), "Salta".into(), "".into()],
            vec!["EX-2".into(), "".into(), "FALTA CON AVISO".into()],
            vec!["EX-3".into(), "salta capital".into(), "permuta".into()],
        ])
    }

    #[test]
    fn contains_is_case_insensitive_and_or_combined() {
        let table = sample();
        let out = apply(&table, &["DESTINO", "MOTIVO"], &Condition::Contains("SALTA".into()));
        let ids: Vec<_> = out.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["EX-1", "EX-3"]);
    }

    #[test]
    fn is_empty_keeps_rows_with_any_empty_selected_cell() {
        let table = sample();
        let out = apply(&table, &["DESTINO", "MOTIVO"], &Condition::IsEmpty);
        let ids: Vec<_> = out.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["EX-1", "EX-2"]);
    }

    #[test]
    fn is_not_empty_mirrors_the_contains_combinator() {
        let table = sample();
        let out = apply(&table, &["DESTINO", "MOTIVO"], &Condition::IsNotEmpty);
        let ids: Vec<_> = out.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["EX-1", "EX-2", "EX-3"]);
    }

    #[test]
    fn no_selected_columns_is_a_no_op() {
        let table = sample();
        let out = apply(&table, &[], &Condition::Contains("anything".into()));
        assert_eq!(out, table);

        let out = apply(&table, &["NOT A COLUMN"], &Condition::IsEmpty);
        assert_eq!(out, table);
    }
}
