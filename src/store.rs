mod memory;
mod workbook;

pub use memory::MemoryStore;
pub use workbook::WorkbookStore;

pub(crate) use workbook::grid_from_range;

use crate::error::{Error, Result};

/// The backend surface: one spreadsheet, addressed worksheet by
/// worksheet. All values round-trip as strings; row index 0 is the
/// header row of the raw value grid.
pub trait SheetStore {
    fn worksheets(&self) -> Result<Vec<String>>;

    /// Every row of a worksheet, header included.
    fn read_all(&self, sheet: &str) -> Result<Vec<Vec<String>>>;

    /// The cells covered by an A1 range such as `"K1:K17"` or the
    /// open-ended `"G2:L"`. Cells outside the stored grid read as empty.
    fn read_range(&self, sheet: &str, range: &str) -> Result<Vec<Vec<String>>> {
        let parsed = A1Range::parse(range)?;
        Ok(parsed.slice(&self.read_all(sheet)?))
    }

    fn insert_row(&mut self, sheet: &str, index: usize, row: Vec<String>) -> Result<()>;

    /// Overwrite the leading cells of a row, like updating the range
    /// `A<row>:<col><row>`. Stored cells beyond the written width are
    /// left alone.
    fn update_row(&mut self, sheet: &str, row_index: usize, row: Vec<String>) -> Result<()>;

    fn delete_row(&mut self, sheet: &str, row_index: usize) -> Result<()>;

    fn append_rows(&mut self, sheet: &str, rows: Vec<Vec<String>>) -> Result<()>;
}

/// Overwrite the leading cells of a stored row, growing it if the
/// written span is wider than what is stored.
pub(crate) fn splice_row(slot: &mut Vec<String>, row: Vec<String>) {
    if slot.len() < row.len() {
        slot.resize(row.len(), String::new());
    }
    for (cell, value) in slot.iter_mut().zip(row) {
        *cell = value;
    }
}

/// An A1-style rectangle, 0-based and inclusive. `end_row` is `None`
/// for open-ended ranges that run to the last stored row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct A1Range {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: Option<usize>,
    pub end_col: usize,
}

impl A1Range {
    pub fn parse(range: &str) -> Result<Self> {
        let (first, second) = match range.split_once(':') {
            Some(pair) => pair,
            None => (range, range),
        };

        let (start_col, start_row) = parse_cell(first)?;
        let (end_col, end_row) = parse_cell(second)?;

        Ok(A1Range {
            // A column-only start ("A:B") covers the whole column.
            start_row: start_row.unwrap_or(1) - 1,
            start_col,
            end_row: end_row.map(|r| r - 1),
            end_col,
        })
    }

    /// Cut the rectangle out of a raw value grid. Rows and cells the
    /// grid does not have come back as empty strings, so callers see a
    /// uniform width.
    pub fn slice(&self, values: &[Vec<String>]) -> Vec<Vec<String>> {
        if values.is_empty() || self.start_row >= values.len() {
            return Vec::new();
        }
        let last_row = self
            .end_row
            .unwrap_or(values.len() - 1)
            .min(values.len() - 1);

        (self.start_row..=last_row)
            .map(|r| {
                (self.start_col..=self.end_col)
                    .map(|c| values[r].get(c).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Split `"K17"` into a 0-based column index and an optional 1-based row.
fn parse_cell(cell: &str) -> Result<(usize, Option<usize>)> {
    let letters: String = cell.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    let digits = &cell[letters.len()..];

    if letters.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::backend(format!("invalid A1 reference '{cell}'")));
    }

    let col = letters
        .chars()
        .fold(0usize, |acc, c| acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1))
        - 1;

    let row = if digits.is_empty() {
        None
    } else {
        let n: usize = digits
            .parse()
            .map_err(|_| Error::backend(format!("invalid A1 reference '{cell}'")))?;
        if n == 0 {
            return Err(Error::backend(format!("invalid A1 reference '{cell}'")));
        }
        Some(n)
    };

    Ok((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn parses_closed_range() {
        let range = A1Range::parse("A2:E5").unwrap();
        assert_eq!(
            range,
            A1Range {
                start_row: 1,
                start_col: 0,
                end_row: Some(4),
                end_col: 4,
            }
        );
    }

    #[test]
    fn parses_open_ended_range() {
        let range = A1Range::parse("G2:L").unwrap();
        assert_eq!(range.start_row, 1);
        assert_eq!(range.start_col, 6);
        assert_eq!(range.end_row, None);
        assert_eq!(range.end_col, 11);
    }

    #[test]
    fn parses_multi_letter_columns() {
        let range = A1Range::parse("AJ2:AP").unwrap();
        assert_eq!(range.start_col, 35);
        assert_eq!(range.end_col, 41);
    }

    #[test]
    fn rejects_garbage() {
        assert!(A1Range::parse("2A:B3").is_err());
        assert!(A1Range::parse("A0:B3").is_err());
        assert!(A1Range::parse(":").is_err());
    }

    #[test]
    fn slice_pads_missing_cells() {
        let values = grid(&[&["a", "b"], &["c"]]);
        let out = A1Range::parse("A1:C2").unwrap().slice(&values);
        assert_eq!(out, grid(&[&["a", "b", ""], &["c", "", ""]]));
    }

    #[test]
    fn open_ended_slice_runs_to_last_row() {
        let values = grid(&[&["h"], &["1"], &["2"], &["3"]]);
        let out = A1Range::parse("A2:A").unwrap().slice(&values);
        assert_eq!(out, grid(&[&["1"], &["2"], &["3"]]));
    }

    #[test]
    fn out_of_grid_range_is_empty() {
        let values = grid(&[&["h"]]);
        assert!(A1Range::parse("A5:B9").unwrap().slice(&values).is_empty());
    }
}
