use anyhow::{Context, Result as AnyResult};
use calamine::{open_workbook_auto, Data, Reader};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::store::SheetStore;

/// File-backed spreadsheet: the whole workbook is loaded into string
/// grids up front, and every mutation rewrites the file before it
/// returns, so the file on disk is always the source of truth.
pub struct WorkbookStore {
    path: PathBuf,
    sheets: IndexMap<String, Vec<Vec<String>>>,
}

impl WorkbookStore {
    pub fn open<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut workbook = open_workbook_auto(&path)
            .with_context(|| format!("Unable to open workbook: {}", path.display()))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = IndexMap::with_capacity(sheet_names.len());

        for name in &sheet_names {
            let range = workbook
                .worksheet_range(name)
                .with_context(|| format!("Unable to read worksheet: {}", name))?;
            sheets.insert(name.clone(), grid_from_range(range));
        }

        if sheets.is_empty() {
            anyhow::bail!("No worksheets found in {}", path.display());
        }

        Ok(WorkbookStore { path, sheets })
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut Vec<Vec<String>>> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| Error::WorksheetNotFound(name.to_string()))
    }

    /// Rewrite the whole workbook file from the in-memory grids.
    fn persist(&self) -> Result<()> {
        let mut workbook = rust_xlsxwriter::Workbook::new();

        for (name, rows) in &self.sheets {
            let worksheet = workbook
                .add_worksheet()
                .set_name(name)
                .map_err(|e| Error::backend(format!("worksheet '{name}': {e}")))?;

            for (row_idx, row) in rows.iter().enumerate() {
                for (col_idx, value) in row.iter().enumerate() {
                    if value.is_empty() {
                        continue;
                    }
                    worksheet
                        .write_string(row_idx as u32, col_idx as u16, value)
                        .map_err(|e| Error::backend(format!("worksheet '{name}': {e}")))?;
                }
            }
        }

        workbook
            .save(&self.path)
            .map_err(|e| Error::backend(format!("save {}: {e}", self.path.display())))?;

        Ok(())
    }
}

/// Calamine ranges start at the first used cell, not at A1. The grid is
/// padded with the range's start offset so index (0, 0) is always cell
/// A1, keeping absolute addressing (and round-trip writes) intact for
/// sheets with leading empty rows or columns.
pub(crate) fn grid_from_range(range: calamine::Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    let (height, width) = range.get_size();
    let mut grid = vec![vec![String::new(); start_col + width]; start_row + height];

    for (row_idx, col_idx, cell) in range.used_cells() {
        grid[start_row + row_idx][start_col + col_idx] = cell_to_string(cell);
    }

    grid
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            // Collapse integral floats so credential numbers survive the
            // round trip as "12345", not "12345.0".
            if *f == (*f as i64) as f64 && f.abs() < 1e10 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("Error: {:?}", e),
    }
}

impl SheetStore for WorkbookStore {
    fn worksheets(&self) -> Result<Vec<String>> {
        Ok(self.sheets.keys().cloned().collect())
    }

    fn read_all(&self, sheet: &str) -> Result<Vec<Vec<String>>> {
        self.sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| Error::WorksheetNotFound(sheet.to_string()))
    }

    fn insert_row(&mut self, sheet: &str, index: usize, row: Vec<String>) -> Result<()> {
        let rows = self.sheet_mut(sheet)?;
        let index = index.min(rows.len());
        rows.insert(index, row);
        self.persist()
    }

    fn update_row(&mut self, sheet: &str, row_index: usize, row: Vec<String>) -> Result<()> {
        let name = sheet.to_string();
        let rows = self.sheet_mut(sheet)?;
        match rows.get_mut(row_index) {
            Some(slot) => crate::store::splice_row(slot, row),
            None => {
                return Err(Error::backend(format!(
                    "row {row_index} out of range in sheet '{name}'"
                )));
            }
        }
        self.persist()
    }

    fn delete_row(&mut self, sheet: &str, row_index: usize) -> Result<()> {
        let name = sheet.to_string();
        let rows = self.sheet_mut(sheet)?;
        if row_index >= rows.len() {
            return Err(Error::backend(format!(
                "row {row_index} out of range in sheet '{name}'"
            )));
        }
        rows.remove(row_index);
        self.persist()
    }

    fn append_rows(&mut self, sheet: &str, rows: Vec<Vec<String>>) -> Result<()> {
        self.sheet_mut(sheet)?.extend(rows);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str, cells: &[(u32, u16, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join("personnel-workbook-store");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (row, col, value) in cells {
            sheet.write_string(*row, *col, *value).unwrap();
        }
        workbook.save(&path).unwrap();
        path
    }

    fn cells(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn leading_empty_rows_and_columns_keep_absolute_addresses() {
        // First used cell is B2; A1 addressing must not shift.
        let path = fixture("anchored.xlsx", &[(1, 1, "X"), (2, 1, "Y")]);
        let store = WorkbookStore::open(&path).unwrap();

        assert_eq!(
            store.read_range("Sheet1", "B2:B3").unwrap(),
            cells(&[&["X"], &["Y"]])
        );
        assert_eq!(store.read_range("Sheet1", "A1").unwrap(), cells(&[&[""]]));
    }

    #[test]
    fn writes_do_not_move_anchored_cells() {
        let path = fixture("persisted.xlsx", &[(1, 1, "X")]);
        let mut store = WorkbookStore::open(&path).unwrap();
        store
            .append_rows("Sheet1", vec![vec!["tail".to_string()]])
            .unwrap();

        let reopened = WorkbookStore::open(&path).unwrap();
        assert_eq!(
            reopened.read_range("Sheet1", "B2").unwrap(),
            cells(&[&["X"]])
        );
        assert_eq!(reopened.read_all("Sheet1").unwrap().last().unwrap()[0], "tail");
    }

    #[test]
    fn insert_row_clamps_the_position_and_persists() {
        let path = fixture("inserted.xlsx", &[(0, 0, "ID"), (1, 0, "1")]);
        let mut store = WorkbookStore::open(&path).unwrap();
        store.insert_row("Sheet1", 1, vec!["0".to_string()]).unwrap();
        store.insert_row("Sheet1", 99, vec!["9".to_string()]).unwrap();

        let reopened = WorkbookStore::open(&path).unwrap();
        assert_eq!(
            reopened.read_all("Sheet1").unwrap(),
            cells(&[&["ID"], &["0"], &["1"], &["9"]])
        );
    }
}
