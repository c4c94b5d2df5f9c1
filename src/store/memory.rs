use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::store::{splice_row, SheetStore};

/// In-memory spreadsheet. The fixture backend for tests, and the seed
/// target for anything that wants a store without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sheets: IndexMap<String, Vec<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(
        mut self,
        name: impl Into<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }

    fn sheet(&self, name: &str) -> Result<&Vec<Vec<String>>> {
        self.sheets
            .get(name)
            .ok_or_else(|| Error::WorksheetNotFound(name.to_string()))
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut Vec<Vec<String>>> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| Error::WorksheetNotFound(name.to_string()))
    }
}

impl SheetStore for MemoryStore {
    fn worksheets(&self) -> Result<Vec<String>> {
        Ok(self.sheets.keys().cloned().collect())
    }

    fn read_all(&self, sheet: &str) -> Result<Vec<Vec<String>>> {
        Ok(self.sheet(sheet)?.clone())
    }

    fn insert_row(&mut self, sheet: &str, index: usize, row: Vec<String>) -> Result<()> {
        let rows = self.sheet_mut(sheet)?;
        let index = index.min(rows.len());
        rows.insert(index, row);
        Ok(())
    }

    fn update_row(&mut self, sheet: &str, row_index: usize, row: Vec<String>) -> Result<()> {
        let name = sheet.to_string();
        let rows = self.sheet_mut(sheet)?;
        match rows.get_mut(row_index) {
            Some(slot) => {
                splice_row(slot, row);
                Ok(())
            }
            None => Err(Error::backend(format!(
                "row {row_index} out of range in sheet '{name}'"
            ))),
        }
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
        Ok(())
    }

    fn append_rows(&mut self, sheet: &str, rows: Vec<Vec<String>>) -> Result<()> {
        self.sheet_mut(sheet)?.extend(rows);
        Ok(())
    }
}
