use calamine::{open_workbook_auto, Reader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ops::SheetService;
use crate::store::{grid_from_range, SheetStore};

/// The sheet bulk imports land on unless the caller says otherwise.
pub const DEFAULT_TARGET: &str = "MESA DE ENTRADA";

/// Outcome of one batch: how many rows were appended, plus a message
/// per file that could not be read. A failed file never aborts the
/// batch; the readable ones still go through.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub rows_appended: usize,
    pub errors: Vec<String>,
}

impl ImportSummary {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Rows parsed out of one workbook file. The first row of the first
/// worksheet is treated as a header and dropped; everything else comes
/// back as trimmed-to-string data rows.
fn read_file(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::backend(format!("{}: {e}", path.display())))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::backend(format!("{}: no worksheets", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::backend(format!("{}: {e}", path.display())))?;

    let mut grid = grid_from_range(range);
    if grid.is_empty() {
        return Err(Error::backend(format!(
            "{}: worksheet '{sheet_name}' is empty",
            path.display()
        )));
    }
    grid.remove(0);
    Ok(grid)
}

/// Parse every file, one thread per file, keeping results in the order
/// the paths were given.
fn read_files(paths: &[PathBuf]) -> Vec<Result<Vec<Vec<String>>>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || read_file(path)))
            .collect();
        handles.into_iter().map(|h| h.join().expect("reader thread")).collect()
    })
}

/// Append the data rows of the given workbook files to `target`. Rows
/// keep file order; files that fail to parse are reported in the
/// summary and skipped.
pub fn import_files<S: SheetStore>(
    service: &mut SheetService<S>,
    target: &str,
    paths: &[PathBuf],
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for (path, outcome) in paths.iter().zip(read_files(paths)) {
        match outcome {
            Ok(parsed) => rows.extend(parsed),
            Err(e) => summary.errors.push(format!("{}: {e}", path.display())),
        }
    }

    if !rows.is_empty() {
        summary.rows_appended = rows.len();
        service.store_mut().append_rows(target, rows)?;
        service.invalidate(target);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn write_fixture(dir: &Path, name: &str, rows: &[&[&str]]) -> PathBuf {
        let path = dir.join(name);
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
        workbook.save(&path).unwrap();
        path
    }

    fn seeded_service() -> SheetService<MemoryStore> {
        let store = MemoryStore::new().with_sheet(
            DEFAULT_TARGET,
            vec![
                vec![
                    "Número Expediente".to_string(),
                    "Código Trámite".to_string(),
                ],
                vec!["EX-1".to_string(), "T-1".to_string()],
            ],
        );
        SheetService::new(store)
    }

    #[test]
    fn imports_keep_file_order_and_skip_headers() {
        let dir = std::env::temp_dir().join("personnel-import-order");
        std::fs::create_dir_all(&dir).unwrap();
        let a = write_fixture(&dir, "a.xlsx", &[&["H1", "H2"], &["EX-2", "T-2"]]);
        let b = write_fixture(&dir, "b.xlsx", &[&["H1", "H2"], &["EX-3", "T-3"]]);

        let mut service = seeded_service();
        let summary = import_files(&mut service, DEFAULT_TARGET, &[a, b]).unwrap();

        assert!(summary.is_clean());
        assert_eq!(summary.rows_appended, 2);

        let rows = service.store().read_all(DEFAULT_TARGET).unwrap();
        assert_eq!(rows[1][0], "EX-1");
        assert_eq!(rows[2][0], "EX-2");
        assert_eq!(rows[3][0], "EX-3");
    }

    #[test]
    fn unreadable_file_is_reported_and_the_rest_still_land() {
        let dir = std::env::temp_dir().join("personnel-import-errors");
        std::fs::create_dir_all(&dir).unwrap();
        let good = write_fixture(&dir, "good.xlsx", &[&["H1"], &["EX-9"]]);
        let missing = dir.join("does-not-exist.xlsx");

        let mut service = seeded_service();
        let summary =
            import_files(&mut service, DEFAULT_TARGET, &[missing, good]).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.rows_appended, 1);
        let rows = service.store().read_all(DEFAULT_TARGET).unwrap();
        assert_eq!(rows.last().unwrap()[0], "EX-9");
    }

    #[test]
    fn empty_batch_appends_nothing() {
        let mut service = seeded_service();
        let before = service.store().read_all(DEFAULT_TARGET).unwrap();
        let summary = import_files(&mut service, DEFAULT_TARGET, &[]).unwrap();
        assert_eq!(summary.rows_appended, 0);
        assert_eq!(service.store().read_all(DEFAULT_TARGET).unwrap(), before);
    }
}
