use indexmap::IndexMap;

use crate::cache::{CachedTables, SheetCache};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::{Registry, SheetSchema};
use crate::store::SheetStore;
use crate::table::Table;
use crate::validate::validate;
use std::time::Duration;

/// The CRUD engine: one registry, one backend, one row cache.
///
/// Row addressing follows the raw worksheet grid: row 0 is the header,
/// data starts at row 1. Update and delete locate their target by
/// scanning the identifier column (the first schema column) for an
/// exact match; a duplicated identifier resolves to its first
/// occurrence.
pub struct SheetService<S: SheetStore> {
    registry: Registry,
    store: S,
    cache: SheetCache,
}

impl<S: SheetStore> SheetService<S> {
    pub fn new(store: S) -> Self {
        SheetService {
            registry: Registry::builtin(),
            store,
            cache: SheetCache::default(),
        }
    }

    pub fn with_cache_ttl(store: S, ttl: Duration) -> Self {
        SheetService {
            registry: Registry::builtin(),
            store,
            cache: SheetCache::new(ttl),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Invalidate one sheet's cached read. Exposed for writers that go
    /// through `store_mut` (the bulk-import surface).
    pub fn invalidate(&mut self, sheet: &str) {
        self.cache.invalidate(sheet);
    }

    fn schema(&self, sheet: &str) -> Result<SheetSchema> {
        self.registry
            .schema(sheet)
            .copied()
            .ok_or_else(|| Error::Config(format!("no schema registered for sheet '{sheet}'")))
    }

    /// Cached read of a sheet: the full table plus its view projection.
    pub fn load(&mut self, sheet: &str) -> Result<CachedTables> {
        if let Some(cached) = self.cache.get(sheet) {
            return Ok(cached.clone());
        }

        let schema = self.schema(sheet)?;
        let values = self.store.read_all(sheet)?;
        let full = Table::from_values(&values);
        let view = full.select(schema.view_columns);

        let tables = CachedTables { full, view };
        self.cache.put(sheet, tables.clone());
        Ok(tables)
    }

    pub fn view(&mut self, sheet: &str) -> Result<Table> {
        Ok(self.load(sheet)?.view)
    }

    /// Full record for an identifier picked from a view row. This is
    /// the view-to-full reconciliation used before editing.
    pub fn find(&mut self, sheet: &str, id: &str) -> Result<IndexMap<String, String>> {
        let schema = self.schema(sheet)?;
        let id_col = self.id_column(&schema, sheet)?;
        let tables = self.load(sheet)?;

        (0..tables.full.height())
            .find(|&i| tables.full.cell(i, id_col) == Some(id))
            .and_then(|i| tables.full.row_map(i))
            .ok_or_else(|| Error::RowNotFound {
                sheet: sheet.to_string(),
                id: id.to_string(),
            })
    }

    /// Validate and append a new record at the end of the sheet.
    /// Append is the sole insert position this system supports.
    pub fn insert(&mut self, sheet: &str, record: &Record) -> Result<()> {
        let schema = self.schema(sheet)?;
        validate(schema.fields, record)?;

        let row = record.to_row(schema.full_columns);
        self.store.append_rows(sheet, vec![row])?;
        self.cache.invalidate(sheet);
        Ok(())
    }

    /// Validate and overwrite the row whose identifier matches the
    /// record's. The write spans column 1 to the last schema column;
    /// cells beyond that (paperwork columns) stay untouched.
    pub fn update(&mut self, sheet: &str, record: &Record) -> Result<()> {
        let schema = self.schema(sheet)?;
        let id_col = self.id_column(&schema, sheet)?;

        let id = record.cell(id_col);
        if id.is_empty() {
            return Err(Error::validation(id_col, "row identifier must not be empty"));
        }

        validate(schema.fields, record)?;

        let row_index = self.locate(sheet, id_col, &id)?;
        self.store
            .update_row(sheet, row_index, record.to_row(schema.full_columns))?;
        self.cache.invalidate(sheet);
        Ok(())
    }

    /// Remove the row with this identifier; later rows shift up.
    pub fn delete(&mut self, sheet: &str, id: &str) -> Result<()> {
        let schema = self.schema(sheet)?;
        let id_col = self.id_column(&schema, sheet)?;

        if id.is_empty() {
            return Err(Error::validation(id_col, "row identifier must not be empty"));
        }

        let row_index = self.locate(sheet, id_col, id)?;
        self.store.delete_row(sheet, row_index)?;
        self.cache.invalidate(sheet);
        Ok(())
    }

    /// The paperwork copy shortcuts for one row: label and cell text
    /// for each copy column the sheet declares.
    pub fn copy_fields(&mut self, sheet: &str, id: &str) -> Result<Vec<(String, String)>> {
        let schema = self.schema(sheet)?;
        let row = self.find(sheet, id)?;

        Ok(schema
            .copy_columns
            .iter()
            .map(|col| {
                let value = row.get(*col).cloned().unwrap_or_default();
                (col.to_string(), value)
            })
            .collect())
    }

    fn id_column(&self, schema: &SheetSchema, sheet: &str) -> Result<&'static str> {
        schema
            .id_column()
            .ok_or_else(|| Error::Config(format!("sheet '{sheet}' has no columns configured")))
    }

    /// Scan the identifier column of the live sheet for an exact match,
    /// returning the raw grid index of the first occurrence. Reads the
    /// store directly: a stale cache must not decide where a write lands.
    fn locate(&mut self, sheet: &str, id_col: &str, id: &str) -> Result<usize> {
        let values = self.store.read_all(sheet)?;
        let table = Table::from_values(&values);
        let col = table.column_index(id_col).ok_or_else(|| {
            Error::backend(format!("sheet '{sheet}' has no '{id_col}' header"))
        })?;

        table
            .rows
            .iter()
            .position(|row| row.get(col).map(String::as_str) == Some(id))
            .map(|data_index| data_index + 1)
            .ok_or_else(|| Error::RowNotFound {
                sheet: sheet.to_string(),
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use crate::store::MemoryStore;

    const SHEET: &str = "INASISTENCIAS";

    /// Header = schema columns plus one paperwork column past the span.
    fn seeded_service() -> SheetService<MemoryStore> {
        let mut header: Vec<String> = Registry::builtin()
            .full_columns(SHEET)
            .iter()
            .map(|s| s.to_string())
            .collect();
        header.push("SITUACION DE REVISTA FALTA CON/SIN AVISO (INFFC)".to_string());

        let width = header.len();
        let mut row = vec![String::new(); width];
        row[0] = "EX-100".to_string();
        row[3] = "11111".to_string();
        row[width - 1] = "TEXTO DE REVISTA".to_string();

        let store = MemoryStore::new().with_sheet(SHEET, vec![header, row]);
        SheetService::new(store)
    }

    fn candidate(id: &str) -> Record {
        let mut record = Record::new();
        record.set("EXPEDIENTE", Value::text(id));
        record.set("CRED.", Value::text("22222"));
        record.set(
            "FECHA DE LA FALTA",
            Value::parse_date("FECHA DE LA FALTA", "09/03/2024").unwrap(),
        );
        record.set("MOTIVO", Value::text("FALTA SIN AVISO"));
        record
    }

    #[test]
    fn insert_then_read_round_trip() {
        let mut service = seeded_service();
        service.insert(SHEET, &candidate("EX-200")).unwrap();

        let row = service.find(SHEET, "EX-200").unwrap();
        assert_eq!(row["EXPEDIENTE"], "EX-200");
        assert_eq!(row["CRED."], "22222");
        assert_eq!(row["FECHA DE LA FALTA"], "09/03/2024");
    }

    #[test]
    fn insert_appends_at_the_end() {
        let mut service = seeded_service();
        service.insert(SHEET, &candidate("EX-200")).unwrap();

        let rows = service.store().read_all(SHEET).unwrap();
        assert_eq!(rows.last().unwrap()[0], "EX-200");
        // Seeded row is still directly below the header.
        assert_eq!(rows[1][0], "EX-100");
    }

    #[test]
    fn validation_failure_never_reaches_the_store() {
        let mut service = seeded_service();
        let before = service.store().read_all(SHEET).unwrap();

        let mut bad = candidate("EX-300");
        bad.set("CRED.", Value::text("123"));
        let err = service.insert(SHEET, &bad).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        assert_eq!(service.store().read_all(SHEET).unwrap(), before);
    }

    #[test]
    fn update_is_idempotent_and_preserves_paperwork_columns() {
        let mut service = seeded_service();
        let update = candidate("EX-100");

        service.update(SHEET, &update).unwrap();
        let once = service.store().read_all(SHEET).unwrap();

        service.update(SHEET, &update).unwrap();
        let twice = service.store().read_all(SHEET).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once[1][3], "22222");
        assert_eq!(once[1].last().unwrap(), "TEXTO DE REVISTA");
    }

    #[test]
    fn update_requires_an_identifier() {
        let mut service = seeded_service();
        let err = service.update(SHEET, &candidate("")).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn update_of_a_missing_row_is_row_not_found() {
        let mut service = seeded_service();
        let err = service.update(SHEET, &candidate("EX-999")).unwrap_err();
        assert!(matches!(err, Error::RowNotFound { .. }));
    }

    #[test]
    fn delete_then_lookup_is_not_found() {
        let mut service = seeded_service();
        service.delete(SHEET, "EX-100").unwrap();
        let err = service.find(SHEET, "EX-100").unwrap_err();
        assert!(matches!(err, Error::RowNotFound { .. }));
    }

    #[test]
    fn duplicate_identifier_matches_the_first_occurrence() {
        let mut service = seeded_service();
        service.insert(SHEET, &candidate("EX-100")).unwrap();

        service.delete(SHEET, "EX-100").unwrap();
        // The seeded occurrence went away; the inserted one remains.
        let row = service.find(SHEET, "EX-100").unwrap();
        assert_eq!(row["CRED."], "22222");
    }

    #[test]
    fn writes_invalidate_the_cached_view() {
        let mut service = seeded_service();
        assert_eq!(service.view(SHEET).unwrap().height(), 1);

        service.insert(SHEET, &candidate("EX-200")).unwrap();
        assert_eq!(service.view(SHEET).unwrap().height(), 2);
    }

    #[test]
    fn copy_fields_pull_paperwork_text() {
        let mut service = seeded_service();
        let fields = service.copy_fields(SHEET, "EX-100").unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields[0],
            (
                "SITUACION DE REVISTA FALTA CON/SIN AVISO (INFFC)".to_string(),
                "TEXTO DE REVISTA".to_string()
            )
        );
        assert_eq!(fields[1].1, "");
    }

    #[test]
    fn unknown_sheet_is_a_config_error() {
        let mut service = SheetService::new(MemoryStore::new());
        let err = service.view("NO SUCH SHEET").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
