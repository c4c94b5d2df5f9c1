use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};

use crate::error::{Error, Result};
use crate::store::SheetStore;
use crate::table::Table;

/// Worksheet holding the pivot tables the daily report is cut from.
pub const PIVOT_SHEET: &str = "Tabla dinámica 1";

pub const REPORT_SHEET_NAME: &str = "Reporte Parte Diario";

/// The report layout: one titled section per pivot rectangle, in
/// presentation order. Open-ended ranges run to the pivot sheet's last
/// stored row.
const SECTIONS: &[(&str, &str)] = &[
    ("RECUENTO GENERAL", "A2:E5"),
    ("Oficiales", "A7:E22"),
    ("Suboficiales", "A25:E32"),
    ("Pendientes de Presentación", "G2:L"),
    ("Pendientes de Notificación", "M2:R"),
    ("Recuento de Inasistencias", "T2:V"),
    ("Parte de Enfermo", "Y2:AF"),
    ("Parte de Asistencia Familiar", "AJ2:AP"),
    ("Accidente de Servicio", "AS2:AZ"),
    ("Capacidad Laboral", "BC2:BJ"),
    ("Disponibilidad", "BN2:BU"),
    ("Renuncia", "BZ2:CF"),
    ("Fallecimiento", "CK2:CQ"),
    ("Suspensión Preventiva", "CV2:DA"),
    ("Inasistencia Injustificada", "DG2:DL"),
];

#[derive(Debug)]
pub struct Section {
    pub title: &'static str,
    pub table: Table,
}

/// A daily report snapshot. Sections whose pivot range came back empty
/// are dropped rather than rendered as bare titles.
#[derive(Debug)]
pub struct DailyReport {
    pub generated_at: String,
    pub sections: Vec<Section>,
}

impl DailyReport {
    pub fn build<S: SheetStore>(store: &S) -> Result<DailyReport> {
        let mut sections = Vec::new();

        for &(title, range) in SECTIONS {
            let values = store.read_range(PIVOT_SHEET, range)?;
            if values.iter().flatten().all(|cell| cell.is_empty()) {
                continue;
            }
            sections.push(Section {
                title,
                table: Table::from_values(&values),
            });
        }

        Ok(DailyReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            sections,
        })
    }

    /// Render the report workbook as xlsx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook
            .add_worksheet()
            .set_name(REPORT_SHEET_NAME)
            .map_err(|e| Error::backend(format!("report worksheet: {e}")))?;

        let title_format = Format::new().set_bold().set_font_size(14);
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(0xD3D3D3))
            .set_border(FormatBorder::Thin);
        let cell_format = Format::new().set_border(FormatBorder::Thin);
        let date_format = Format::new().set_italic();

        let fail = |e: rust_xlsxwriter::XlsxError| Error::backend(format!("report write: {e}"));

        worksheet
            .write_string_with_format(0, 1, "Reporte - Parte Diario", &title_format)
            .map_err(fail)?;
        worksheet
            .write_string_with_format(
                1,
                1,
                format!("Fecha de generación: {}", self.generated_at),
                &date_format,
            )
            .map_err(fail)?;

        let mut row = 3u32;
        for section in &self.sections {
            worksheet
                .write_string_with_format(row, 1, section.title, &title_format)
                .map_err(fail)?;
            row += 1;

            for (col, name) in section.table.headers.iter().enumerate() {
                worksheet
                    .write_string_with_format(row, col as u16, name, &header_format)
                    .map_err(fail)?;
            }

            for data_row in &section.table.rows {
                row += 1;
                for (col, value) in data_row.iter().enumerate() {
                    worksheet
                        .write_string_with_format(row, col as u16, value, &cell_format)
                        .map_err(fail)?;
                }
            }

            // Header row plus two blank spacer rows before the next title.
            row += 3;
        }

        worksheet.set_column_width(0, 5).map_err(fail)?;
        for col in 1..=6u16 {
            worksheet.set_column_width(col, 20).map_err(fail)?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| Error::backend(format!("report save: {e}")))
    }

    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)
            .map_err(|e| Error::backend(format!("write {}: {e}", path.display())))
    }
}
