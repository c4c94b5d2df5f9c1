use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use personnel_cli::config::{Config, ServiceAccount};
use personnel_cli::filter::Condition;
use personnel_cli::form;
use personnel_cli::import;
use personnel_cli::ops::SheetService;
use personnel_cli::record::Value;
use personnel_cli::report::DailyReport;
use personnel_cli::store::WorkbookStore;
use personnel_cli::table::Table;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Workbook file backing the personnel sheets
    #[arg(short, long)]
    file: PathBuf,

    /// Seconds a cached sheet read stays fresh
    #[arg(long, default_value_t = 600)]
    cache_ttl: u64,

    /// Validate the service-account credential in GCP_SA_CREDENTIALS
    /// before doing anything else
    #[arg(long)]
    require_credentials: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the configured sheets
    Sheets,

    /// Show a sheet's view columns, optionally filtered
    View {
        sheet: String,

        /// Columns the condition is checked against (comma-separated);
        /// all view columns when omitted
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        #[command(flatten)]
        condition: ConditionArgs,

        /// Print rows as JSON objects instead of a table
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Add a record built from FIELD=VALUE pairs
    Add {
        sheet: String,

        /// Field assignments, e.g. 'CRED.=12345'
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Edit the record with the given identifier
    Edit {
        sheet: String,
        id: String,

        /// Field assignments to change
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Delete the record with the given identifier
    Delete { sheet: String, id: String },

    /// Print the paperwork copy fields of a record
    Copy { sheet: String, id: String },

    /// Append the rows of one or more workbook files to a sheet
    Import {
        /// Target sheet
        #[arg(long, default_value = import::DEFAULT_TARGET)]
        sheet: String,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Export the daily report workbook
    Report {
        /// Output path; defaults to Parte_Diario_<date>.xlsx
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct ConditionArgs {
    /// Keep rows whose selected columns contain this text
    #[arg(long)]
    contains: Option<String>,

    /// Keep rows with an empty cell in a selected column
    #[arg(long)]
    empty: bool,

    /// Keep rows with a non-empty cell in a selected column
    #[arg(long)]
    non_empty: bool,
}

impl ConditionArgs {
    fn to_condition(&self) -> Option<Condition> {
        if let Some(term) = &self.contains {
            Some(Condition::Contains(term.clone()))
        } else if self.empty {
            Some(Condition::IsEmpty)
        } else if self.non_empty {
            Some(Condition::IsNotEmpty)
        } else {
            None
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.require_credentials {
        let account = ServiceAccount::from_env()?;
        eprintln!("Credential OK: {}", account.client_email);
    }

    let config = Config::new(&cli.file).with_cache_ttl(Duration::from_secs(cli.cache_ttl));
    let store = WorkbookStore::open(&config.workbook)?;
    let mut service = SheetService::with_cache_ttl(store, config.cache_ttl);

    match cli.command {
        Command::Sheets => {
            for name in service.registry().sheet_names() {
                println!("{name}");
            }
        }
        Command::View {
            sheet,
            columns,
            condition,
            json,
        } => {
            let mut table = service.view(&sheet)?;

            if let Some(condition) = condition.to_condition() {
                let selected: Vec<&str> = if columns.is_empty() {
                    table.headers.iter().map(String::as_str).collect()
                } else {
                    columns.iter().map(String::as_str).collect()
                };
                table = personnel_cli::filter::apply(&table, &selected, &condition);
            }

            if json {
                print_json(&table)?;
            } else {
                print_table(&table);
            }
        }
        Command::Add { sheet, fields } => {
            let record = build_from_pairs(&mut service, &sheet, None, &fields)?;
            service.insert(&sheet, &record)?;
            println!("Added 1 row to '{sheet}'.");
        }
        Command::Edit { sheet, id, fields } => {
            let existing = service.find(&sheet, &id)?;
            let mut record = build_from_pairs(&mut service, &sheet, Some(existing), &fields)?;
            // Identifier columns are not always form fields (DOTACION
            // numbers its rows); carry the identifier over explicitly.
            if let Some(id_col) = service.registry().schema(&sheet).and_then(|s| s.id_column()) {
                if record.cell(id_col).is_empty() {
                    record.set(id_col, Value::text(id.as_str()));
                }
            }
            service.update(&sheet, &record)?;
            println!("Updated row '{id}' in '{sheet}'.");
        }
        Command::Delete { sheet, id } => {
            service.delete(&sheet, &id)?;
            println!("Deleted row '{id}' from '{sheet}'.");
        }
        Command::Copy { sheet, id } => {
            for (label, value) in service.copy_fields(&sheet, &id)? {
                println!("{label}: {value}");
            }
        }
        Command::Import { sheet, files } => {
            let summary = import::import_files(&mut service, &sheet, &files)?;
            for error in &summary.errors {
                eprintln!("Error: {error}");
            }
            println!("Appended {} rows to '{sheet}'.", summary.rows_appended);
        }
        Command::Report { output } => {
            let report = DailyReport::build(service.store())?;
            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "Parte_Diario_{}.xlsx",
                    chrono::Local::now().format("%Y-%m-%d")
                ))
            });
            report.save(&path)?;
            println!("Report written to {}.", path.display());
        }
    }

    Ok(())
}

/// Build a record from `FIELD=VALUE` arguments, starting from the
/// stored record when editing. Values go through the same typed parsing
/// and option checks a form submission would.
fn build_from_pairs(
    service: &mut SheetService<WorkbookStore>,
    sheet: &str,
    existing: Option<indexmap::IndexMap<String, String>>,
    pairs: &[String],
) -> Result<personnel_cli::record::Record> {
    let schema = *service
        .registry()
        .schema(sheet)
        .with_context(|| format!("No schema registered for sheet '{sheet}'"))?;

    let provider = form::StoreOptions::new(service.store());
    let mut record = form::build_record(&schema, existing.as_ref(), &provider)?;

    for pair in pairs {
        let (field, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid field assignment '{pair}', expected FIELD=VALUE"))?;
        form::set_field(&schema, &mut record, field, value, &provider)?;
    }

    Ok(record)
}

fn print_table(table: &Table) {
    println!("{}", table.headers.join("\t"));
    for row in &table.rows {
        println!("{}", row.join("\t"));
    }
}

fn print_json(table: &Table) -> Result<()> {
    let rows: Vec<_> = (0..table.height())
        .filter_map(|i| table.row_map(i))
        .collect();
    let json_string = serde_json::to_string_pretty(&rows)?;
    println!("{}", json_string);
    Ok(())
}
