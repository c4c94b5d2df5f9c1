mod field;
mod registry;

pub use field::{FieldConfig, FieldType, OptionsSource, Rule};
pub use registry::{Registry, SheetSchema, LISTAS_SHEET};
