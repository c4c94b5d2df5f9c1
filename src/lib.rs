pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod import;
pub mod ops;
pub mod record;
pub mod report;
pub mod schema;
pub mod store;
pub mod table;
pub mod validate;

pub use error::{Error, Result};
