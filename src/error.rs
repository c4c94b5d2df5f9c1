use thiserror::Error;

/// Failure taxonomy for every operation in the crate.
///
/// `Config` is fatal; everything else is recoverable at the operation
/// level and must leave the backend untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("field '{field}': cannot interpret '{value}' as {expected}")]
    Parse {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("no row with identifier '{id}' in sheet '{sheet}'")]
    RowNotFound { sheet: String, id: String },

    #[error("worksheet '{0}' not found")]
    WorksheetNotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Error::Backend(message.into())
    }
}
