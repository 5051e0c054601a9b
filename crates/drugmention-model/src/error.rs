use thiserror::Error;

/// Reasons a raw row is rejected while building a typed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("field '{field}' has an invalid date: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("unsupported source file type '{value}'")]
    InvalidSourceFileType { value: String },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
