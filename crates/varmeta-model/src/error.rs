use thiserror::Error;

#[derive(Debug, Error)]
pub enum VarError {
    /// A key is already bound to a non-equal variable.
    #[error("key '{key}' is already bound to a different variable: existing '{existing}', new '{new}'")]
    Conflict {
        key: String,
        existing: String,
        new: String,
    },
    #[error("no variable registered under key '{key}'")]
    NotFound { key: String },
    #[error("metadata entry declares key '{found}' but is stored under '{expected}'")]
    KeyMismatch { expected: String, found: String },
    #[error("data for '{key}' does not conform to dtype '{expected}', got '{found}'")]
    DtypeMismatch {
        key: String,
        expected: String,
        found: String,
    },
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, VarError>;
