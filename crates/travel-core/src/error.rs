use thiserror::Error;

/// Rejected input, caught before any store call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field `{field}` must not be blank")]
    Blank { field: &'static str },

    #[error("Field `{field}` must be non-negative, got {value}")]
    Negative { field: &'static str, value: i64 },
}
