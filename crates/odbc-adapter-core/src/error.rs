//! Error types.

use thiserror::Error;

/// A raw value could not be converted to its column's type.
///
/// This signals corrupted or unexpected data from the driver and is
/// surfaced to whoever fetched the row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot cast {value:?} to {target}: {reason}")]
pub struct CastError {
    /// Name of the type or coder the value was cast to.
    pub target: String,
    /// The raw value.
    pub value: String,
    /// Why the conversion failed.
    pub reason: String,
}

impl CastError {
    /// Creates a new cast error.
    pub fn new(
        target: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised while selecting a dialect or reading rows.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// No registered pattern matches the database product name.
    #[error("unsupported database: {0}")]
    UnsupportedDatabase(String),

    /// A dialect pattern is not a valid regular expression.
    #[error("invalid dialect pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A row value could not be cast.
    #[error("column '{column}': {source}")]
    Cast {
        /// Column the value belongs to.
        column: String,
        /// The underlying cast failure.
        #[source]
        source: CastError,
    },

    /// A row does not have one value per column.
    #[error("row has {actual} values but the result set has {expected} columns")]
    RowArity {
        /// Number of columns.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
