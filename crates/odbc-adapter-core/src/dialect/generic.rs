//! Generic ODBC dialect.

use super::Dialect;

/// A dialect using ANSI SQL conventions and the default type table.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &str {
        "generic"
    }
}
