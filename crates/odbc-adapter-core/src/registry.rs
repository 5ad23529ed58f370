//! Dialect registry.
//!
//! Maps database product names, as reported by the driver, to dialects.
//! The registry is an ordinary value: build it at startup and hand it to
//! the connection layer.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::dialect::{BuiltinDialect, Dialect, DialectOverrides, ExtendedDialect};
use crate::error::{AdapterError, Result};

#[derive(Debug, Clone)]
struct Entry {
    pattern: Regex,
    handler: Arc<dyn Dialect>,
}

/// Ordered mapping from product-name patterns to dialects.
///
/// Patterns are case-insensitive regular expressions. Resolution checks
/// the most recent registration first, so a later registration always
/// wins over an earlier one that matches the same name. Entries are never
/// removed.
#[derive(Debug, Clone, Default)]
pub struct DialectRegistry {
    entries: Vec<Entry>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in MySQL, PostgreSQL and
    /// Snowflake patterns.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (pattern, dialect) in [
            ("my.*sql", BuiltinDialect::MySql),
            ("postgres", BuiltinDialect::PostgreSql),
            ("snowflake", BuiltinDialect::Snowflake),
        ] {
            if let Ok(pattern) = compile(pattern) {
                registry.insert(pattern, dialect.handler());
            }
        }
        registry
    }

    /// Registers a dialect derived from `base` with `overrides`.
    ///
    /// Registering a pattern whose text equals an existing one replaces
    /// that entry.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidPattern`] if `pattern` is not a
    /// valid regular expression.
    pub fn register(
        self,
        pattern: &str,
        base: Arc<dyn Dialect>,
        overrides: DialectOverrides,
    ) -> Result<Self> {
        self.register_dialect(pattern, Arc::new(ExtendedDialect::new(base, overrides)))
    }

    /// Registers a dialect implementation as is.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidPattern`] if `pattern` is not a
    /// valid regular expression.
    pub fn register_dialect(mut self, pattern: &str, handler: Arc<dyn Dialect>) -> Result<Self> {
        let compiled = compile(pattern).map_err(|source| AdapterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        debug!(pattern = %pattern, dialect = %handler.name(), "Registering dialect");
        self.insert(compiled, handler);
        Ok(self)
    }

    fn insert(&mut self, pattern: Regex, handler: Arc<dyn Dialect>) {
        self.entries.retain(|e| e.pattern.as_str() != pattern.as_str());
        self.entries.push(Entry { pattern, handler });
    }

    /// Finds the dialect for a product name.
    #[must_use]
    pub fn find(&self, product_name: &str) -> Option<Arc<dyn Dialect>> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.pattern.is_match(product_name))
            .map(|e| Arc::clone(&e.handler))
    }

    /// Resolves the dialect for a product name.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::UnsupportedDatabase`] if no pattern
    /// matches.
    pub fn resolve(&self, product_name: &str) -> Result<Arc<dyn Dialect>> {
        self.find(product_name)
            .ok_or_else(|| AdapterError::UnsupportedDatabase(product_name.to_string()))
    }

    /// Returns the registered patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.pattern.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compile(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
