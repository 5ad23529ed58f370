//! Vendor dialects.
//!
//! Each database vendor reports type names and literals a little
//! differently. A [`Dialect`] bundles the behavior that varies: extra
//! type-classification rules, value conventions, identifier quoting and
//! default-value normalization. Column descriptors for a connection are
//! built through its dialect.

mod extended;
mod generic;
mod mysql;
mod postgres;
mod snowflake;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use extended::{DialectOverrides, ExtendedDialect};
pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use postgres::PostgreSqlDialect;
pub use snowflake::SnowflakeDialect;

use crate::column::{Column, FieldDescription};
use crate::type_map::TypeRule;
use crate::value::ValueConventions;

/// Vendor-specific behavior.
pub trait Dialect: Send + Sync + fmt::Debug {
    /// Returns the name of the dialect.
    fn name(&self) -> &str;

    /// Returns classification rules tried before the default table.
    fn type_rules(&self) -> &[TypeRule] {
        &[]
    }

    /// Returns the conventions used to cast raw values.
    fn conventions(&self) -> ValueConventions {
        ValueConventions::default()
    }

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier, doubling any embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    /// Strips vendor decoration from a reported default.
    ///
    /// Returns `None` when the column has no literal default.
    fn normalize_default(&self, raw: &str) -> Option<String> {
        normalize_literal_default(raw)
    }

    /// Builds the column descriptor for a reported field.
    fn build_column(&self, field: &FieldDescription) -> Column {
        let mut builder = Column::builder(field.name.as_str())
            .sql_type(field.sql_type.as_str())
            .rules(self.type_rules().to_vec())
            .conventions(self.conventions());
        if let Some(default) = field
            .default
            .as_deref()
            .and_then(|raw| self.normalize_default(raw))
        {
            builder = builder.default(default);
        }
        if let Some(nullable) = field.nullable {
            builder = builder.nullable(nullable);
        }
        builder.build()
    }
}

/// Normalizes a default reported as a plain or single-quoted literal.
///
/// Blank and `NULL` defaults become `None`; a quoted literal loses its
/// quotes and `''` collapses to `'`.
#[must_use]
pub fn normalize_literal_default(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return None;
    }
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .map_or_else(|| trimmed.to_string(), |inner| inner.replace("''", "'"));
    Some(unquoted)
}

/// The dialects that ship with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinDialect {
    /// ANSI defaults.
    Generic,
    /// MySQL and MariaDB.
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// Snowflake.
    Snowflake,
}

impl BuiltinDialect {
    /// Returns a shared handler for this dialect.
    #[must_use]
    pub fn handler(self) -> Arc<dyn Dialect> {
        match self {
            Self::Generic => Arc::new(GenericDialect::new()),
            Self::MySql => Arc::new(MySqlDialect::new()),
            Self::PostgreSql => Arc::new(PostgreSqlDialect::new()),
            Self::Snowflake => Arc::new(SnowflakeDialect::new()),
        }
    }
}

/// Error returned when parsing an unknown built-in dialect name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for BuiltinDialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" => Ok(Self::PostgreSql),
            "snowflake" => Ok(Self::Snowflake),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
