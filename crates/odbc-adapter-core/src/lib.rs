//! # odbc-adapter-core
//!
//! Column metadata and value casting for ORMs that reach their database
//! through ODBC.
//!
//! An ODBC driver reports each column's type as a vendor-specific string
//! and every row value as text. This crate turns that into something an
//! ORM can use:
//!
//! - [`Column`] parses a native type string such as `numeric(10,2)` into
//!   an [`AbstractType`] plus limit, precision and scale, and casts raw
//!   values into typed [`Value`]s.
//! - [`Dialect`] captures what differs between vendors: extra type rules,
//!   boolean literals, timestamp formats, identifier quoting and default
//!   normalization. MySQL, PostgreSQL and Snowflake ship built in.
//! - [`DialectRegistry`] picks a dialect from the database product name.
//!
//! ## Example
//!
//! ```rust
//! use odbc_adapter_core::{AbstractType, Dialect, DialectRegistry, FieldDescription, Value};
//!
//! let registry = DialectRegistry::with_builtins();
//! let dialect = registry.resolve("PostgreSQL 14.2").unwrap();
//!
//! let column = dialect.build_column(
//!     &FieldDescription::new("price", "numeric(12,2)").nullable(false),
//! );
//! assert_eq!(column.abstract_type(), Some(AbstractType::Decimal));
//! assert_eq!(column.precision(), Some(12));
//! assert_eq!(column.scale(), Some(2));
//!
//! let value = column.cast(Some("1999.95")).unwrap().unwrap();
//! assert_eq!(value.to_string(), "1999.95");
//! assert_eq!(column.cast(None).unwrap(), None::<Value>);
//! ```

pub mod coder;
pub mod column;
pub mod dialect;
mod error;
pub mod registry;
pub mod type_map;
pub mod types;
pub mod value;

pub use coder::{Base64Coder, ColumnCoder};
pub use column::{Column, ColumnBuilder, FieldDescription};
pub use dialect::{
    BuiltinDialect, Dialect, DialectOverrides, ExtendedDialect, GenericDialect, MySqlDialect,
    PostgreSqlDialect, SnowflakeDialect,
};
pub use error::{AdapterError, CastError, Result};
pub use registry::DialectRegistry;
pub use type_map::{RuleTarget, TypeRule};
pub use types::{AbstractType, ValueKind};
pub use value::{cast, BooleanLiterals, Value, ValueConventions};
