//! # odbc-adapter
//!
//! Connection adapter for ORMs that talk to arbitrary databases through
//! ODBC.
//!
//! At connection time the driver reports the database product name. The
//! adapter matches it against a [`DialectRegistry`] to pick a vendor
//! [`Dialect`], builds a [`Column`] for every result-set field, and uses
//! those descriptors to cast each fetched row.
//!
//! ## Example
//!
//! ```rust
//! use odbc_adapter::{ConnectionAdapter, DialectRegistry, FieldDescription, Value};
//!
//! let registry = DialectRegistry::with_builtins();
//! let adapter = ConnectionAdapter::establish(&registry, "MySQL").unwrap();
//!
//! let schema = adapter.columns(&[
//!     FieldDescription::new("id", "int(11)").nullable(false),
//!     FieldDescription::new("active", "tinyint(1)"),
//!     FieldDescription::new("nickname", "varchar(40)"),
//! ]);
//!
//! let row = schema.cast_row(&[Some("7"), Some("1"), None]).unwrap();
//! assert_eq!(
//!     row,
//!     vec![Some(Value::Integer(7)), Some(Value::Boolean(true)), None]
//! );
//! ```
//!
//! ## Configuration
//!
//! Extra vendors can be registered in code with
//! [`DialectRegistry::register`] or declared in a JSON file loaded with
//! [`AdapterConfig::load`]. See the [`config`] module.

pub mod config;
mod connection;
mod error;

pub use config::{AdapterConfig, DialectEntry, TypeRuleEntry};
pub use connection::{ConnectionAdapter, ResultSchema};
pub use error::ConfigError;

// Re-export the core types an ORM integration needs.
pub use odbc_adapter_core::{
    AbstractType, AdapterError, BooleanLiterals, BuiltinDialect, CastError, Column,
    ColumnBuilder, ColumnCoder, Dialect, DialectOverrides, DialectRegistry, FieldDescription,
    Result, TypeRule, Value, ValueConventions,
};
