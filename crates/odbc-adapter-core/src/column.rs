//! Column descriptors.
//!
//! A [`Column`] is built once per result-set field or table column from
//! the metadata the driver reports, then shared read-only by every row
//! of that result set to cast raw values.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::coder::ColumnCoder;
use crate::error::CastError;
use crate::type_map::{classify_with, extract_limit, extract_precision, extract_scale, TypeRule};
use crate::types::{AbstractType, ValueKind};
use crate::value::{self, Value, ValueConventions};

/// Metadata a driver reports for one field or table column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescription {
    /// Column name.
    pub name: String,
    /// Native type string, e.g. `numeric(10,2)`. May be empty.
    pub sql_type: String,
    /// Declared default, as reported by the driver.
    pub default: Option<String>,
    /// Whether the column accepts NULL. `None` when the driver cannot tell.
    pub nullable: Option<bool>,
}

impl FieldDescription {
    /// Creates a field description with no default and unknown nullability.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            default: None,
            nullable: None,
        }
    }

    /// Sets the declared default.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets nullability.
    #[must_use]
    pub const fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }
}

/// Immutable description of one column.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    sql_type: String,
    abstract_type: Option<AbstractType>,
    limit: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
    default: Option<Value>,
    raw_default: Option<String>,
    nullable: bool,
    conventions: ValueConventions,
    coder: Option<Arc<dyn ColumnCoder>>,
}

impl Column {
    /// Creates a column with the default classification table and
    /// generic value conventions.
    pub fn new(
        name: impl Into<String>,
        default: Option<&str>,
        sql_type: Option<&str>,
        nullable: Option<bool>,
    ) -> Self {
        let mut builder = Self::builder(name).sql_type(sql_type.unwrap_or_default());
        if let Some(default) = default {
            builder = builder.default(default);
        }
        if let Some(nullable) = nullable {
            builder = builder.nullable(nullable);
        }
        builder.build()
    }

    /// Starts building a column.
    pub fn builder(name: impl Into<String>) -> ColumnBuilder {
        ColumnBuilder::new(name)
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the native type string.
    #[must_use]
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// Returns the abstract type, or `None` if unclassified.
    #[must_use]
    pub const fn abstract_type(&self) -> Option<AbstractType> {
        self.abstract_type
    }

    /// Returns the limit from the type string.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the precision of a numeric type.
    #[must_use]
    pub const fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// Returns the scale of a numeric type.
    #[must_use]
    pub const fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// Returns the default, already cast to the column's type.
    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the default as the driver reported it.
    #[must_use]
    pub fn raw_default(&self) -> Option<&str> {
        self.raw_default.as_deref()
    }

    /// Returns true if a typed default is present.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Returns whether the column accepts NULL.
    #[must_use]
    pub const fn nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the conventions used to cast raw values.
    #[must_use]
    pub const fn conventions(&self) -> &ValueConventions {
        &self.conventions
    }

    /// Returns true if a custom coder replaces the built-in casts.
    #[must_use]
    pub const fn encoded(&self) -> bool {
        self.coder.is_some()
    }

    /// Returns the kind of value a cast produces.
    #[must_use]
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.abstract_type.map(AbstractType::value_kind)
    }

    /// Returns true for binary columns.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        self.abstract_type.is_some_and(AbstractType::is_binary)
    }

    /// Returns true for integer, float and decimal columns.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.abstract_type.is_some_and(AbstractType::is_number)
    }

    /// Returns true for text and string columns.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.abstract_type.is_some_and(AbstractType::is_text)
    }

    /// Casts a raw value.
    ///
    /// # Errors
    ///
    /// Returns a [`CastError`] if the value cannot be read as the
    /// column's type.
    pub fn cast(&self, value: Option<&str>) -> Result<Option<Value>, CastError> {
        let Some(raw) = value else {
            return Ok(None);
        };
        if let Some(coder) = &self.coder {
            return coder.load(raw).map(Some);
        }
        value::cast(Some(raw), self.abstract_type, &self.conventions)
    }
}

/// Builder for [`Column`].
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    name: String,
    sql_type: String,
    default: Option<String>,
    nullable: bool,
    rules: Vec<TypeRule>,
    conventions: ValueConventions,
    coder: Option<Arc<dyn ColumnCoder>>,
}

impl ColumnBuilder {
    /// Creates a builder for a nullable, untyped column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: String::new(),
            default: None,
            nullable: true,
            rules: Vec::new(),
            conventions: ValueConventions::default(),
            coder: None,
        }
    }

    /// Sets the native type string.
    #[must_use]
    pub fn sql_type(mut self, sql_type: impl Into<String>) -> Self {
        self.sql_type = sql_type.into();
        self
    }

    /// Sets the raw default.
    #[must_use]
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets nullability.
    #[must_use]
    pub const fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets classification rules tried before the default table.
    #[must_use]
    pub fn rules(mut self, rules: Vec<TypeRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the value conventions.
    #[must_use]
    pub fn conventions(mut self, conventions: ValueConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Sets a custom coder.
    #[must_use]
    pub fn coder(mut self, coder: Arc<dyn ColumnCoder>) -> Self {
        self.coder = Some(coder);
        self
    }

    /// Builds the column.
    ///
    /// A default that does not cast to the column's type is dropped with a
    /// warning; its raw text stays available through
    /// [`Column::raw_default`].
    #[must_use]
    pub fn build(self) -> Column {
        let sql_type = self.sql_type;
        let mut column = Column {
            limit: extract_limit(&sql_type),
            precision: extract_precision(&sql_type),
            scale: extract_scale(&sql_type),
            abstract_type: classify_with(&sql_type, &self.rules),
            name: self.name,
            sql_type,
            default: None,
            raw_default: self.default.filter(|d| !d.is_empty()),
            nullable: self.nullable,
            conventions: self.conventions,
            coder: self.coder,
        };

        if let Some(raw) = column.raw_default.as_deref() {
            match column.cast(Some(raw)) {
                Ok(default) => column.default = default,
                Err(e) => warn!(
                    column = %column.name,
                    default = %raw,
                    error = %e,
                    "Ignoring default that does not match the column type"
                ),
            }
        }

        debug!(
            column = %column.name,
            sql_type = %column.sql_type,
            abstract_type = ?column.abstract_type,
            limit = ?column.limit,
            precision = ?column.precision,
            scale = ?column.scale,
            "Built column descriptor"
        );
        column
    }
}
