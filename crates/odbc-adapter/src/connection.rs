//! Connection-time glue between the driver and the ORM.
//!
//! When a connection is established the driver reports the database
//! product name; [`ConnectionAdapter::establish`] turns it into a dialect.
//! Each result set's field metadata then becomes a [`ResultSchema`] that
//! casts every fetched row.

use std::sync::Arc;

use odbc_adapter_core::{
    AdapterError, Column, Dialect, DialectRegistry, FieldDescription, Result, Value,
};
use tracing::{debug, info};

/// A connection's view of its database vendor.
#[derive(Debug, Clone)]
pub struct ConnectionAdapter {
    product_name: String,
    dialect: Arc<dyn Dialect>,
}

impl ConnectionAdapter {
    /// Selects the dialect for the reported database product name.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::UnsupportedDatabase`] if no registered
    /// pattern matches.
    pub fn establish(registry: &DialectRegistry, product_name: &str) -> Result<Self> {
        let dialect = registry.resolve(product_name)?;
        info!(
            product = %product_name,
            dialect = %dialect.name(),
            "Selected dialect for connection"
        );
        Ok(Self {
            product_name: product_name.to_string(),
            dialect,
        })
    }

    /// Returns the product name the driver reported.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the selected dialect.
    #[must_use]
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Quotes an identifier for this database.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        self.dialect.quote_identifier(name)
    }

    /// Builds the descriptor for a single field.
    #[must_use]
    pub fn column(&self, field: &FieldDescription) -> Column {
        self.dialect.build_column(field)
    }

    /// Builds the schema of a result set.
    #[must_use]
    pub fn columns(&self, fields: &[FieldDescription]) -> ResultSchema {
        debug!(
            dialect = %self.dialect.name(),
            fields = fields.len(),
            "Describing result set"
        );
        fields.iter().map(|f| self.column(f)).collect()
    }
}

/// The column descriptors of one result set.
///
/// Cloning is cheap; every clone shares the same descriptors.
#[derive(Debug, Clone)]
pub struct ResultSchema {
    columns: Arc<[Column]>,
}

impl ResultSchema {
    /// Creates a schema from column descriptors.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns: columns.into(),
        }
    }

    /// Returns the columns in result-set order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Finds a column by name, ignoring ASCII case.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the result set has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Casts one row of raw values, one per column.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::RowArity`] if the row length does not match
    /// and [`AdapterError::Cast`] naming the column whose value is
    /// malformed.
    pub fn cast_row(&self, row: &[Option<&str>]) -> Result<Vec<Option<Value>>> {
        if row.len() != self.columns.len() {
            return Err(AdapterError::RowArity {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.columns
            .iter()
            .zip(row)
            .map(|(column, raw)| {
                column.cast(*raw).map_err(|source| AdapterError::Cast {
                    column: column.name().to_string(),
                    source,
                })
            })
            .collect()
    }
}

impl FromIterator<Column> for ResultSchema {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
