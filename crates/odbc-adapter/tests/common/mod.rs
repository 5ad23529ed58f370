#![allow(dead_code)]

use odbc_adapter::{ConnectionAdapter, DialectRegistry, FieldDescription, ResultSchema};

pub fn connect(product: &str) -> ConnectionAdapter {
    ConnectionAdapter::establish(&DialectRegistry::with_builtins(), product)
        .unwrap_or_else(|e| panic!("Failed to establish {product}: {e}"))
}

pub fn schema(product: &str, fields: &[(&str, &str)]) -> ResultSchema {
    let fields: Vec<FieldDescription> = fields
        .iter()
        .map(|(name, sql_type)| FieldDescription::new(*name, *sql_type))
        .collect();
    connect(product).columns(&fields)
}
