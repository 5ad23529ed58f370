#![allow(dead_code)]

use odbc_adapter_core::{Column, Value};

pub fn column(sql_type: &str) -> Column {
    Column::new("c", None, Some(sql_type), None)
}

pub fn cast(sql_type: &str, raw: &str) -> Value {
    column(sql_type)
        .cast(Some(raw))
        .unwrap_or_else(|e| panic!("Failed to cast {raw:?} as {sql_type}: {e}"))
        .unwrap_or_else(|| panic!("Cast of {raw:?} as {sql_type} produced no value"))
}
