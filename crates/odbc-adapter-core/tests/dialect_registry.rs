//! Dialect resolution and runtime registration.

use std::sync::Arc;

use odbc_adapter_core::{
    AbstractType, AdapterError, BooleanLiterals, BuiltinDialect, Dialect, DialectOverrides,
    DialectRegistry, FieldDescription, GenericDialect, TypeRule, Value,
};

#[test]
fn resolves_builtin_vendors() {
    let registry = DialectRegistry::with_builtins();
    assert_eq!(registry.resolve("PostgreSQL 14.2").unwrap().name(), "postgresql");
    assert_eq!(registry.resolve("Snowflake").unwrap().name(), "snowflake");
    assert_eq!(registry.resolve("MySQL").unwrap().name(), "mysql");
}

#[test]
fn unknown_vendor_is_unsupported() {
    let registry = DialectRegistry::with_builtins();
    let err = registry.resolve("FooDB").unwrap_err();
    assert!(matches!(err, AdapterError::UnsupportedDatabase(ref name) if name == "FooDB"));
    assert_eq!(err.to_string(), "unsupported database: FooDB");
}

#[test]
fn later_registration_wins() {
    let registry = DialectRegistry::with_builtins()
        .register(
            "postgre",
            BuiltinDialect::PostgreSql.handler(),
            DialectOverrides::new().name("postgres-custom"),
        )
        .unwrap();
    assert_eq!(registry.len(), 4);
    assert_eq!(
        registry.resolve("PostgreSQL 14.2").unwrap().name(),
        "postgres-custom"
    );

    let registry = registry
        .register_dialect("postgre", Arc::new(GenericDialect::new()))
        .unwrap();
    assert_eq!(registry.len(), 4);
    assert_eq!(registry.resolve("PostgreSQL 14.2").unwrap().name(), "generic");
}

#[test]
fn registered_vendor_uses_overrides() {
    let registry = DialectRegistry::with_builtins()
        .register(
            "foodb",
            Arc::new(GenericDialect::new()),
            DialectOverrides::new()
                .name("foodb")
                .type_rule(TypeRule::new("^yesno$", AbstractType::Boolean).unwrap())
                .boolean(BooleanLiterals::new(["Y"], ["N"])),
        )
        .unwrap();

    let dialect = registry.resolve("FooDB 2.0").unwrap();
    assert_eq!(dialect.name(), "foodb");

    let column = dialect.build_column(&FieldDescription::new("active", "YESNO").default_value("N"));
    assert_eq!(column.abstract_type(), Some(AbstractType::Boolean));
    assert_eq!(column.default(), Some(&Value::Boolean(false)));
    assert_eq!(column.cast(Some("y")).unwrap(), Some(Value::Boolean(true)));
}

#[test]
fn columns_are_shareable_across_threads() {
    let dialect = DialectRegistry::with_builtins().resolve("MySQL").unwrap();
    let column = Arc::new(dialect.build_column(&FieldDescription::new("n", "int(11)")));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let column = Arc::clone(&column);
            std::thread::spawn(move || column.cast(Some(&i.to_string())).unwrap())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            Some(Value::Integer(i64::try_from(i).unwrap()))
        );
    }
}
