//! Classification, extraction and casting properties of column descriptors.

mod common;
use common::*;

use odbc_adapter_core::{AbstractType, Value};

#[test]
fn int_family_is_integer() {
    for sql_type in ["int", "INT", "bigint", "tinyint", "smallint", "int4", "int8", "INTEGER"] {
        assert_eq!(
            column(sql_type).abstract_type(),
            Some(AbstractType::Integer),
            "{sql_type}"
        );
    }
}

#[test]
fn numeric_zero_scale_is_integer() {
    for sql_type in ["numeric(10,0)", "decimal(5,0)", "NUMBER(38,0)"] {
        let c = column(sql_type);
        assert_eq!(c.abstract_type(), Some(AbstractType::Integer), "{sql_type}");
        assert_eq!(c.scale(), Some(0));
    }
}

#[test]
fn numeric_positive_scale_is_decimal() {
    for (sql_type, precision, scale) in [
        ("numeric(10,2)", 10, 2),
        ("decimal(18,6)", 18, 6),
        ("NUMBER(38,10)", 38, 10),
    ] {
        let c = column(sql_type);
        assert_eq!(c.abstract_type(), Some(AbstractType::Decimal), "{sql_type}");
        assert_eq!(c.precision(), Some(precision));
        assert_eq!(c.scale(), Some(scale));
    }
}

#[test]
fn numeric_without_comma_has_zero_scale() {
    for p in [1_u32, 9, 38] {
        let c = column(&format!("numeric({p})"));
        assert_eq!(c.precision(), Some(p));
        assert_eq!(c.scale(), Some(0));
        assert_eq!(c.abstract_type(), Some(AbstractType::Integer));
    }
}

#[test]
fn varchar_limit() {
    for n in [1_u32, 40, 255, 65_535] {
        let c = column(&format!("varchar({n})"));
        assert_eq!(c.limit(), Some(n));
        assert_eq!(c.abstract_type(), Some(AbstractType::String));
        assert_eq!(c.precision(), None);
        assert_eq!(c.scale(), None);
    }
}

#[test]
fn malformed_groups_are_absent() {
    let c = column("varchar(max)");
    assert_eq!(c.limit(), None);
    assert_eq!(c.abstract_type(), Some(AbstractType::String));

    let c = column("numeric(p,s)");
    assert_eq!(c.precision(), None);
    assert_eq!(c.scale(), None);
    assert_eq!(c.abstract_type(), Some(AbstractType::Decimal));
}

#[test]
fn temporal_precedence() {
    assert_eq!(column("datetime").abstract_type(), Some(AbstractType::DateTime));
    assert_eq!(column("datetime2(7)").abstract_type(), Some(AbstractType::DateTime));
    assert_eq!(column("timestamp").abstract_type(), Some(AbstractType::Timestamp));
    assert_eq!(
        column("timestamp with time zone").abstract_type(),
        Some(AbstractType::Timestamp)
    );
    assert_eq!(column("time(3)").abstract_type(), Some(AbstractType::Time));
    assert_eq!(column("smalldatetime").abstract_type(), Some(AbstractType::DateTime));
    assert_eq!(column("date").abstract_type(), Some(AbstractType::Date));
}

#[test]
fn classification_is_stable() {
    for sql_type in ["numeric(10,2)", "text", "geometry", "blob"] {
        assert_eq!(column(sql_type).abstract_type(), column(sql_type).abstract_type());
    }
}

#[test]
fn unclassified_passes_through() {
    let c = column("geometry");
    assert_eq!(c.abstract_type(), None);
    assert_eq!(c.value_kind(), None);
    assert_eq!(cast("geometry", "POINT(0 0)"), Value::Text(String::from("POINT(0 0)")));
}

#[test]
fn absent_input_is_absent_for_every_type() {
    for sql_type in [
        "int", "float", "numeric(10,2)", "datetime", "timestamp", "time", "date", "text",
        "varchar(10)", "blob", "boolean", "geometry",
    ] {
        assert_eq!(column(sql_type).cast(None).unwrap(), None, "{sql_type}");
    }
}

#[test]
fn integer_round_trip() {
    for n in [0_i64, 1, -1, 42, i64::MAX, i64::MIN] {
        assert_eq!(cast("bigint", &n.to_string()), Value::Integer(n));
    }
}

#[test]
fn decimal_keeps_every_digit() {
    let raw = "12345678901234567890.123456789";
    assert_eq!(cast("decimal(38,9)", raw).to_string(), raw);
}

#[test]
fn decimal_written_back_without_exponent() {
    for raw in ["0.0000000001", "0.00000000000000000001", "123.45"] {
        assert_eq!(cast("decimal(40,20)", raw).to_string(), raw);
    }
    assert_eq!(cast("decimal(40,20)", "1e-7").to_string(), "0.0000001");
    assert_eq!(
        cast("numeric", "1E+30").to_string(),
        "1000000000000000000000000000000"
    );
}

#[test]
fn empty_temporal_values_are_absent() {
    for sql_type in ["date", "datetime", "timestamp", "time"] {
        assert_eq!(column(sql_type).cast(Some("")).unwrap(), None, "{sql_type}");
    }
}

#[test]
fn spaced_numeric_is_decimal_without_scale() {
    let c = column("number(38, 0)");
    assert_eq!(c.abstract_type(), Some(AbstractType::Decimal));
    assert_eq!(c.precision(), None);
    assert_eq!(c.scale(), None);
    assert_eq!(c.limit(), Some(38));
}

#[test]
fn malformed_values_fail_loudly() {
    assert!(column("int").cast(Some("forty-two")).is_err());
    assert!(column("float").cast(Some("NaN-ish")).is_err());
    assert!(column("decimal(10,2)").cast(Some("1.2.3")).is_err());
    assert!(column("date").cast(Some("31/12/1999")).is_err());
    assert!(column("boolean").cast(Some("maybe")).is_err());
}

#[test]
fn string_and_text_unchanged() {
    assert_eq!(cast("text", "  spaced  "), Value::Text(String::from("  spaced  ")));
    assert_eq!(cast("char(3)", "abc"), Value::Text(String::from("abc")));
}
