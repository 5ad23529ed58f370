//! Typed values and casting from wire-format strings.
//!
//! Drivers hand every row value over as text. [`cast`] turns that text
//! into a [`Value`] according to the column's abstract type and the
//! vendor's literal conventions.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CastError;
use crate::types::AbstractType;

/// A typed column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value.
    Integer(i64),
    /// Floating-point value.
    Float(f64),
    /// Arbitrary-precision decimal value.
    Decimal(BigDecimal),
    /// Date and time. Time-of-day columns sit on [`dummy_date`].
    DateTime(NaiveDateTime),
    /// Calendar date.
    Date(NaiveDate),
    /// Text value.
    Text(String),
    /// Raw bytes.
    Binary(Vec<u8>),
    /// Boolean value.
    Boolean(bool),
}

impl Value {
    /// Returns the text if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Decimal(d) => f.write_str(&d.to_plain_string()),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Text(s) => f.write_str(s),
            Self::Binary(bytes) => {
                f.write_str("\\x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// The fixed date that time-of-day values are anchored to.
#[must_use]
pub fn dummy_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

/// The literals a vendor uses for true and false.
///
/// Matching ignores case and surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiterals {
    /// Literals read as true.
    pub true_literals: Vec<String>,
    /// Literals read as false.
    pub false_literals: Vec<String>,
}

impl BooleanLiterals {
    /// Creates a literal set.
    pub fn new<T, F>(true_literals: T, false_literals: F) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            true_literals: true_literals.into_iter().map(Into::into).collect(),
            false_literals: false_literals.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads a literal, returning `None` if it is in neither set.
    #[must_use]
    pub fn parse(&self, literal: &str) -> Option<bool> {
        let literal = literal.trim();
        let matches = |set: &[String]| set.iter().any(|l| l.eq_ignore_ascii_case(literal));
        if matches(&self.true_literals) {
            Some(true)
        } else if matches(&self.false_literals) {
            Some(false)
        } else {
            None
        }
    }
}

impl Default for BooleanLiterals {
    fn default() -> Self {
        Self::new(
            ["1", "t", "true", "y", "yes", "on"],
            ["0", "f", "false", "n", "no", "off"],
        )
    }
}

/// Vendor conventions for reading raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueConventions {
    /// Boolean literal sets.
    pub boolean: BooleanLiterals,
    /// `chrono` formats tried in order for datetime and timestamp values.
    pub timestamp_formats: Vec<String>,
    /// `chrono` formats tried in order for time-of-day values.
    pub time_formats: Vec<String>,
    /// `chrono` formats tried in order for date values.
    pub date_formats: Vec<String>,
    /// Whether integer columns accept fractional text, truncating it.
    pub truncate_fractional_integers: bool,
}

impl Default for ValueConventions {
    fn default() -> Self {
        Self {
            boolean: BooleanLiterals::default(),
            timestamp_formats: vec![
                String::from("%Y-%m-%d %H:%M:%S%.f"),
                String::from("%Y-%m-%dT%H:%M:%S%.f"),
            ],
            time_formats: vec![String::from("%H:%M:%S%.f"), String::from("%H:%M")],
            date_formats: vec![String::from("%Y-%m-%d")],
            truncate_fractional_integers: false,
        }
    }
}

/// Casts a raw value to the given abstract type.
///
/// Absent input is absent output for every type. Empty text is absent
/// for the boolean and temporal types. Unclassified columns
/// (`kind == None`) pass their text through unchanged.
///
/// # Errors
///
/// Returns a [`CastError`] if the text cannot be read as the type.
pub fn cast(
    value: Option<&str>,
    kind: Option<AbstractType>,
    conventions: &ValueConventions,
) -> Result<Option<Value>, CastError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let Some(kind) = kind else {
        return Ok(Some(Value::Text(raw.to_string())));
    };

    if raw.trim().is_empty() && (kind.is_temporal() || kind == AbstractType::Boolean) {
        return Ok(None);
    }

    let value = match kind {
        AbstractType::String | AbstractType::Text => Value::Text(raw.to_string()),
        AbstractType::Integer => Value::Integer(cast_integer(raw, conventions)?),
        AbstractType::Float => Value::Float(
            raw.trim()
                .parse::<f64>()
                .map_err(|e| CastError::new(kind.as_str(), raw, e))?,
        ),
        AbstractType::Decimal => Value::Decimal(
            BigDecimal::from_str(raw.trim()).map_err(|e| CastError::new(kind.as_str(), raw, e))?,
        ),
        AbstractType::DateTime | AbstractType::Timestamp => {
            Value::DateTime(parse_timestamp(raw.trim(), &conventions.timestamp_formats).ok_or_else(
                || CastError::new(kind.as_str(), raw, "no timestamp format matched"),
            )?)
        }
        AbstractType::Time => {
            let time = parse_time(raw.trim(), conventions).ok_or_else(|| {
                CastError::new(kind.as_str(), raw, "no time format matched")
            })?;
            Value::DateTime(dummy_date().and_time(time))
        }
        AbstractType::Date => Value::Date(parse_date(raw.trim(), conventions).ok_or_else(
            || CastError::new(kind.as_str(), raw, "no date format matched"),
        )?),
        AbstractType::Binary => Value::Binary(raw.as_bytes().to_vec()),
        AbstractType::Boolean => Value::Boolean(conventions.boolean.parse(raw).ok_or_else(|| {
            CastError::new(kind.as_str(), raw, "not a recognized boolean literal")
        })?),
    };
    Ok(Some(value))
}

fn cast_integer(raw: &str, conventions: &ValueConventions) -> Result<i64, CastError> {
    let text = raw.trim();
    match text.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) if !conventions.truncate_fractional_integers => {
            Err(CastError::new(AbstractType::Integer.as_str(), raw, e))
        }
        Err(_) => BigDecimal::from_str(text)
            .map_err(|e| CastError::new(AbstractType::Integer.as_str(), raw, e))?
            .with_scale(0)
            .to_i64()
            .ok_or_else(|| {
                CastError::new(AbstractType::Integer.as_str(), raw, "out of range for i64")
            }),
    }
}

fn parse_timestamp(text: &str, formats: &[String]) -> Option<NaiveDateTime> {
    formats.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(text, format)
            .ok()
            .or_else(|| {
                DateTime::parse_from_str(text, &format!("{format}%#z"))
                    .ok()
                    .map(|dt| dt.naive_utc())
            })
            .or_else(|| {
                DateTime::parse_from_str(text, &format!("{format} %#z"))
                    .ok()
                    .map(|dt| dt.naive_utc())
            })
    })
}

// Offsets are parsed against the dummy date and the result converted to
// UTC. A full timestamp keeps only its time of day.
fn parse_time(text: &str, conventions: &ValueConventions) -> Option<NaiveTime> {
    let anchored = format!("{} {text}", dummy_date().format("%Y-%m-%d"));
    conventions
        .time_formats
        .iter()
        .find_map(|format| {
            NaiveTime::parse_from_str(text, format).ok().or_else(|| {
                [
                    format!("%Y-%m-%d {format}%#z"),
                    format!("%Y-%m-%d {format} %#z"),
                ]
                .iter()
                .find_map(|f| DateTime::parse_from_str(&anchored, f).ok())
                .map(|dt| dt.naive_utc().time())
            })
        })
        .or_else(|| parse_timestamp(text, &conventions.timestamp_formats).map(|dt| dt.time()))
}

fn parse_date(text: &str, conventions: &ValueConventions) -> Option<NaiveDate> {
    conventions
        .date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| parse_timestamp(text, &conventions.timestamp_formats).map(|dt| dt.date()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast_default(value: Option<&str>, kind: AbstractType) -> Result<Option<Value>, CastError> {
        cast(value, Some(kind), &ValueConventions::default())
    }

    #[test]
    fn test_absent_is_absent() {
        for kind in AbstractType::ALL {
            assert_eq!(cast_default(None, kind), Ok(None));
        }
        assert_eq!(cast(None, None, &ValueConventions::default()), Ok(None));
    }

    #[test]
    fn test_text_unchanged() {
        assert_eq!(
            cast_default(Some(" padded "), AbstractType::String),
            Ok(Some(Value::Text(String::from(" padded "))))
        );
        assert_eq!(
            cast(Some("POINT(1 2)"), None, &ValueConventions::default()),
            Ok(Some(Value::Text(String::from("POINT(1 2)"))))
        );
    }

    #[test]
    fn test_integer() {
        assert_eq!(
            cast_default(Some("-42"), AbstractType::Integer),
            Ok(Some(Value::Integer(-42)))
        );
        assert!(cast_default(Some("12.7"), AbstractType::Integer).is_err());
        assert!(cast_default(Some("abc"), AbstractType::Integer).is_err());
    }

    #[test]
    fn test_integer_truncation() {
        let conventions = ValueConventions {
            truncate_fractional_integers: true,
            ..ValueConventions::default()
        };
        let kind = Some(AbstractType::Integer);
        assert_eq!(cast(Some("12.7"), kind, &conventions), Ok(Some(Value::Integer(12))));
        assert_eq!(cast(Some("-12.7"), kind, &conventions), Ok(Some(Value::Integer(-12))));
        assert!(cast(Some("twelve"), kind, &conventions).is_err());
    }

    #[test]
    fn test_float() {
        assert_eq!(
            cast_default(Some("2.5"), AbstractType::Float),
            Ok(Some(Value::Float(2.5)))
        );
        assert!(cast_default(Some("x"), AbstractType::Float).is_err());
    }

    #[test]
    fn test_decimal_keeps_precision() {
        let raw = "12345678901234567890.123456789";
        let value = cast_default(Some(raw), AbstractType::Decimal).unwrap().unwrap();
        assert_eq!(value.to_string(), raw);
    }

    #[test]
    fn test_decimal_display_is_plain() {
        for (raw, expected) in [
            ("0.0000000001", "0.0000000001"),
            ("0.00000000000000000001", "0.00000000000000000001"),
            ("1e-7", "0.0000001"),
            ("1E+30", "1000000000000000000000000000000"),
        ] {
            let value = cast_default(Some(raw), AbstractType::Decimal).unwrap().unwrap();
            assert_eq!(value.to_string(), expected, "{raw}");
        }
    }

    #[test]
    fn test_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(14, 5, 6, 250_000)
            .unwrap();
        for raw in [
            "2024-03-09 14:05:06.25",
            "2024-03-09T14:05:06.250",
            "2024-03-09 16:05:06.25+02",
            "2024-03-09 14:05:06.25 +0000",
        ] {
            assert_eq!(
                cast_default(Some(raw), AbstractType::Timestamp),
                Ok(Some(Value::DateTime(expected))),
                "{raw}"
            );
        }
        assert!(cast_default(Some("yesterday"), AbstractType::DateTime).is_err());
    }

    #[test]
    fn test_time_on_dummy_date() {
        let value = cast_default(Some("08:30:00"), AbstractType::Time).unwrap().unwrap();
        let Value::DateTime(dt) = value else {
            panic!("expected datetime");
        };
        assert_eq!(dt.date(), dummy_date());
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn test_time_with_offset_is_utc() {
        let value = cast_default(Some("08:30:00+02"), AbstractType::Time).unwrap();
        let expected = dummy_date().and_hms_opt(6, 30, 0).unwrap();
        assert_eq!(value, Some(Value::DateTime(expected)));

        let value = cast_default(Some("08:30:00.5 -0100"), AbstractType::Time).unwrap();
        let expected = dummy_date().and_hms_milli_opt(9, 30, 0, 500).unwrap();
        assert_eq!(value, Some(Value::DateTime(expected)));
    }

    #[test]
    fn test_time_from_full_timestamp() {
        let value = cast_default(Some("2000-01-01 08:30:00"), AbstractType::Time).unwrap();
        let expected = dummy_date().and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(value, Some(Value::DateTime(expected)));
        assert!(cast_default(Some("half past eight"), AbstractType::Time).is_err());
    }

    #[test]
    fn test_empty_temporal_is_absent() {
        for kind in [
            AbstractType::DateTime,
            AbstractType::Timestamp,
            AbstractType::Time,
            AbstractType::Date,
        ] {
            assert_eq!(cast_default(Some(""), kind), Ok(None), "{kind}");
            assert_eq!(cast_default(Some("  "), kind), Ok(None), "{kind}");
        }
        assert!(cast_default(Some(""), AbstractType::Integer).is_err());
    }

    #[test]
    fn test_date() {
        let expected = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(
            cast_default(Some("1999-12-31"), AbstractType::Date),
            Ok(Some(Value::Date(expected)))
        );
        assert_eq!(
            cast_default(Some("1999-12-31 00:00:00"), AbstractType::Date),
            Ok(Some(Value::Date(expected)))
        );
    }

    #[test]
    fn test_binary_is_raw_bytes() {
        assert_eq!(
            cast_default(Some("AB\0"), AbstractType::Binary),
            Ok(Some(Value::Binary(vec![b'A', b'B', 0])))
        );
    }

    #[test]
    fn test_boolean() {
        assert_eq!(
            cast_default(Some("t"), AbstractType::Boolean),
            Ok(Some(Value::Boolean(true)))
        );
        assert_eq!(
            cast_default(Some("FALSE"), AbstractType::Boolean),
            Ok(Some(Value::Boolean(false)))
        );
        assert_eq!(cast_default(Some(""), AbstractType::Boolean), Ok(None));
        assert!(cast_default(Some("maybe"), AbstractType::Boolean).is_err());
    }

    #[test]
    fn test_accessors() {
        let text = Value::Text(String::from("abc"));
        assert_eq!(text.as_text(), Some("abc"));
        assert_eq!(text.as_integer(), None);
        assert_eq!(Value::Integer(7).as_integer(), Some(7));
        assert_eq!(Value::Integer(7).as_bool(), None);
        assert_eq!(Value::Boolean(false).as_bool(), Some(false));
        assert_eq!(Value::Boolean(false).as_text(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Binary(vec![0xde, 0xad]).to_string(), "\\xdead");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Integer(7).to_string(), "7");
    }
}
