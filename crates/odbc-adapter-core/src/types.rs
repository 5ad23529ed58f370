//! Abstract column types.
//!
//! Every vendor type string is reduced to one of a closed set of abstract
//! types. A column whose type string matches none of them stays
//! unclassified and its values pass through as text.

use std::fmt;
use std::str::FromStr;

/// The vendor-neutral kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractType {
    /// Whole numbers.
    Integer,
    /// Binary floating point.
    Float,
    /// Arbitrary-precision decimal with a non-zero scale.
    Decimal,
    /// Date and time of day.
    DateTime,
    /// Date and time of day, reported by the vendor as a timestamp.
    Timestamp,
    /// Time of day without a date.
    Time,
    /// Calendar date.
    Date,
    /// Unbounded character data.
    Text,
    /// Bounded character data.
    String,
    /// Raw bytes.
    Binary,
    /// True or false.
    Boolean,
}

impl AbstractType {
    /// All abstract types, in classification order.
    pub const ALL: [Self; 11] = [
        Self::Integer,
        Self::Float,
        Self::Decimal,
        Self::DateTime,
        Self::Timestamp,
        Self::Time,
        Self::Date,
        Self::Text,
        Self::String,
        Self::Binary,
        Self::Boolean,
    ];

    /// Returns the lower-case symbolic name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Date => "date",
            Self::Text => "text",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
        }
    }

    /// Returns the kind of value produced when casting to this type.
    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::Integer => ValueKind::Integer,
            Self::Float => ValueKind::Float,
            Self::Decimal => ValueKind::Decimal,
            Self::DateTime | Self::Timestamp | Self::Time => ValueKind::DateTime,
            Self::Date => ValueKind::Date,
            Self::Text | Self::String => ValueKind::Text,
            Self::Binary => ValueKind::Binary,
            Self::Boolean => ValueKind::Boolean,
        }
    }

    /// Returns true for integer, float and decimal.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }

    /// Returns true for text and string.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::String)
    }

    /// Returns true for datetime, timestamp, time and date.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(
            self,
            Self::DateTime | Self::Timestamp | Self::Time | Self::Date
        )
    }

    /// Returns true for binary.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Binary)
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown abstract type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown abstract type: {0}")]
pub struct UnknownAbstractType(pub String);

impl FromStr for AbstractType {
    type Err = UnknownAbstractType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| UnknownAbstractType(s.to_string()))
    }
}

/// The in-memory representation a cast produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `i64`.
    Integer,
    /// `f64`.
    Float,
    /// `BigDecimal`.
    Decimal,
    /// `NaiveDateTime`.
    DateTime,
    /// `NaiveDate`.
    Date,
    /// `String`.
    Text,
    /// `Vec<u8>`.
    Binary,
    /// `bool`.
    Boolean,
}
