//! Custom per-column value decoding.
//!
//! A column that carries a [`ColumnCoder`] hands every non-null raw value
//! to it instead of using the built-in casts.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CastError;
use crate::value::Value;

/// Decodes raw column text into a value.
pub trait ColumnCoder: Send + Sync + fmt::Debug {
    /// Returns the coder name, used in error messages.
    fn name(&self) -> &str;

    /// Decodes one raw value.
    ///
    /// # Errors
    ///
    /// Returns a [`CastError`] if the text is not valid for this coder.
    fn load(&self, raw: &str) -> Result<Value, CastError>;
}

/// Decodes Base64 text into binary values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Coder;

impl ColumnCoder for Base64Coder {
    fn name(&self) -> &str {
        "base64"
    }

    fn load(&self, raw: &str) -> Result<Value, CastError> {
        STANDARD
            .decode(raw.trim())
            .map(Value::Binary)
            .map_err(|e| CastError::new(self.name(), raw, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_coder() {
        assert_eq!(
            Base64Coder.load("aGVsbG8="),
            Ok(Value::Binary(b"hello".to_vec()))
        );
        let err = Base64Coder.load("not base64!").unwrap_err();
        assert_eq!(err.target, "base64");
    }
}
