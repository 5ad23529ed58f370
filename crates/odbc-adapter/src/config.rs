//! Declarative dialect registrations.
//!
//! Integrators can add vendor support without code by listing extra
//! dialects in a JSON file:
//!
//! ```json
//! {
//!   "dialects": [
//!     {
//!       "pattern": "cockroach",
//!       "base": "postgresql",
//!       "name": "cockroachdb",
//!       "type_rules": [{ "pattern": "^string$", "type": "string" }],
//!       "true_literals": ["t"],
//!       "false_literals": ["f"]
//!     }
//!   ]
//! }
//! ```
//!
//! Entries are registered in file order on top of the built-in dialects,
//! so a later entry wins over an earlier one for the same product name.

use std::path::Path;

use odbc_adapter_core::{
    AbstractType, BooleanLiterals, BuiltinDialect, Dialect, DialectOverrides, DialectRegistry,
    TypeRule,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, Result};

/// Top-level adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Extra dialect registrations.
    #[serde(default)]
    pub dialects: Vec<DialectEntry>,
}

/// One dialect registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectEntry {
    /// Case-insensitive regex matched against the product name.
    pub pattern: String,
    /// Built-in dialect to derive from.
    #[serde(default = "default_base")]
    pub base: String,
    /// Name of the derived dialect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Classification rules tried before the base dialect's rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_rules: Vec<TypeRuleEntry>,
    /// Literals read as true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_literals: Option<Vec<String>>,
    /// Literals read as false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub false_literals: Option<Vec<String>>,
    /// `chrono` formats for datetime and timestamp values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_formats: Option<Vec<String>>,
    /// Identifier quote character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_quote: Option<char>,
    /// Whether integer columns truncate fractional text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate_fractional_integers: Option<bool>,
}

/// A classification rule in configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeRuleEntry {
    /// Case-insensitive regex matched against the native type string.
    pub pattern: String,
    /// Abstract type name, e.g. `"boolean"`.
    #[serde(rename = "type")]
    pub abstract_type: String,
}

fn default_base() -> String {
    String::from("generic")
}

impl AdapterConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Json`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading adapter config");
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Builds a registry holding the built-in dialects plus every entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown base dialect or
    /// abstract type, or a pattern that does not compile.
    pub fn registry(&self) -> Result<DialectRegistry> {
        let mut registry = DialectRegistry::with_builtins();
        for entry in &self.dialects {
            let base = entry
                .base
                .parse::<BuiltinDialect>()
                .map_err(|e| entry.invalid(e))?
                .handler();
            let overrides = entry.overrides(base.as_ref())?;
            registry = registry
                .register(&entry.pattern, base, overrides)
                .map_err(|e| entry.invalid(e))?;
            info!(
                pattern = %entry.pattern,
                base = %entry.base,
                "Registered dialect from config"
            );
        }
        Ok(registry)
    }
}

impl DialectEntry {
    fn invalid(&self, message: impl ToString) -> ConfigError {
        ConfigError::Invalid {
            pattern: self.pattern.clone(),
            message: message.to_string(),
        }
    }

    fn overrides(&self, base: &dyn Dialect) -> Result<DialectOverrides> {
        let mut overrides = DialectOverrides::new();
        overrides.name.clone_from(&self.name);
        overrides.timestamp_formats.clone_from(&self.timestamp_formats);
        overrides.identifier_quote = self.identifier_quote;
        overrides.truncate_fractional_integers = self.truncate_fractional_integers;

        for rule in &self.type_rules {
            let abstract_type = rule
                .abstract_type
                .parse::<AbstractType>()
                .map_err(|e| self.invalid(e))?;
            let rule = TypeRule::new(&rule.pattern, abstract_type).map_err(|e| self.invalid(e))?;
            overrides.type_rules.push(rule);
        }

        if self.true_literals.is_some() || self.false_literals.is_some() {
            let inherited = base.conventions().boolean;
            overrides.boolean = Some(BooleanLiterals {
                true_literals: self
                    .true_literals
                    .clone()
                    .unwrap_or(inherited.true_literals),
                false_literals: self
                    .false_literals
                    .clone()
                    .unwrap_or(inherited.false_literals),
            });
        }

        Ok(overrides)
    }
}
