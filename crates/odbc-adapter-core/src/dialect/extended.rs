//! Dialects derived from another dialect with overrides.

use std::sync::Arc;

use super::Dialect;
use crate::type_map::TypeRule;
use crate::value::{BooleanLiterals, ValueConventions};

/// Behavior overrides applied on top of a base dialect.
///
/// Unset fields fall back to the base.
#[derive(Debug, Clone, Default)]
pub struct DialectOverrides {
    /// Name of the derived dialect.
    pub name: Option<String>,
    /// Classification rules tried before the base dialect's rules.
    pub type_rules: Vec<TypeRule>,
    /// Boolean literal sets.
    pub boolean: Option<BooleanLiterals>,
    /// Formats for datetime and timestamp values.
    pub timestamp_formats: Option<Vec<String>>,
    /// Identifier quote character.
    pub identifier_quote: Option<char>,
    /// Whether integer columns truncate fractional text.
    pub truncate_fractional_integers: Option<bool>,
}

impl DialectOverrides {
    /// Creates an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dialect name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a classification rule.
    #[must_use]
    pub fn type_rule(mut self, rule: TypeRule) -> Self {
        self.type_rules.push(rule);
        self
    }

    /// Sets the boolean literal sets.
    #[must_use]
    pub fn boolean(mut self, literals: BooleanLiterals) -> Self {
        self.boolean = Some(literals);
        self
    }

    /// Sets the timestamp formats.
    #[must_use]
    pub fn timestamp_formats(mut self, formats: Vec<String>) -> Self {
        self.timestamp_formats = Some(formats);
        self
    }

    /// Sets the identifier quote character.
    #[must_use]
    pub const fn identifier_quote(mut self, quote: char) -> Self {
        self.identifier_quote = Some(quote);
        self
    }

    /// Sets integer truncation.
    #[must_use]
    pub const fn truncate_fractional_integers(mut self, truncate: bool) -> Self {
        self.truncate_fractional_integers = Some(truncate);
        self
    }
}

/// A dialect that applies [`DialectOverrides`] to a base dialect.
#[derive(Debug, Clone)]
pub struct ExtendedDialect {
    base: Arc<dyn Dialect>,
    overrides: DialectOverrides,
    rules: Vec<TypeRule>,
}

impl ExtendedDialect {
    /// Derives a dialect from `base`.
    #[must_use]
    pub fn new(base: Arc<dyn Dialect>, overrides: DialectOverrides) -> Self {
        let rules = overrides
            .type_rules
            .iter()
            .chain(base.type_rules())
            .cloned()
            .collect();
        Self {
            base,
            overrides,
            rules,
        }
    }

    /// Returns the base dialect.
    #[must_use]
    pub fn base(&self) -> &Arc<dyn Dialect> {
        &self.base
    }

    /// Returns the overrides.
    #[must_use]
    pub const fn overrides(&self) -> &DialectOverrides {
        &self.overrides
    }
}

impl Dialect for ExtendedDialect {
    fn name(&self) -> &str {
        self.overrides
            .name
            .as_deref()
            .unwrap_or_else(|| self.base.name())
    }

    fn type_rules(&self) -> &[TypeRule] {
        &self.rules
    }

    fn conventions(&self) -> ValueConventions {
        let mut conventions = self.base.conventions();
        if let Some(boolean) = &self.overrides.boolean {
            conventions.boolean = boolean.clone();
        }
        if let Some(formats) = &self.overrides.timestamp_formats {
            conventions.timestamp_formats.clone_from(formats);
        }
        if let Some(truncate) = self.overrides.truncate_fractional_integers {
            conventions.truncate_fractional_integers = truncate;
        }
        conventions
    }

    fn identifier_quote(&self) -> char {
        self.overrides
            .identifier_quote
            .unwrap_or_else(|| self.base.identifier_quote())
    }

    fn normalize_default(&self, raw: &str) -> Option<String> {
        self.base.normalize_default(raw)
    }
}
