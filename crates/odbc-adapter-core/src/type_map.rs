//! Native SQL type-string parsing.
//!
//! Drivers report column types as free-form strings such as
//! `numeric(10,2)`, `VARCHAR(255)` or `timestamp_ntz`. The functions here
//! pull the limit, precision and scale out of such a string and reduce it
//! to an [`AbstractType`].
//!
//! Extraction never fails: a group that does not hold a usable number
//! simply yields `None`.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::types::AbstractType;

static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*)\)").expect("valid parenthesized group regex"));

static NUMERIC_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^(?:numeric|decimal|number)\((\d+)(?:,(\d+))?\)")
        .case_insensitive(true)
        .build()
        .expect("valid numeric family regex")
});

/// What a matching [`TypeRule`] classifies a type string as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    /// Always the given type.
    Fixed(AbstractType),
    /// Integer when the scale is explicitly zero, decimal otherwise.
    NumericByScale,
}

/// One entry of an ordered classification table.
#[derive(Debug, Clone)]
pub struct TypeRule {
    pattern: Regex,
    target: RuleTarget,
}

impl TypeRule {
    /// Creates a rule from a case-insensitive regex.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn new(pattern: &str, abstract_type: AbstractType) -> Result<Self, regex::Error> {
        Self::with_target(pattern, RuleTarget::Fixed(abstract_type))
    }

    /// Creates a rule with an explicit target.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn with_target(pattern: &str, target: RuleTarget) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern, target })
    }

    /// Returns the source text of the rule's pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns what the rule classifies as.
    #[must_use]
    pub const fn target(&self) -> RuleTarget {
        self.target
    }

    /// Applies the rule, returning the type if the pattern matches.
    #[must_use]
    pub fn apply(&self, sql_type: &str) -> Option<AbstractType> {
        if !self.pattern.is_match(sql_type) {
            return None;
        }
        Some(match self.target {
            RuleTarget::Fixed(t) => t,
            RuleTarget::NumericByScale => {
                if extract_scale(sql_type) == Some(0) {
                    AbstractType::Integer
                } else {
                    AbstractType::Decimal
                }
            }
        })
    }
}

// Order matters: `datetime` and `timestamp` both contain `time`, and
// `int` wins over everything that follows it.
static DEFAULT_RULES: LazyLock<Vec<TypeRule>> = LazyLock::new(|| {
    use AbstractType as T;
    use RuleTarget::{Fixed, NumericByScale};

    [
        ("int", Fixed(T::Integer)),
        ("float|double", Fixed(T::Float)),
        ("decimal|numeric|number", NumericByScale),
        ("datetime", Fixed(T::DateTime)),
        ("timestamp", Fixed(T::Timestamp)),
        ("time", Fixed(T::Time)),
        ("date", Fixed(T::Date)),
        ("clob|text", Fixed(T::Text)),
        ("blob|binary", Fixed(T::Binary)),
        ("char", Fixed(T::String)),
        ("boolean", Fixed(T::Boolean)),
    ]
    .into_iter()
    .map(|(pattern, target)| {
        TypeRule::with_target(pattern, target).expect("valid default type rule")
    })
    .collect()
});

/// Returns the default classification table.
#[must_use]
pub fn default_rules() -> &'static [TypeRule] {
    &DEFAULT_RULES
}

/// Classifies a type string with the default table.
#[must_use]
pub fn classify(sql_type: &str) -> Option<AbstractType> {
    classify_with(sql_type, &[])
}

/// Classifies a type string, trying `rules` before the default table.
///
/// The first matching rule wins. `None` means the type is unclassified.
#[must_use]
pub fn classify_with(sql_type: &str, rules: &[TypeRule]) -> Option<AbstractType> {
    rules
        .iter()
        .chain(DEFAULT_RULES.iter())
        .find_map(|rule| rule.apply(sql_type))
}

/// Extracts the limit from the first parenthesized group.
///
/// Only the leading digits of the group count, so `numeric(10,2)` has a
/// limit of 10 and `enum('a','b')` has none.
#[must_use]
pub fn extract_limit(sql_type: &str) -> Option<u32> {
    let content = PAREN_GROUP.captures(sql_type)?.get(1)?.as_str().trim_start();
    let end = content
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(content.len());
    content[..end].parse().ok()
}

/// Extracts the precision of a `numeric`, `decimal` or `number` type.
///
/// The type must be written without whitespace, as `numeric(10,2)`.
#[must_use]
pub fn extract_precision(sql_type: &str) -> Option<u32> {
    NUMERIC_FAMILY
        .captures(sql_type)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Extracts the scale of a `numeric`, `decimal` or `number` type.
///
/// A precision without a scale component means a scale of zero.
#[must_use]
pub fn extract_scale(sql_type: &str) -> Option<u32> {
    let caps = NUMERIC_FAMILY.captures(sql_type)?;
    match caps.get(2) {
        Some(scale) => scale.as_str().parse().ok(),
        None => Some(0),
    }
}
