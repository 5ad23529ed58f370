//! PostgreSQL dialect.

use std::sync::LazyLock;

use regex::Regex;

use super::{normalize_literal_default, Dialect};
use crate::type_map::TypeRule;
use crate::types::AbstractType;
use crate::value::{BooleanLiterals, ValueConventions};

static RULES: LazyLock<Vec<TypeRule>> = LazyLock::new(|| {
    [
        (r"^bool$", AbstractType::Boolean),
        (r"^bytea$", AbstractType::Binary),
        (r"serial", AbstractType::Integer),
        (r"^jsonb?$", AbstractType::Text),
    ]
    .into_iter()
    .map(|(pattern, t)| TypeRule::new(pattern, t).expect("valid postgresql rule"))
    .collect()
});

// Trailing `::type` cast, e.g. `'abc'::character varying`.
static CAST_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"::[A-Za-z_][A-Za-z0-9_ "\[\]]*$"#).expect("valid cast suffix regex")
});

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgreSqlDialect;

impl PostgreSqlDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgreSqlDialect {
    fn name(&self) -> &str {
        "postgresql"
    }

    fn type_rules(&self) -> &[TypeRule] {
        &RULES
    }

    fn conventions(&self) -> ValueConventions {
        ValueConventions {
            boolean: BooleanLiterals::new(["t", "true", "1"], ["f", "false", "0"]),
            ..ValueConventions::default()
        }
    }

    /// Strips `::type` casts and drops defaults computed by a function,
    /// such as `nextval('users_id_seq'::regclass)` or `now()`.
    fn normalize_default(&self, raw: &str) -> Option<String> {
        let mut text = raw.trim();
        while let Some(m) = CAST_SUFFIX.find(text) {
            text = text[..m.start()].trim_end();
        }
        if let Some(inner) = text.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            text = inner.trim();
        }
        if !text.starts_with('\'') && text.contains('(') {
            return None;
        }
        normalize_literal_default(text)
    }
}
