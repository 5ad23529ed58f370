//! Snowflake dialect.

use std::sync::LazyLock;

use super::Dialect;
use crate::type_map::TypeRule;
use crate::types::AbstractType;

// Semi-structured values arrive as JSON text.
static RULES: LazyLock<Vec<TypeRule>> = LazyLock::new(|| {
    vec![TypeRule::new(r"^(variant|object|array)$", AbstractType::Text)
        .expect("valid snowflake rule")]
});

/// Snowflake dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnowflakeDialect;

impl SnowflakeDialect {
    /// Creates a new Snowflake dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SnowflakeDialect {
    fn name(&self) -> &str {
        "snowflake"
    }

    fn type_rules(&self) -> &[TypeRule] {
        &RULES
    }
}
