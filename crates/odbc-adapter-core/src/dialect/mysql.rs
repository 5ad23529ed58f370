//! MySQL dialect.

use std::sync::LazyLock;

use super::Dialect;
use crate::type_map::TypeRule;
use crate::types::AbstractType;
use crate::value::ValueConventions;

// `tinyint(1)` is how MySQL spells BOOLEAN.
static RULES: LazyLock<Vec<TypeRule>> = LazyLock::new(|| {
    vec![
        TypeRule::new(r"^tinyint\(1\)", AbstractType::Boolean).expect("valid mysql rule"),
        TypeRule::new(r"^bit(\(1\))?$", AbstractType::Boolean).expect("valid mysql rule"),
    ]
});

/// MySQL and MariaDB dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn type_rules(&self) -> &[TypeRule] {
        &RULES
    }

    fn conventions(&self) -> ValueConventions {
        ValueConventions {
            truncate_fractional_integers: true,
            ..ValueConventions::default()
        }
    }

    fn identifier_quote(&self) -> char {
        '`'
    }
}
