//! License data structures and SPDX expression handling.
//!
//! Uses the `spdx` crate for SPDX expression validation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// License expression following SPDX license expression syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseExpression {
    /// The raw license expression string
    pub expression: String,
    /// Whether this is a valid SPDX expression
    pub is_valid_spdx: bool,
}

impl LicenseExpression {
    /// Create a new license expression
    pub fn new(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let is_valid_spdx = Self::validate_spdx(&expression);
        Self {
            expression,
            is_valid_spdx,
        }
    }

    /// Validate an SPDX expression using the spdx crate.
    ///
    /// Uses lax parsing mode to accept common non-standard expressions
    /// (e.g., "Apache2" instead of "Apache-2.0", "/" instead of "OR").
    fn validate_spdx(expr: &str) -> bool {
        if expr.is_empty() || is_no_assertion(expr) {
            return false;
        }
        spdx::Expression::parse_mode(expr, spdx::ParseMode::LAX).is_ok()
    }

    /// True when the expression carries information: non-empty and not a
    /// `NOASSERTION`/`NONE` placeholder.
    #[must_use]
    pub fn is_asserted(&self) -> bool {
        !self.expression.trim().is_empty() && !is_no_assertion(&self.expression)
    }
}

/// `NOASSERTION` and `NONE` placeholders used by SPDX producers.
#[must_use]
pub fn is_no_assertion(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.eq_ignore_ascii_case("NOASSERTION") || trimmed.eq_ignore_ascii_case("NONE")
}

impl fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl Serialize for LicenseExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.expression)
    }
}

impl<'de> Deserialize<'de> for LicenseExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expression = String::deserialize(deserializer)?;
        Ok(Self::new(expression))
    }
}
