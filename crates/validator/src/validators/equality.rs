//! Equality validators
//!
//! Comparison goes through [`Value`]'s equality: numbers by value across
//! numeric kinds, strings by content, records by identity.

use crate::foundation::{Constraint, Groups, ValidationError, Value};

// ============================================================================
// EQUAL TO
// ============================================================================

/// Passes iff the value equals the captured reference value.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// assert!(equal_to(3).validate_any(3.0).is_ok());
/// assert!(equal_to("yes").validate_any("no").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EqualTo {
    expected: Value<'static>,
    groups: Groups,
}

impl EqualTo {
    /// Captures the reference value.
    pub fn new(expected: impl Into<Value<'static>>) -> Self {
        Self {
            expected: expected.into(),
            groups: Groups::new(),
        }
    }

    /// The reference value.
    #[must_use]
    pub fn expected(&self) -> &Value<'static> {
        &self.expected
    }
}

impl Constraint for EqualTo {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        if *value == self.expected {
            Ok(())
        } else {
            Err(ValidationError::new(
                "equal_to",
                format!("This value should be equal to {}", self.expected),
            )
            .with_param("expected", self.expected.to_string()))
        }
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates an [`EqualTo`] constraint.
pub fn equal_to(expected: impl Into<Value<'static>>) -> EqualTo {
    EqualTo::new(expected)
}

// ============================================================================
// NOT EQUAL TO
// ============================================================================

/// Passes iff the value differs from the captured reference value.
#[derive(Debug, Clone)]
pub struct NotEqualTo {
    rejected: Value<'static>,
    groups: Groups,
}

impl NotEqualTo {
    /// Captures the reference value.
    pub fn new(rejected: impl Into<Value<'static>>) -> Self {
        Self {
            rejected: rejected.into(),
            groups: Groups::new(),
        }
    }

    /// The reference value.
    #[must_use]
    pub fn rejected(&self) -> &Value<'static> {
        &self.rejected
    }
}

impl Constraint for NotEqualTo {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        if *value == self.rejected {
            Err(ValidationError::new(
                "not_equal_to",
                format!("This value should not be equal to {}", self.rejected),
            )
            .with_param("rejected", self.rejected.to_string()))
        } else {
            Ok(())
        }
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`NotEqualTo`] constraint.
pub fn not_equal_to(rejected: impl Into<Value<'static>>) -> NotEqualTo {
    NotEqualTo::new(rejected)
}
