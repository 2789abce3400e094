//! Numeric range and comparison validators
//!
//! Every validator here accepts `Int`, `UInt` and `Float` values and compares
//! them as `f64`. Anything else, `NaN` included, is a `type_mismatch`.

use std::borrow::Cow;

use crate::foundation::{Constraint, FromValue, Groups, ValidationError, Value};

// ============================================================================
// RANGE
// ============================================================================

crate::constraint! {
    /// Validates that a number lies within `[min, max]`, inclusive at both ends.
    ///
    /// ```
    /// use fieldcheck_validator::prelude::*;
    ///
    /// assert!(range(10.0, 15.0).validate_any(10).is_ok());
    /// assert!(range(10.0, 15.0).validate_any(16).is_err());
    /// ```
    pub Range { min: f64, max: f64 } for f64;
    rule(self, input) { self.min <= input && input <= self.max }
    error(self, input) {
        if input < self.min {
            ValidationError::new("range_min", format!("This value should be {} or more", self.min))
                .with_param("min", self.min.to_string())
        } else {
            ValidationError::new("range_max", format!("This value should be {} or less", self.max))
                .with_param("max", self.max.to_string())
        }
    }
    fn range(min: f64, max: f64);
}

// ============================================================================
// COMPARISONS
// ============================================================================

crate::constraint! {
    /// Validates `value < threshold`.
    pub LessThan { threshold: f64 } for f64;
    rule(self, input) { input < self.threshold }
    error(self, input) {
        ValidationError::new("less_than", format!("This value should be less than {}", self.threshold))
            .with_param("threshold", self.threshold.to_string())
    }
    fn less_than(threshold: f64);
}

crate::constraint! {
    /// Validates `value <= threshold`.
    pub LessThanOrEqual { threshold: f64 } for f64;
    rule(self, input) { input <= self.threshold }
    error(self, input) {
        ValidationError::new(
            "less_than_or_equal",
            format!("This value should be less than or equal to {}", self.threshold),
        )
        .with_param("threshold", self.threshold.to_string())
    }
    fn less_than_or_equal(threshold: f64);
}

crate::constraint! {
    /// Validates `value > threshold`.
    pub GreaterThan { threshold: f64 } for f64;
    rule(self, input) { input > self.threshold }
    error(self, input) {
        ValidationError::new("greater_than", format!("This value should be greater than {}", self.threshold))
            .with_param("threshold", self.threshold.to_string())
    }
    fn greater_than(threshold: f64);
}

/// Default template for [`GreaterThanOrEqual`]; `{value}` is the threshold.
pub const GREATER_THAN_OR_EQUAL_MESSAGE: &str =
    "This value should be greater than or equal to {value}";

/// Validates `value >= threshold`, with an overridable message.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let adult = greater_than_or_equal(18.0).with_message("Must be at least {value} years old");
/// let err = adult.validate_any(17).unwrap_err();
/// assert_eq!(err.message, "Must be at least 18 years old");
/// ```
#[derive(Debug, Clone)]
pub struct GreaterThanOrEqual {
    threshold: f64,
    message: Cow<'static, str>,
    groups: Groups,
}

impl GreaterThanOrEqual {
    /// Creates the constraint with the default message.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            message: Cow::Borrowed(GREATER_THAN_OR_EQUAL_MESSAGE),
            groups: Groups::new(),
        }
    }

    /// Replaces the message template. `{value}` is substituted with the threshold.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the threshold.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The unsubstituted message template.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Constraint for GreaterThanOrEqual {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        let input = f64::from_value(value)?;
        if input >= self.threshold {
            return Ok(());
        }
        let threshold = self.threshold.to_string();
        Err(ValidationError::new(
            "greater_than_or_equal",
            self.message.replace("{value}", &threshold),
        )
        .with_param("threshold", threshold))
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`GreaterThanOrEqual`] constraint.
#[must_use]
pub fn greater_than_or_equal(threshold: f64) -> GreaterThanOrEqual {
    GreaterThanOrEqual::new(threshold)
}

// ============================================================================
// TESTS
// ============================================================================
