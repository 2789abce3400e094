//! Collection size validator

use crate::foundation::{Constraint, Groups, ValidationError, Value};
use crate::validators::length::Bound;

/// Validates the element count of a list, with the same exact/min/max rule
/// as [`Length`](crate::validators::Length).
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// assert!(count(1, 3).validate_any(vec![1, 2]).is_ok());
/// assert!(count(2, 2).validate_any(vec![1]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Count {
    /// Minimum element count, inclusive.
    pub min: usize,
    /// Maximum element count, inclusive.
    pub max: usize,
    groups: Groups,
}

impl Count {
    /// Creates the constraint.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            groups: Groups::new(),
        }
    }
}

impl Constraint for Count {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        let items = value
            .as_list()
            .ok_or_else(|| ValidationError::not_a_sequence(value))?;
        let actual = items.len();

        let error = match Bound::check(actual, self.min, self.max) {
            None => return Ok(()),
            Some(Bound::Exact) => ValidationError::new(
                "exact_count",
                format!("This collection should contain exactly {} elements", self.min),
            )
            .with_param("expected", self.min.to_string()),
            Some(Bound::Min) => ValidationError::new(
                "min_count",
                format!("This collection should contain {} elements or more", self.min),
            )
            .with_param("min", self.min.to_string()),
            Some(Bound::Max) => ValidationError::new(
                "max_count",
                format!("This collection should contain {} elements or less", self.max),
            )
            .with_param("max", self.max.to_string()),
        };
        Err(error.with_param("actual", actual.to_string()))
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`Count`] constraint.
#[must_use]
pub fn count(min: usize, max: usize) -> Count {
    Count::new(min, max)
}
