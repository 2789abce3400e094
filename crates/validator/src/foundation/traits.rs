//! Core traits for the validation system
//!
//! This module defines the trait every constraint implements, plus the
//! builder-style extension trait that attaches group labels.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Groups, ValidationError, Value};

// ============================================================================
// CORE CONSTRAINT TRAIT
// ============================================================================

/// A rule that inspects a dynamic value and reports pass or fail.
///
/// Constraints are read-only once built and may be shared between threads.
/// A constraint that cannot check the kind of value it receives returns a
/// `type_mismatch` error instead of panicking.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Constraint, Groups, ValidationError, Value};
///
/// #[derive(Debug, Default)]
/// struct Even {
///     groups: Groups,
/// }
///
/// impl Constraint for Even {
///     fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
///         match value {
///             Value::Int(n) if n % 2 == 0 => Ok(()),
///             Value::Int(_) => Err(ValidationError::new("even", "This value should be even")),
///             other => Err(ValidationError::not_a_number(other)),
///         }
///     }
///
///     fn groups(&self) -> &Groups {
///         &self.groups
///     }
///
///     fn groups_mut(&mut self) -> &mut Groups {
///         &mut self.groups
///     }
/// }
///
/// assert!(Even::default().validate_any(4).is_ok());
/// assert!(Even::default().validate_any(3).is_err());
/// ```
pub trait Constraint: fmt::Debug + Send + Sync {
    /// Checks the value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value satisfies the constraint
    /// * `Err(ValidationError)` describing the failure otherwise
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError>;

    /// The group labels of this constraint.
    fn groups(&self) -> &Groups;

    /// Mutable access to the group labels, used by the builder methods.
    fn groups_mut(&mut self) -> &mut Groups;

    /// Validates anything convertible into a [`Value`].
    ///
    /// ```
    /// use fieldcheck_validator::prelude::*;
    ///
    /// assert!(not_blank().validate_any("john").is_ok());
    /// assert!(range(10.0, 15.0).validate_any(12_u8).is_ok());
    /// ```
    fn validate_any<'a, V>(&self, value: V) -> Result<(), ValidationError>
    where
        Self: Sized,
        V: Into<Value<'a>>,
    {
        self.validate(&value.into())
    }
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn groups(&self) -> &Groups {
        (**self).groups()
    }

    fn groups_mut(&mut self) -> &mut Groups {
        (**self).groups_mut()
    }
}

// ============================================================================
// CONSTRAINT EXTENSION TRAIT
// ============================================================================

/// Builder methods available on every constraint.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let name = not_blank().with_groups(["create", "update"]);
/// assert!(name.groups().contains("create"));
/// ```
pub trait ConstraintExt: Constraint + Sized {
    /// Replaces the group labels.
    fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        *self.groups_mut() = groups.into_iter().collect();
        self
    }

    /// Adds one group label.
    fn in_group(mut self, group: impl Into<Cow<'static, str>>) -> Self {
        self.groups_mut().insert(group);
        self
    }

    /// Erases the concrete type.
    fn boxed(self) -> Box<dyn Constraint>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

// Automatically implement ConstraintExt for all Constraint implementations
impl<C: Constraint> ConstraintExt for C {}

// ============================================================================
// TESTS
// ============================================================================
