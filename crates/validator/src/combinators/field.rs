//! FIELD combinator - validates a named field of a record
//!
//! The wrapper reads the field through [`Record::field`] and hands the value
//! to the inner constraint. Failures are attributed to the field and the
//! record's type name.

use std::borrow::Cow;

use crate::combinators::target_record;
use crate::foundation::{Constraint, Groups, ValidationError, Value};

// ============================================================================
// FIELD CONSTRAINT
// ============================================================================

/// Validates one field of a record.
///
/// # Panics
///
/// Validating anything other than [`Value::Record`], or a record without the
/// named field, is a programmer error: it is logged through `tracing` and
/// then panics.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::combinators::FieldConstraint;
/// use fieldcheck_validator::foundation::{Record, Value};
/// use fieldcheck_validator::prelude::*;
///
/// struct Person {
///     name: String,
/// }
///
/// impl Record for Person {
///     fn type_name(&self) -> &'static str {
///         "Person"
///     }
///
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         (name == "Name").then(|| Value::from(&self.name))
///     }
/// }
///
/// let person = Person { name: String::new() };
/// let err = FieldConstraint::new("Name", not_blank())
///     .validate(&Value::record(&person))
///     .unwrap_err();
/// assert_eq!(err.field.as_deref(), Some("Name"));
/// assert_eq!(err.owner.as_deref(), Some("Person"));
/// ```
#[derive(Debug, Clone)]
pub struct FieldConstraint<C> {
    name: Cow<'static, str>,
    inner: C,
    groups: Groups,
}

impl<C: Constraint> FieldConstraint<C> {
    /// Wraps `inner`; the wrapper starts with the inner constraint's labels.
    pub fn new(name: impl Into<Cow<'static, str>>, inner: C) -> Self {
        let groups = inner.groups().clone();
        Self {
            name: name.into(),
            inner,
            groups,
        }
    }

    /// Returns the field name.
    pub fn field_name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the inner constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the field name and inner constraint.
    pub fn into_parts(self) -> (Cow<'static, str>, C) {
        (self.name, self.inner)
    }
}

impl<C: Constraint> Constraint for FieldConstraint<C> {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        let record = target_record(value, "field", &self.name);
        let Some(field) = record.field(&self.name) else {
            tracing::error!(
                field = %self.name,
                record = record.type_name(),
                "record has no field with this name"
            );
            panic!("{} has no field named `{}`", record.type_name(), self.name);
        };

        self.inner
            .validate(&field)
            .map_err(|error| error.attributed_to(&self.name, record.type_name()))
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`FieldConstraint`].
pub fn field<C: Constraint>(name: impl Into<Cow<'static, str>>, inner: C) -> FieldConstraint<C> {
    FieldConstraint::new(name, inner)
}

// ============================================================================
// TESTS
// ============================================================================
