//! GETTER combinator - validates the result of a named accessor

use std::borrow::Cow;

use crate::combinators::target_record;
use crate::foundation::{Constraint, Groups, ValidationError, Value};

/// Validates the value returned by a record's named zero-argument accessor.
///
/// Attribution and the record precondition are the same as for
/// [`FieldConstraint`](crate::combinators::FieldConstraint), except the
/// member is looked up through [`Record::getter`](crate::foundation::Record::getter).
///
/// # Panics
///
/// Panics (after logging) on a non-record value or an unknown getter name.
#[derive(Debug, Clone)]
pub struct GetterConstraint<C> {
    name: Cow<'static, str>,
    inner: C,
    groups: Groups,
}

impl<C: Constraint> GetterConstraint<C> {
    /// Wraps `inner`; the wrapper starts with the inner constraint's labels.
    pub fn new(name: impl Into<Cow<'static, str>>, inner: C) -> Self {
        let groups = inner.groups().clone();
        Self {
            name: name.into(),
            inner,
            groups,
        }
    }

    /// Returns the getter name.
    pub fn getter_name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the inner constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Constraint> Constraint for GetterConstraint<C> {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        let record = target_record(value, "getter", &self.name);
        let Some(result) = record.getter(&self.name) else {
            tracing::error!(
                getter = %self.name,
                record = record.type_name(),
                "record has no getter with this name"
            );
            panic!("{} has no getter named `{}`", record.type_name(), self.name);
        };

        self.inner
            .validate(&result)
            .map_err(|error| error.attributed_to(&self.name, record.type_name()))
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`GetterConstraint`].
pub fn getter<C: Constraint>(name: impl Into<Cow<'static, str>>, inner: C) -> GetterConstraint<C> {
    GetterConstraint::new(name, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Record;
    use crate::validators::greater_than;

    struct Person {
        birth_year: u32,
    }

    impl Person {
        fn age(&self) -> u32 {
            2020 - self.birth_year
        }
    }

    impl Record for Person {
        fn type_name(&self) -> &'static str {
            "Person"
        }

        fn field(&self, _name: &str) -> Option<Value<'_>> {
            None
        }

        fn getter(&self, name: &str) -> Option<Value<'_>> {
            match name {
                "Age" => Some(Value::from(self.age())),
                _ => None,
            }
        }
    }

    #[test]
    fn test_getter_delegates() {
        let adult = Person { birth_year: 1990 };
        let child = Person { birth_year: 2010 };
        let constraint = getter("Age", greater_than(15.0));

        assert!(constraint.validate(&Value::record(&adult)).is_ok());

        let err = constraint.validate(&Value::record(&child)).unwrap_err();
        assert_eq!(err.message, "This value should be greater than 15");
        assert_eq!(err.field.as_deref(), Some("Age"));
        assert_eq!(err.owner.as_deref(), Some("Person"));
    }

    #[test]
    #[should_panic(expected = "has no getter named `Height`")]
    fn test_unknown_getter_panics() {
        let person = Person { birth_year: 1990 };
        let _ = getter("Height", greater_than(0.0)).validate(&Value::record(&person));
    }

    #[test]
    #[should_panic(expected = "expects a record")]
    fn test_non_record_panics() {
        let _ = getter("Age", greater_than(0.0)).validate(&Value::from(3));
    }
}
