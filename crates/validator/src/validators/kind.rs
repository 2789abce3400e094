//! Dynamic type check

use crate::foundation::{Kind, Value, ValidationError};

crate::constraint! {
    /// Passes iff the value's [`Kind`] equals the configured one.
    ///
    /// ```
    /// use fieldcheck_validator::foundation::Kind;
    /// use fieldcheck_validator::prelude::*;
    ///
    /// assert!(of_type(Kind::UInt).validate_any(3_u8).is_ok());
    /// assert!(of_type(Kind::Int).validate_any(3_u8).is_err());
    /// ```
    pub OfType { kind: Kind } for &Value<'_>;
    rule(self, input) { input.kind() == self.kind }
    error(self, input) {
        ValidationError::new("of_type", format!("This value should be of type {}", self.kind))
            .with_param("expected", self.kind.name())
            .with_param("actual", input.kind().name())
    }
    fn of_type(kind: Kind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Constraint, Record};

    struct Person;

    impl Record for Person {
        fn type_name(&self) -> &'static str {
            "Person"
        }

        fn field(&self, _name: &str) -> Option<Value<'_>> {
            None
        }
    }

    #[test]
    fn test_scalar_kinds() {
        assert!(of_type(Kind::Str).validate_any("x").is_ok());
        assert!(of_type(Kind::Float).validate_any(1.0).is_ok());
        assert!(of_type(Kind::Nil).validate_any(None::<i32>).is_ok());

        let err = of_type(Kind::Bool).validate_any(1).unwrap_err();
        assert_eq!(err.message, "This value should be of type bool");
        assert_eq!(err.param("actual"), Some("int"));
    }

    #[test]
    fn test_record_kind_matches_type_name() {
        let person = Person;
        assert!(of_type(Kind::Record("Person")).validate(&Value::record(&person)).is_ok());
        assert!(of_type(Kind::Record("Address")).validate(&Value::record(&person)).is_err());
    }
}
