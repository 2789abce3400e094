//! Nil / not-nil checks
//!
//! These accept every kind of value: they only ask whether it is present.

use crate::foundation::{Value, ValidationError};

crate::constraint! {
    /// Passes iff the value is present.
    pub NotNil for &Value<'_>;
    rule(input) { !input.is_nil() }
    error(input) { ValidationError::new("not_nil", "This value should not be nil") }
    fn not_nil();
}

crate::constraint! {
    /// Passes iff the value is [`Value::Nil`].
    pub Nil for &Value<'_>;
    rule(input) { input.is_nil() }
    error(input) {
        ValidationError::new("nil", "This value should be nil")
            .with_param("actual", input.kind().name())
    }
    fn nil();
}
