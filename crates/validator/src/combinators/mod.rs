//! Wrapper constraints that read a member of a record
//!
//! [`FieldConstraint`] reads a field, [`GetterConstraint`] calls an accessor.
//! Both delegate to any inner [`Constraint`](crate::foundation::Constraint),
//! including another wrapper, so nested records validate by nesting wrappers.

pub mod field;
pub mod getter;

pub use field::{FieldConstraint, field};
pub use getter::{GetterConstraint, getter};

use crate::foundation::{Record, Value};

/// Unwraps the record a wrapper was pointed at.
///
/// Anything else is a programmer error, so this logs and panics.
fn target_record<'a>(value: &Value<'a>, member: &str, name: &str) -> &'a dyn Record {
    match value.as_record() {
        Some(record) => record,
        None => {
            tracing::error!(
                member,
                name,
                actual = %value.kind(),
                "wrapper constraint applied to a non-record value"
            );
            panic!("{member} constraint `{name}` expects a record, got {}", value.kind());
        }
    }
}
