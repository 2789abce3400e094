//! The accessor contract that field and getter constraints read through.

use crate::foundation::Value;

/// A struct-like value whose members can be looked up by name.
///
/// Implement it by hand or generate it with [`record!`](crate::record).
/// Returning `None` means the record has no member with that name; the field
/// and getter constraints treat that as a registration bug and panic.
///
/// `Sync` is required so constraints that capture values stay shareable
/// across threads.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Record, Value};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Record for Person {
///     fn type_name(&self) -> &'static str {
///         "Person"
///     }
///
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "Name" => Some(Value::from(&self.name)),
///             _ => None,
///         }
///     }
///
///     fn getter(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "Age" => Some(Value::from(self.age)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record: Sync {
    /// Name of the owning type, used for error attribution.
    fn type_name(&self) -> &'static str;

    /// Reads the current value of a named field.
    fn field(&self, name: &str) -> Option<Value<'_>>;

    /// Invokes a named zero-argument accessor.
    fn getter(&self, _name: &str) -> Option<Value<'_>> {
        None
    }
}
