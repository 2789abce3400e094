//! Macros for declaring constraints and records with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`constraint!`]: Create a leaf constraint (struct + `Constraint` impl + factory fn)
//! - [`record!`]: Implement [`Record`](crate::foundation::Record) from a field/getter table
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck_validator::constraint;
//! use fieldcheck_validator::foundation::ValidationError;
//!
//! // Unit constraint (no parameters)
//! constraint! {
//!     /// Validates that a string is lowercase.
//!     pub Lowercase for &str;
//!     rule(input) { input.chars().all(|c| !c.is_uppercase()) }
//!     error(input) { ValidationError::new("lowercase", "This value should be lowercase") }
//!     fn lowercase();
//! }
//!
//! // Constraint with parameters
//! constraint! {
//!     pub MultipleOf { step: f64 } for f64;
//!     rule(self, input) { input % self.step == 0.0 }
//!     error(self, input) {
//!         ValidationError::new("multiple_of", format!("This value should be a multiple of {}", self.step))
//!     }
//!     fn multiple_of(step: f64);
//! }
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a complete leaf constraint: struct definition, `Constraint`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied and every struct gets a private
/// `groups` field. The input type after `for` is extracted from the incoming
/// [`Value`](crate::foundation::Value) through
/// [`FromValue`](crate::foundation::FromValue); a value of the wrong kind
/// becomes a `type_mismatch` error before `rule` runs. Use `&Value<'_>` to
/// receive the raw value.
///
/// # Variants
///
/// **Unit constraint**:
/// ```rust,ignore
/// constraint! {
///     pub NotBlank for &str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_blank", "This value should not be blank") }
///     fn not_blank();
/// }
/// ```
///
/// **Constraint with parameters** (auto `new` from all parameters):
/// ```rust,ignore
/// constraint! {
///     pub LessThan { threshold: f64 } for f64;
///     rule(self, input) { input < self.threshold }
///     error(self, input) { ValidationError::new("less_than", "too large") }
///     fn less_than(threshold: f64);
/// }
/// ```
#[macro_export]
macro_rules! constraint {
    // ── Variant 1: Unit constraint + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            groups: $crate::foundation::Groups,
        }

        impl $name {
            /// Creates the constraint with no group labels.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::foundation::Constraint for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                value: &$crate::foundation::Value<'_>,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                let $inp: $input = $crate::foundation::FromValue::from_value(value)?;
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn groups(&self) -> &$crate::foundation::Groups {
                &self.groups
            }

            fn groups_mut(&mut self) -> &mut $crate::foundation::Groups {
                &mut self.groups
            }
        }

        #[must_use]
        $vis fn $factory() -> $name {
            $name::new()
        }
    };

    // ── Variant 2: Constraint with parameters + auto new + factory fn ────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
            groups: $crate::foundation::Groups,
        }

        impl $name {
            /// Creates the constraint with no group labels.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self {
                    $($field,)+
                    groups: $crate::foundation::Groups::new(),
                }
            }
        }

        impl $crate::foundation::Constraint for $name {
            #[allow(unused_variables)]
            fn validate(
                &$self_,
                value: &$crate::foundation::Value<'_>,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                let $inp: $input = $crate::foundation::FromValue::from_value(value)?;
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn groups(&self) -> &$crate::foundation::Groups {
                &self.groups
            }

            fn groups_mut(&mut self) -> &mut $crate::foundation::Groups {
                &mut self.groups
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Implements [`Record`](crate::foundation::Record) from a table of names.
///
/// - `fields` map a name to a struct field converted with [`ToValue`](crate::foundation::ToValue).
/// - `records` map a name to a struct field that itself implements `Record`.
/// - `getters` map a name to a zero-argument method converted with `Value::from`.
///
/// Every section is optional, but present sections must appear in this order.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::record;
/// use fieldcheck_validator::foundation::Record;
///
/// struct Address {
///     city: String,
/// }
///
/// struct Person {
///     name: String,
///     address: Address,
///     age: u32,
/// }
///
/// impl Person {
///     fn age(&self) -> u32 {
///         self.age
///     }
/// }
///
/// record! { Address { fields { "City" => city } } }
/// record! {
///     Person {
///         fields { "Name" => name }
///         records { "Address" => address }
///         getters { "Age" => age }
///     }
/// }
///
/// let person = Person { name: "Ann".into(), address: Address { city: "Oslo".into() }, age: 40 };
/// assert_eq!(person.type_name(), "Person");
/// assert!(person.field("Name").is_some());
/// assert!(person.field("Age").is_none());
/// assert!(person.getter("Age").is_some());
/// ```
#[macro_export]
macro_rules! record {
    (
        $ty:ident {
            $(fields { $($fname:literal => $fmember:ident),* $(,)? })?
            $(records { $($rname:literal => $rmember:ident),* $(,)? })?
            $(getters { $($gname:literal => $gmethod:ident),* $(,)? })?
        }
    ) => {
        impl $crate::foundation::Record for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            #[allow(clippy::match_single_binding)]
            fn field(&self, name: &str) -> ::std::option::Option<$crate::foundation::Value<'_>> {
                match name {
                    $($($fname => Some($crate::foundation::ToValue::to_value(&self.$fmember)),)*)?
                    $($($rname => Some($crate::foundation::Value::Record(&self.$rmember)),)*)?
                    _ => None,
                }
            }

            #[allow(clippy::match_single_binding)]
            fn getter(&self, name: &str) -> ::std::option::Option<$crate::foundation::Value<'_>> {
                match name {
                    $($($gname => Some($crate::foundation::Value::from(self.$gmethod())),)*)?
                    _ => None,
                }
            }
        }
    };
}
