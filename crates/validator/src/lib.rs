//! # fieldcheck-validator
//!
//! Struct-field validation with named, composable constraints and
//! validation groups.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//! use fieldcheck_validator::record;
//!
//! struct Person {
//!     name: String,
//!     is_married: bool,
//!     age: u32,
//! }
//!
//! impl Person {
//!     fn age(&self) -> u32 {
//!         self.age
//!     }
//! }
//!
//! record! {
//!     Person {
//!         fields { "Name" => name, "IsMarried" => is_married }
//!         getters { "Age" => age }
//!     }
//! }
//!
//! impl LoadMetadata for Person {
//!     fn load_validator_metadata(&self, metadata: &mut Metadata) {
//!         metadata
//!             .add_field_constraint("Name", not_blank().in_group("group1"))
//!             .add_field_constraint("IsMarried", is_true().in_group("group2"))
//!             .add_getter_constraint("Age", greater_than(15.0).with_groups(["group1", "group2"]));
//!     }
//! }
//!
//! let person = Person { name: "Mike".into(), is_married: false, age: 12 };
//! let errors = Validator::new().validate(&person);
//! assert_eq!(
//!     errors.messages(),
//!     ["This value should be true", "This value should be greater than 15"]
//! );
//! ```
//!
//! ## Creating Constraints
//!
//! Use the [`constraint!`] macro for zero-boilerplate constraints,
//! or implement [`Constraint`](foundation::Constraint) manually for complex cases.
//!
//! ## Built-in Constraints
//!
//! - **Presence**: [`NotBlank`](validators::NotBlank), [`Blank`](validators::Blank),
//!   [`NotNil`](validators::NotNil), [`Nil`](validators::Nil)
//! - **Logical**: [`IsTrue`](validators::IsTrue), [`IsFalse`](validators::IsFalse),
//!   [`OfType`](validators::OfType)
//! - **String**: [`Length`](validators::Length), [`Email`](validators::Email),
//!   [`Url`](validators::Url), [`Regexp`](validators::Regexp)
//! - **Numeric**: [`Range`](validators::Range), [`LessThan`](validators::LessThan),
//!   [`LessThanOrEqual`](validators::LessThanOrEqual),
//!   [`GreaterThan`](validators::GreaterThan),
//!   [`GreaterThanOrEqual`](validators::GreaterThanOrEqual)
//! - **Values**: [`EqualTo`](validators::EqualTo), [`NotEqualTo`](validators::NotEqualTo),
//!   [`Choice`](validators::Choice)
//! - **Collection**: [`Count`](validators::Count)

// ValidationError is returned by value from every constraint; boxing it would
// add an allocation to each failing check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod validator;
pub mod validators;
