//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Constraint`], [`ConstraintExt`], [`FromValue`], [`ToValue`]
//! - **Values**: [`Value`], [`Kind`], and the [`Record`] accessor contract
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConstraintError`]
//! - **Groups**: [`Groups`], [`GroupPolicy`]
//!
//! # Architecture
//!
//! ## 1. Dynamic input
//!
//! Constraints receive a [`Value`] rather than a concrete Rust type, so one
//! constraint list can cover every field of a record:
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! assert!(length(5, 10).validate_any("example").is_ok());
//! assert!(length(5, 10).validate_any(42).is_err()); // type_mismatch, not a panic
//! ```
//!
//! ## 2. Lookup by name
//!
//! Field and getter constraints read through [`Record`], which replaces
//! runtime reflection with an explicit accessor table.
//!
//! ## 3. Rich error information
//!
//! ```rust
//! use fieldcheck_validator::foundation::ValidationError;
//!
//! let error = ValidationError::new("min_length", "Too short")
//!     .with_field("Name")
//!     .with_owner("Person")
//!     .with_param("min", "5");
//! ```

// Module declarations
pub mod error;
pub mod groups;
pub mod record;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use error::{ConstraintError, Params, ValidationError, ValidationErrors};
pub use groups::{GroupPolicy, Groups};
pub use record::Record;
pub use traits::{Constraint, ConstraintExt};
pub use value::{FromValue, Kind, ToValue, Value};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs several constraints against one value and collects every failure.
///
/// Unlike a validator run, groups are not consulted.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::foundation::{validate_with_all, Value};
/// use fieldcheck_validator::prelude::*;
///
/// let constraints: [&dyn Constraint; 2] = [&not_blank(), &length(3, 10)];
/// let errors = validate_with_all(&Value::from("ab"), &constraints);
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_with_all(value: &Value<'_>, constraints: &[&dyn Constraint]) -> ValidationErrors {
    constraints
        .iter()
        .filter_map(|constraint| constraint.validate(value).err())
        .collect()
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
