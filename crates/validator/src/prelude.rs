//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that brings
//! in the traits, error types, constraints, wrappers and the validator.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let name = not_blank().with_groups(["create"]);
//! let age = range(18.0, 120.0);
//! assert!(name.validate_any("Ann").is_ok());
//! assert!(age.validate_any(12).is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    Constraint, ConstraintError, ConstraintExt, GroupPolicy, Groups, Kind, Record,
    ToValue, ValidationError, ValidationErrors, Value,
};

// ============================================================================
// VALIDATORS: All built-in constraints
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Field and getter wrappers
// ============================================================================

pub use crate::combinators::{FieldConstraint, GetterConstraint, field, getter};

// ============================================================================
// VALIDATOR: Metadata collection and runs
// ============================================================================

pub use crate::validator::{LoadMetadata, Metadata, Validator, ValidatorConfig};
