//! Record validation driven by self-declared metadata
//!
//! A target type lists its own constraints in
//! [`LoadMetadata::load_validator_metadata`]. [`Validator`] collects them into
//! a fresh [`Metadata`] on every call, filters them by group, runs them
//! against the target and gathers every failure.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//! use fieldcheck_validator::record;
//!
//! struct Signup {
//!     email: String,
//!     password: String,
//! }
//!
//! record! { Signup { fields { "Email" => email, "Password" => password } } }
//!
//! impl LoadMetadata for Signup {
//!     fn load_validator_metadata(&self, metadata: &mut Metadata) {
//!         metadata
//!             .add_field_constraint("Email", email())
//!             .add_field_constraint("Password", length(8, 64));
//!     }
//! }
//!
//! let signup = Signup { email: "ann@example.com".into(), password: "short".into() };
//! let errors = Validator::new().validate(&signup);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.errors()[0].field.as_deref(), Some("Password"));
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::combinators::{FieldConstraint, GetterConstraint};
use crate::foundation::{
    Constraint, ConstraintError, GroupPolicy, Record, ValidationError, ValidationErrors, Value,
};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Name of the implicit group under [`GroupPolicy::DefaultGroupOnly`].
pub const DEFAULT_GROUP: &str = "Default";

/// Validator configuration.
///
/// Every field has a default, so a partial document is enough:
///
/// ```
/// use fieldcheck_validator::foundation::GroupPolicy;
/// use fieldcheck_validator::validator::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json(r#"{ "group_policy": "default_group_only" }"#).unwrap();
/// assert_eq!(config.group_policy, GroupPolicy::DefaultGroupOnly);
/// assert_eq!(config.default_group, "Default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How ungrouped constraints behave when groups are requested.
    pub group_policy: GroupPolicy,

    /// Group that ungrouped constraints belong to under
    /// [`GroupPolicy::DefaultGroupOnly`].
    pub default_group: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            group_policy: GroupPolicy::default(),
            default_group: DEFAULT_GROUP.to_owned(),
        }
    }
}

impl ValidatorConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Config`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConstraintError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the group policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group_policy(mut self, group_policy: GroupPolicy) -> Self {
        self.group_policy = group_policy;
        self
    }

    /// Sets the default group name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_group(mut self, default_group: impl Into<String>) -> Self {
        self.default_group = default_group.into();
        self
    }
}

// ============================================================================
// METADATA
// ============================================================================

/// The ordered constraints a target registered for one validation run.
#[derive(Debug, Default)]
pub struct Metadata {
    constraints: Vec<Box<dyn Constraint>>,
}

impl Metadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constraint` against the named field.
    pub fn add_field_constraint<C>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        constraint: C,
    ) -> &mut Self
    where
        C: Constraint + 'static,
    {
        self.constraints
            .push(Box::new(FieldConstraint::new(name, constraint)));
        self
    }

    /// Registers `constraint` against the named getter.
    pub fn add_getter_constraint<C>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        constraint: C,
    ) -> &mut Self
    where
        C: Constraint + 'static,
    {
        self.constraints
            .push(Box::new(GetterConstraint::new(name, constraint)));
        self
    }

    /// Registers a constraint that receives the whole record.
    pub fn add_constraint<C>(&mut self, constraint: C) -> &mut Self
    where
        C: Constraint + 'static,
    {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Number of registered constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterates over the constraints in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Constraint> {
        self.constraints.iter().map(AsRef::as_ref)
    }
}

/// A record that declares its own constraints.
pub trait LoadMetadata: Record {
    /// Registers this type's constraints, in the order they should run.
    fn load_validator_metadata(&self, metadata: &mut Metadata);
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Runs registered constraints against a record.
///
/// Holds no state between calls; a single validator can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from a configuration.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Runs every registered constraint.
    #[must_use = "validation errors must be inspected"]
    pub fn validate<T: LoadMetadata>(&self, target: &T) -> ValidationErrors {
        self.validate_groups(target, &[])
    }

    /// Runs the constraints active for `groups`.
    ///
    /// An empty `groups` slice runs everything.
    #[must_use = "validation errors must be inspected"]
    pub fn validate_groups<T: LoadMetadata>(&self, target: &T, groups: &[&str]) -> ValidationErrors {
        let mut metadata = Metadata::new();
        target.load_validator_metadata(&mut metadata);
        self.validate_record(target, &metadata, groups)
    }

    /// Runs caller-built metadata against any record.
    #[must_use = "validation errors must be inspected"]
    pub fn validate_record(
        &self,
        record: &dyn Record,
        metadata: &Metadata,
        groups: &[&str],
    ) -> ValidationErrors {
        let target = Value::record(record);
        let mut errors = ValidationErrors::new();
        let mut ran = 0_usize;

        for (index, constraint) in metadata.iter().enumerate() {
            if !self.is_active(constraint, groups) {
                tracing::trace!(
                    record = record.type_name(),
                    index,
                    ?groups,
                    "constraint skipped by group filter"
                );
                continue;
            }
            ran += 1;
            if let Err(error) = constraint.validate(&target) {
                errors.add(owned_by(error, record.type_name()));
            }
        }

        tracing::debug!(
            record = record.type_name(),
            ran,
            skipped = metadata.len() - ran,
            failed = errors.len(),
            "validation finished"
        );
        errors
    }

    fn is_active(&self, constraint: &dyn Constraint, groups: &[&str]) -> bool {
        self.config
            .group_policy
            .is_active(constraint.groups(), groups, &self.config.default_group)
    }
}

/// Class-level constraints see the whole record; give their errors an owner.
fn owned_by(error: ValidationError, owner: &'static str) -> ValidationError {
    if error.owner.is_some() {
        error
    } else {
        error.with_owner(owner)
    }
}

// ============================================================================
// TESTS
// ============================================================================
