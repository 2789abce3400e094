//! Error types for validation failures
//!
//! [`ValidationError`] is the value returned by every constraint. All string
//! fields use `Cow<'static, str>` so the common case of static codes and
//! messages does not allocate. [`ConstraintError`] covers the few places where
//! building a constraint or loading configuration can fail.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::Value;

/// Ordered key-value parameters attached to an error (typically 0-2).
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "This value is too short")
///     .with_field("Name")
///     .with_owner("Person")
///     .with_param("min", "5");
///
/// assert_eq!(error.field.as_deref(), Some("Name"));
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "not_blank", "range_min", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Field or getter path that produced the error.
    ///
    /// Nested records produce dotted paths: "Address.City".
    pub field: Option<Cow<'static, str>>,

    /// Type name of the record that owns `field`.
    pub owner: Option<Cow<'static, str>>,

    /// Parameters for the message template.
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            owner: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the owning type name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_owner(mut self, owner: impl Into<Cow<'static, str>>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attributes the error to a member of `owner`.
    ///
    /// An error that already names a field came from a nested record, so the
    /// member is prepended to its path and the innermost owner is kept.
    #[must_use = "builder methods must be chained or built"]
    pub fn attributed_to(mut self, member: &str, owner: &'static str) -> Self {
        self.field = Some(match self.field.take() {
            Some(inner) => format!("{member}.{inner}").into(),
            None => member.to_owned().into(),
        });
        if self.owner.is_none() {
            self.owner = Some(Cow::Borrowed(owner));
        }
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Renders the error as JSON.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "owner": self.owner,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TYPE MISMATCH CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error for a value of the wrong kind.
    pub fn type_mismatch(
        expected: &'static str,
        message: impl Into<Cow<'static, str>>,
        actual: &Value<'_>,
    ) -> Self {
        Self::new("type_mismatch", message)
            .with_param("expected", expected)
            .with_param("actual", actual.kind().name())
    }

    /// A string constraint received something else.
    pub fn not_a_string(actual: &Value<'_>) -> Self {
        Self::type_mismatch("string", "Cannot validate this value (not a string)", actual)
    }

    /// A numeric constraint received something else.
    pub fn not_a_number(actual: &Value<'_>) -> Self {
        Self::type_mismatch("number", "This value should be a valid number", actual)
    }

    /// A boolean constraint received something else.
    pub fn not_a_boolean(actual: &Value<'_>) -> Self {
        Self::type_mismatch("bool", "This value should be a boolean", actual)
    }

    /// A collection constraint received something else.
    pub fn not_a_sequence(actual: &Value<'_>) -> Self {
        Self::type_mismatch("list", "This value should be a valid sequence", actual)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered failures of one validation run.
///
/// Empty means the target is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in registration order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Errors attributed to the given field path.
    pub fn for_field<'s>(&'s self, field: &'s str) -> impl Iterator<Item = &'s ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// The messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }

    /// Consumes the collection.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

/// Failure to build a constraint or load validator configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// The regular expression did not compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The configuration document did not parse.
    #[error("invalid validator configuration: {0}")]
    Config(#[from] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================
