//! String content validators
//!
//! Validators for checking string content and patterns.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{
    Constraint, ConstraintError, FromValue, Groups, ValidationError, Value,
};

/// `local@domain.tld`: one `@`, no whitespace, a dot in the domain part.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::constraint! {
    /// Validates email shape.
    ///
    /// This is a shape check only; deliverability is not verified.
    pub Email for &str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::new("email", "This value is not a valid email address") }
    fn email();
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Validates that a string matches (or, inverted, does not match) a pattern.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let digits = Regexp::pattern(r"^\d+$").unwrap();
/// assert!(digits.validate_any("123").is_ok());
///
/// let no_digits = Regexp::pattern(r"\d").unwrap().with_match(false);
/// assert!(no_digits.validate_any("abc").is_ok());
/// assert!(no_digits.validate_any("a1c").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Regexp {
    pattern: Regex,
    expect_match: bool,
    groups: Groups,
}

impl Regexp {
    /// Wraps an already compiled pattern. The value must match.
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            expect_match: true,
            groups: Groups::new(),
        }
    }

    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Pattern`] if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, ConstraintError> {
        Ok(Self::new(Regex::new(pattern)?))
    }

    /// Sets whether the value must match (`true`) or must not match (`false`).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_match(mut self, expect_match: bool) -> Self {
        self.expect_match = expect_match;
        self
    }

    /// The compiled pattern.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.pattern
    }

    /// Whether the value must match.
    #[must_use]
    pub fn expect_match(&self) -> bool {
        self.expect_match
    }
}

impl Constraint for Regexp {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        let input = <&str>::from_value(value)?;
        if self.pattern.is_match(input) == self.expect_match {
            Ok(())
        } else {
            Err(ValidationError::new("regexp", "This value is not valid")
                .with_param("pattern", self.pattern.as_str().to_owned()))
        }
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Compiles `pattern` into a [`Regexp`] constraint.
///
/// # Errors
///
/// Returns [`ConstraintError::Pattern`] if the pattern does not compile.
pub fn regexp(pattern: &str) -> Result<Regexp, ConstraintError> {
    Regexp::pattern(pattern)
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates that a string parses as an absolute URL.
///
/// With no protocols configured any scheme is accepted. Otherwise the scheme
/// must equal one of the configured protocols.
#[derive(Debug, Clone, Default)]
pub struct Url {
    protocols: Vec<Cow<'static, str>>,
    groups: Groups,
}

impl Url {
    /// Accepts any scheme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the accepted schemes.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.protocols = protocols.into_iter().map(Into::into).collect();
        self
    }

    /// The accepted schemes; empty means any.
    #[must_use]
    pub fn protocols(&self) -> &[Cow<'static, str>] {
        &self.protocols
    }

    fn invalid() -> ValidationError {
        ValidationError::new("url", "This value is not a valid URL.")
    }
}

impl Constraint for Url {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        let input = <&str>::from_value(value)?;
        let parsed = url::Url::parse(input).map_err(|_| Self::invalid())?;

        if self.protocols.is_empty() || self.protocols.iter().any(|p| p == parsed.scheme()) {
            Ok(())
        } else {
            Err(Self::invalid().with_param("scheme", parsed.scheme().to_owned()))
        }
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`Url`] constraint accepting any scheme.
#[must_use]
pub fn url() -> Url {
    Url::new()
}

// ============================================================================
// TESTS
// ============================================================================
