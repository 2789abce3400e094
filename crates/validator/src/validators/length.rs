//! String length validator
//!
//! By default, length is measured in Unicode scalar values (chars).
//! Use [`Length::bytes`] for byte-length counting when the input is known to
//! be ASCII.

use crate::foundation::{Constraint, FromValue, Groups, ValidationError, Value};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

/// Which side of an inclusive `[min, max]` window a count fell outside.
///
/// `min == max` asks for an exact count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Exact,
    Min,
    Max,
}

impl Bound {
    pub(crate) fn check(count: usize, min: usize, max: usize) -> Option<Self> {
        if min == max {
            (count != min).then_some(Bound::Exact)
        } else if count < min {
            Some(Bound::Min)
        } else if count > max {
            Some(Bound::Max)
        } else {
            None
        }
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Validates that a string's length lies within `[min, max]`.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// assert!(length(5, 10).validate_any("example").is_ok());
/// assert!(length(7, 7).validate_any("examples").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Length {
    /// Minimum length, inclusive.
    pub min: usize,
    /// Maximum length, inclusive.
    pub max: usize,
    /// How length is counted.
    pub mode: LengthMode,
    groups: Groups,
}

impl Length {
    /// Counts chars.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            mode: LengthMode::Chars,
            groups: Groups::new(),
        }
    }

    /// Counts bytes.
    #[must_use]
    pub fn bytes(min: usize, max: usize) -> Self {
        Self {
            mode: LengthMode::Bytes,
            ..Self::new(min, max)
        }
    }
}

impl Constraint for Length {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        let input = <&str>::from_value(value)?;
        let actual = self.mode.measure(input);

        let error = match Bound::check(actual, self.min, self.max) {
            None => return Ok(()),
            Some(Bound::Exact) => ValidationError::new(
                "exact_length",
                format!("This value should have exactly {} characters", self.min),
            )
            .with_param("expected", self.min.to_string()),
            Some(Bound::Min) => ValidationError::new(
                "min_length",
                format!(
                    "This value is too short. It should have {} characters or more.",
                    self.min
                ),
            )
            .with_param("min", self.min.to_string()),
            Some(Bound::Max) => ValidationError::new(
                "max_length",
                format!(
                    "This value is too long. It should have {} characters or less",
                    self.max
                ),
            )
            .with_param("max", self.max.to_string()),
        };
        Err(error.with_param("actual", actual.to_string()))
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`Length`] constraint counting chars.
#[must_use]
pub fn length(min: usize, max: usize) -> Length {
    Length::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 10, "example", true)]
    #[case(7, 7, "example", true)]
    #[case(7, 7, "examples", false)]
    #[case(4, 6, "example", false)]
    #[case(0, 3, "", true)]
    fn test_length(#[case] min: usize, #[case] max: usize, #[case] input: &str, #[case] valid: bool) {
        assert_eq!(length(min, max).validate_any(input).is_ok(), valid);
    }

    #[test]
    fn test_codes_and_messages() {
        let exact = length(7, 7).validate_any("examples").unwrap_err();
        assert_eq!(exact.code, "exact_length");
        assert_eq!(exact.message, "This value should have exactly 7 characters");

        let short = length(5, 10).validate_any("abc").unwrap_err();
        assert_eq!(short.code, "min_length");
        assert_eq!(
            short.message,
            "This value is too short. It should have 5 characters or more."
        );
        assert_eq!(short.param("actual"), Some("3"));

        let long = length(4, 6).validate_any("example").unwrap_err();
        assert_eq!(long.code, "max_length");
        assert_eq!(long.message, "This value is too long. It should have 6 characters or less");
    }

    #[test]
    fn test_unicode_counts_chars() {
        assert!(length(2, 2).validate_any("日本").is_ok());
        assert!(Length::bytes(2, 2).validate_any("日本").is_err());
        assert!(Length::bytes(6, 6).validate_any("日本").is_ok());
    }

    #[test]
    fn test_non_string_is_type_mismatch() {
        let err = length(1, 5).validate_any(12345).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
    }

    #[rstest]
    #[case(3, 3, 3, None)]
    #[case(2, 3, 3, Some(Bound::Exact))]
    #[case(0, 1, 5, Some(Bound::Min))]
    #[case(6, 1, 5, Some(Bound::Max))]
    #[case(5, 1, 5, None)]
    fn test_bound_check(
        #[case] count: usize,
        #[case] min: usize,
        #[case] max: usize,
        #[case] expected: Option<Bound>,
    ) {
        assert_eq!(Bound::check(count, min, max), expected);
    }
}
