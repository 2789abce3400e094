//! Blank / not-blank string checks
//!
//! A string is blank when it has no characters at all. Whitespace counts as
//! content, so `" "` is not blank.

use crate::foundation::ValidationError;

// ============================================================================
// NOT BLANK
// ============================================================================

crate::constraint! {
    /// Passes iff the string has at least one character.
    pub NotBlank for &str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_blank", "This value should not be blank") }
    fn not_blank();
}

// ============================================================================
// BLANK
// ============================================================================

crate::constraint! {
    /// Passes iff the string is empty.
    pub Blank for &str;
    rule(input) { input.is_empty() }
    error(input) {
        ValidationError::new("blank", "This value should be blank")
            .with_param("actual", input.chars().count().to_string())
    }
    fn blank();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case(" ", true)]
    #[case("john", true)]
    #[case("ÿ", true)]
    fn not_blank_cases(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(not_blank().validate_any(input).is_ok(), valid);
    }

    #[test]
    fn blank_reports_message() {
        let err = blank().validate_any("x").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message, "This value should be blank");
        assert!(blank().validate_any("").is_ok());
    }

    #[test]
    fn non_strings_are_type_mismatches() {
        let err = not_blank().validate_any(3).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.message, "Cannot validate this value (not a string)");
        assert!(blank().validate_any(None::<&str>).is_err());
    }

    proptest! {
        #[test]
        fn blank_and_not_blank_are_complements(s in ".*") {
            let a = not_blank().validate_any(s.as_str()).is_ok();
            let b = blank().validate_any(s.as_str()).is_ok();
            prop_assert_ne!(a, b);
        }
    }
}
