//! Boolean validators

use crate::foundation::ValidationError;

crate::constraint! {
    /// Passes on `true`.
    pub IsTrue for bool;
    rule(input) { input }
    error(input) { ValidationError::new("is_true", "This value should be true") }
    fn is_true();
}

crate::constraint! {
    /// Passes on `false`.
    pub IsFalse for bool;
    rule(input) { !input }
    error(input) { ValidationError::new("is_false", "This value should be false") }
    fn is_false();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;

    #[test]
    fn test_is_true() {
        assert!(is_true().validate_any(true).is_ok());
        let err = is_true().validate_any(false).unwrap_err();
        assert_eq!(err.message, "This value should be true");
    }

    #[test]
    fn test_is_false() {
        assert!(is_false().validate_any(false).is_ok());
        assert!(is_false().validate_any(true).is_err());
    }

    #[test]
    fn test_non_bool_is_type_mismatch() {
        let err = is_true().validate_any("true").unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.param("expected"), Some("bool"));
        assert!(is_false().validate_any(0).is_err());
    }
}
