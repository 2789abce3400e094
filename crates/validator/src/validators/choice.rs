//! Choice membership validator

use std::borrow::Cow;

use crate::foundation::{Constraint, Groups, ValidationError, Value};

/// Default message for a scalar that is not one of the choices.
pub const CHOICE_MESSAGE: &str = "The value you selected is not a valid choice";
/// Default message for too few selected elements; `{limit}` is the minimum.
pub const CHOICE_MIN_MESSAGE: &str = "You must select at least {limit} choices";
/// Default message for too many selected elements; `{limit}` is the maximum.
pub const CHOICE_MAX_MESSAGE: &str = "You must select at most {limit} choices";
/// Default message for a sequence holding an unknown element.
pub const CHOICE_MULTIPLE_MESSAGE: &str = "One or more of the given values is invalid";

/// Validates membership in a fixed set of allowed values.
///
/// A scalar passes iff it equals one of the choices. A list is a multiple
/// selection: its length must lie within `[min, max]` and every element must
/// be a choice. Lists are rejected outright when `multiple` is off.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let colors = choice(["red", "green", "blue"]).with_min(1).with_max(2);
/// assert!(colors.validate_any("red").is_ok());
/// assert!(colors.validate_any(vec!["red", "blue"]).is_ok());
/// assert!(colors.validate_any(vec!["red", "pink"]).is_err());
/// assert!(colors.validate_any(Vec::<&str>::new()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Choice {
    choices: Vec<Value<'static>>,
    min: usize,
    max: Option<usize>,
    multiple: bool,
    message: Cow<'static, str>,
    min_message: Cow<'static, str>,
    max_message: Cow<'static, str>,
    multiple_message: Cow<'static, str>,
    groups: Groups,
}

impl Choice {
    /// Creates the constraint. Multiple selection is on and unbounded.
    pub fn new<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'static>>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            min: 0,
            max: None,
            multiple: true,
            message: Cow::Borrowed(CHOICE_MESSAGE),
            min_message: Cow::Borrowed(CHOICE_MIN_MESSAGE),
            max_message: Cow::Borrowed(CHOICE_MAX_MESSAGE),
            multiple_message: Cow::Borrowed(CHOICE_MULTIPLE_MESSAGE),
            groups: Groups::new(),
        }
    }

    /// Minimum number of selected elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Maximum number of selected elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Whether lists are accepted at all.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Overrides the scalar message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Overrides the minimum message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_min_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.min_message = message.into();
        self
    }

    /// Overrides the maximum message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.max_message = message.into();
        self
    }

    /// Overrides the unknown-element message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_multiple_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.multiple_message = message.into();
        self
    }

    /// The allowed values.
    #[must_use]
    pub fn choices(&self) -> &[Value<'static>] {
        &self.choices
    }

    fn allows(&self, value: &Value<'_>) -> bool {
        self.choices.iter().any(|choice| value == choice)
    }

    fn not_a_choice(&self) -> ValidationError {
        ValidationError::new("choice", self.message.clone())
    }

    fn validate_selection(&self, selected: &[Value<'_>]) -> Result<(), ValidationError> {
        if selected.len() < self.min {
            let limit = self.min.to_string();
            return Err(
                ValidationError::new("choice_min", self.min_message.replace("{limit}", &limit))
                    .with_param("min", limit),
            );
        }
        if let Some(max) = self.max.filter(|max| selected.len() > *max) {
            let limit = max.to_string();
            return Err(
                ValidationError::new("choice_max", self.max_message.replace("{limit}", &limit))
                    .with_param("max", limit),
            );
        }
        match selected.iter().find(|value| !self.allows(value)) {
            Some(unknown) => Err(ValidationError::new(
                "choice_multiple",
                self.multiple_message.clone(),
            )
            .with_param("invalid", unknown.to_string())),
            None => Ok(()),
        }
    }
}

impl Constraint for Choice {
    fn validate(&self, value: &Value<'_>) -> Result<(), ValidationError> {
        match value.as_list() {
            Some(selected) if self.multiple => self.validate_selection(selected),
            Some(_) => Err(self.not_a_choice()),
            None if self.allows(value) => Ok(()),
            None => Err(self.not_a_choice()),
        }
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

/// Creates a [`Choice`] constraint.
pub fn choice<I, V>(choices: I) -> Choice
where
    I: IntoIterator<Item = V>,
    V: Into<Value<'static>>,
{
    Choice::new(choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn colors() -> Choice {
        choice(["red", "green", "blue"])
    }

    #[rstest]
    #[case::member(Value::from("red"), true)]
    #[case::stranger(Value::from("pink"), false)]
    #[case::other_kind(Value::from(1), false)]
    #[case::nil(Value::Nil, false)]
    fn test_scalar(#[case] value: Value<'static>, #[case] valid: bool) {
        assert_eq!(colors().validate(&value).is_ok(), valid);
    }

    #[test]
    fn test_numeric_choices_compare_by_value() {
        assert!(choice([1, 2, 3]).validate_any(2_u64).is_ok());
        assert!(choice([1.5, 2.5]).validate_any(2.5_f32).is_ok());
    }

    #[test]
    fn test_selection_bounds() {
        let constraint = colors().with_min(2).with_max(2);

        let err = constraint.validate_any(vec!["red"]).unwrap_err();
        assert_eq!(err.code, "choice_min");
        assert_eq!(err.message, "You must select at least 2 choices");

        let err = constraint
            .validate_any(vec!["red", "green", "blue"])
            .unwrap_err();
        assert_eq!(err.code, "choice_max");
        assert_eq!(err.message, "You must select at most 2 choices");

        assert!(constraint.validate_any(vec!["red", "blue"]).is_ok());
    }

    #[test]
    fn test_unknown_element_fails_whole_selection() {
        let err = colors().validate_any(vec!["red", "pink"]).unwrap_err();
        assert_eq!(err.code, "choice_multiple");
        assert_eq!(err.message, CHOICE_MULTIPLE_MESSAGE);
        assert_eq!(err.param("invalid"), Some("pink"));
    }

    #[test]
    fn test_empty_selection_depends_on_min() {
        let empty: Vec<&str> = Vec::new();
        assert!(colors().validate_any(empty.clone()).is_ok());
        assert!(colors().with_min(1).validate_any(empty).is_err());
    }

    #[test]
    fn test_single_choice_rejects_lists() {
        let err = colors()
            .with_multiple(false)
            .validate_any(vec!["red"])
            .unwrap_err();
        assert_eq!(err.code, "choice");
        assert_eq!(err.message, CHOICE_MESSAGE);
    }

    #[test]
    fn test_message_overrides() {
        let constraint = colors()
            .with_min(3)
            .with_message("pick a color")
            .with_min_message("pick {limit} colors")
            .with_multiple_message("unknown color");

        assert_eq!(constraint.validate_any("pink").unwrap_err().message, "pick a color");
        assert_eq!(constraint.validate_any(vec!["red"]).unwrap_err().message, "pick 3 colors");
        assert_eq!(
            constraint
                .validate_any(vec!["red", "green", "pink"])
                .unwrap_err()
                .message,
            "unknown color"
        );
    }
}
