//! End-to-end validation of records that declare their own constraints.

use fieldcheck_validator::prelude::*;
use fieldcheck_validator::record;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

// ============================================================================
// FIXTURES
// ============================================================================

struct Address {
    street: String,
    city: String,
}

struct Person {
    name: String,
    email: String,
    is_married: bool,
    age: u32,
    address: Address,
    spouse: Option<String>,
}

impl Person {
    fn age(&self) -> u32 {
        self.age
    }
}

record! { Address { fields { "Street" => street, "City" => city } } }

record! {
    Person {
        fields {
            "Name" => name,
            "Email" => email,
            "IsMarried" => is_married,
            "Spouse" => spouse,
        }
        records { "Address" => address }
        getters { "Age" => age }
    }
}

impl LoadMetadata for Person {
    fn load_validator_metadata(&self, metadata: &mut Metadata) {
        metadata
            .add_field_constraint("Name", not_blank().in_group("group1"))
            .add_field_constraint("IsMarried", is_true().in_group("group2"))
            .add_getter_constraint("Age", greater_than(15.0).with_groups(["group1", "group2"]));
    }
}

/// Same data, a full set of ungrouped rules.
struct Profile<'a>(&'a Person);

impl Record for Profile<'_> {
    fn type_name(&self) -> &'static str {
        "Profile"
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.0.field(name)
    }

    fn getter(&self, name: &str) -> Option<Value<'_>> {
        self.0.getter(name)
    }
}

impl LoadMetadata for Profile<'_> {
    fn load_validator_metadata(&self, metadata: &mut Metadata) {
        metadata
            .add_field_constraint("Name", length(2, 20))
            .add_field_constraint("Email", email())
            .add_field_constraint(
                "Address",
                field("City", choice(["Oslo", "Paris", "Lima"]).with_multiple(false)),
            )
            .add_field_constraint("Address", field("Street", not_blank()))
            .add_getter_constraint("Age", range(18.0, 120.0));
    }
}

#[fixture]
fn mike() -> Person {
    Person {
        name: "Mike".into(),
        email: "mike@example.com".into(),
        is_married: true,
        age: 20,
        address: Address {
            street: "Main St 1".into(),
            city: "Oslo".into(),
        },
        spouse: None,
    }
}

// ============================================================================
// ORDER AND GROUPS
// ============================================================================

#[rstest]
fn errors_follow_registration_order(mut mike: Person) {
    mike.is_married = false;
    mike.age = 12;

    let errors = Validator::new().validate(&mike);
    assert_eq!(
        errors.messages(),
        vec!["This value should be true", "This value should be greater than 15"]
    );
}

#[rstest]
#[case::group1(&["group1"], 0)]
#[case::group2(&["group2"], 1)]
#[case::both(&["group1", "group2"], 1)]
#[case::unknown(&["group3"], 0)]
#[case::all(&[], 1)]
fn groups_select_constraints(mut mike: Person, #[case] groups: &[&str], #[case] expected: usize) {
    mike.is_married = false;
    assert_eq!(Validator::new().validate_groups(&mike, groups).len(), expected);
}

#[derive(Default)]
struct Blanks {
    a: String,
    b: String,
}

record! { Blanks { fields { "A" => a, "B" => b } } }

impl LoadMetadata for Blanks {
    fn load_validator_metadata(&self, metadata: &mut Metadata) {
        metadata
            .add_field_constraint("A", not_blank())
            .add_field_constraint("B", not_blank().in_group("g2"));
    }
}

#[test]
fn ungrouped_constraints_run_for_every_request() {
    let target = Blanks::default();
    let validator = Validator::new();

    let all = validator.validate_groups(&target, &[]);
    assert_eq!(all.iter().filter_map(|e| e.field.as_deref()).collect::<Vec<_>>(), ["A", "B"]);

    let g1 = validator.validate_groups(&target, &["g1"]);
    assert_eq!(g1.iter().filter_map(|e| e.field.as_deref()).collect::<Vec<_>>(), ["A"]);
}

#[test]
fn default_group_only_policy() {
    let target = Blanks::default();
    let validator = Validator::with_config(
        ValidatorConfig::default().with_group_policy(GroupPolicy::DefaultGroupOnly),
    );

    let g1 = validator.validate_groups(&target, &["g1"]);
    assert!(g1.is_empty());

    let g2 = validator.validate_groups(&target, &["g2"]);
    assert_eq!(g2.iter().filter_map(|e| e.field.as_deref()).collect::<Vec<_>>(), ["B"]);

    let default = validator.validate_groups(&target, &["Default"]);
    assert_eq!(default.iter().filter_map(|e| e.field.as_deref()).collect::<Vec<_>>(), ["A"]);
}

// ============================================================================
// ATTRIBUTION AND ROUND-TRIP
// ============================================================================

#[rstest]
fn blank_name_is_attributed(mut mike: Person) {
    mike.name.clear();
    let errors = Validator::new().validate_groups(&mike, &["group1"]);

    assert_eq!(errors.len(), 1);
    let error = &errors.errors()[0];
    assert_eq!(error.field.as_deref(), Some("Name"));
    assert_eq!(error.owner.as_deref(), Some("Person"));
    assert_eq!(error.message, "This value should not be blank");
}

#[rstest]
fn valid_profile_has_no_errors(mike: Person) {
    let errors = Validator::new().validate(&Profile(&mike));
    assert!(errors.is_empty(), "{errors}");
    assert!(errors.into_result(()).is_ok());
}

#[rstest]
#[case::name(|p: &mut Person| { p.name = "M".into() }, "Name")]
#[case::email(|p: &mut Person| { p.email = "mike@example".into() }, "Email")]
#[case::city(|p: &mut Person| { p.address.city = "Rome".into() }, "Address.City")]
#[case::street(|p: &mut Person| p.address.street.clear(), "Address.Street")]
#[case::age(|p: &mut Person| { p.age = 17 }, "Age")]
fn breaking_one_field_yields_one_error(
    mut mike: Person,
    #[case] break_it: fn(&mut Person),
    #[case] field: &str,
) {
    break_it(&mut mike);
    let errors = Validator::new().validate(&Profile(&mike));
    assert_eq!(errors.len(), 1, "{errors}");
    assert_eq!(errors.errors()[0].field.as_deref(), Some(field));
}

#[rstest]
fn nested_errors_keep_innermost_owner(mut mike: Person) {
    mike.address.street.clear();
    let errors = Validator::new().validate(&Profile(&mike));
    assert_eq!(errors.errors()[0].owner.as_deref(), Some("Address"));
}

#[rstest]
fn validation_is_idempotent(mut mike: Person) {
    mike.is_married = false;
    mike.age = 3;
    let validator = Validator::new();
    assert_eq!(validator.validate(&mike), validator.validate(&mike));
}

#[rstest]
fn optional_fields_read_as_nil(mut mike: Person) {
    let mut metadata = Metadata::new();
    metadata.add_field_constraint("Spouse", nil());
    let validator = Validator::new();
    assert!(validator.validate_record(&mike, &metadata, &[]).is_empty());

    mike.spouse = Some("Ann".into());
    let errors = validator.validate_record(&mike, &metadata, &[]);
    assert_eq!(errors.messages(), vec!["This value should be nil"]);
}

// ============================================================================
// RENDERING
// ============================================================================

#[rstest]
fn rendered_errors(mut mike: Person) {
    mike.is_married = false;
    mike.age = 12;
    let errors = Validator::new().validate(&mike);

    insta::assert_snapshot!(errors.to_string().trim_end(), @r"
Validation failed with 2 error(s):
  1. [IsMarried] is_true: This value should be true
  2. [Age] greater_than: This value should be greater than 15 (params: [threshold=15])
");
}

#[rstest]
fn errors_render_as_json(mut mike: Person) {
    mike.age = 12;
    let errors = Validator::new().validate(&mike);
    let json = errors.errors()[0].to_json_value();

    assert_eq!(
        json,
        serde_json::json!({
            "code": "greater_than",
            "message": "This value should be greater than 15",
            "field": "Age",
            "owner": "Person",
            "params": { "threshold": "15" },
        })
    );
}

// ============================================================================
// PROGRAMMER ERRORS
// ============================================================================

struct Broken;

record! { Broken {} }

impl LoadMetadata for Broken {
    fn load_validator_metadata(&self, metadata: &mut Metadata) {
        metadata.add_field_constraint("Missing", not_blank());
    }
}

#[test]
#[should_panic(expected = "Broken has no field named `Missing`")]
fn unknown_field_panics() {
    let _ = Validator::new().validate(&Broken);
}

#[test]
#[should_panic(expected = "expects a record")]
fn wrapper_on_scalar_panics() {
    let _ = field("Name", not_blank()).validate_any("Mike");
}
