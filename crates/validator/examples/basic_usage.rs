//! Basic usage example for fieldcheck-validator

use fieldcheck_validator::prelude::*;
use fieldcheck_validator::record;
use tracing_subscriber::EnvFilter;

struct Person {
    name: String,
    is_married: bool,
    age: u32,
}

impl Person {
    fn age(&self) -> u32 {
        self.age
    }
}

record! {
    Person {
        fields { "Name" => name, "IsMarried" => is_married }
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

fn main() {
    // RUST_LOG=fieldcheck_validator=trace shows skipped constraints too
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let validator = Validator::new();
    let person = Person {
        name: "Mike".into(),
        is_married: false,
        age: 12,
    };

    let errors = validator.validate(&person);
    for error in &errors {
        println!("✗ {error}");
    }

    for groups in [&["group1"][..], &["group2"][..]] {
        let errors = validator.validate_groups(&person, groups);
        println!("{groups:?}: {} error(s)", errors.len());
    }

    match validator.validate(&person).into_result(&person) {
        Ok(_) => println!("✓ person is valid"),
        Err(errors) => println!("{errors}"),
    }
}
