//! Benchmarks for validator runs
//!
//! Tests performance of:
//! - Leaf constraints on their own
//! - Field / getter dispatch through a record
//! - Full runs with and without group filtering

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fieldcheck_validator::prelude::*;
use fieldcheck_validator::record;

struct Person {
    name: String,
    email: String,
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
        fields { "Name" => name, "Email" => email, "IsMarried" => is_married }
        getters { "Age" => age }
    }
}

impl LoadMetadata for Person {
    fn load_validator_metadata(&self, metadata: &mut Metadata) {
        metadata
            .add_field_constraint("Name", not_blank().in_group("create"))
            .add_field_constraint("Name", length(2, 32))
            .add_field_constraint("Email", email().in_group("create"))
            .add_field_constraint("IsMarried", is_true().in_group("update"))
            .add_getter_constraint("Age", range(18.0, 120.0).with_groups(["create", "update"]));
    }
}

fn person(valid: bool) -> Person {
    Person {
        name: "Mike".into(),
        email: if valid { "mike@example.com" } else { "mike" }.into(),
        is_married: valid,
        age: if valid { 30 } else { 12 },
    }
}

// ============================================================================
// LEAF CONSTRAINTS
// ============================================================================

fn bench_leaf_constraints(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf");

    let len = length(5, 20);
    group.bench_function("length_ok", |b| b.iter(|| len.validate_any(black_box("hello world"))));

    let mail = email();
    group.bench_function("email_ok", |b| {
        b.iter(|| mail.validate_any(black_box("john@example.com")))
    });

    let colors = choice(["red", "green", "blue", "cyan", "magenta"]);
    group.bench_function("choice_multiple", |b| {
        b.iter(|| colors.validate_any(black_box(vec!["red", "cyan"])))
    });

    group.finish();
}

// ============================================================================
// FULL RUNS
// ============================================================================

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("validator");
    let validator = Validator::new();

    for valid in [true, false] {
        let target = person(valid);
        group.bench_with_input(BenchmarkId::new("all_groups", valid), &target, |b, p| {
            b.iter(|| validator.validate(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("create_group", valid), &target, |b, p| {
            b.iter(|| validator.validate_groups(black_box(p), &["create"]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_leaf_constraints, bench_validator);
criterion_main!(benches);
