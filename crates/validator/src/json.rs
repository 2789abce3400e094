//! JSON documents as validation targets.
//!
//! A `serde_json` object is a [`Record`] whose type name is `"object"`; every
//! key is a field and a missing key reads as [`Value::Nil`], so a field
//! constraint on an absent key sees nil instead of panicking. Other JSON
//! values convert into the matching [`Value`] variant.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({ "name": "", "tags": ["a", "b", "c"] });
//! let object = doc.as_object().unwrap();
//!
//! let mut metadata = Metadata::new();
//! metadata
//!     .add_field_constraint("name", not_blank())
//!     .add_field_constraint("tags", count(1, 2))
//!     .add_field_constraint("email", not_nil());
//!
//! let errors = Validator::new().validate_record(object, &metadata, &[]);
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors.errors()[0].owner.as_deref(), Some("object"));
//! ```

use std::borrow::Cow;

use serde_json::{Map, Number};

use crate::foundation::{Record, Value};

/// Type name reported by JSON objects.
pub const JSON_OBJECT: &str = "object";

impl Record for Map<String, serde_json::Value> {
    fn type_name(&self) -> &'static str {
        JSON_OBJECT
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        Some(self.get(name).map_or(Value::Nil, Value::from))
    }
}

impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(json: &'a serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => from_number(n),
            serde_json::Value::String(s) => Value::Str(Cow::Borrowed(s.as_str())),
            serde_json::Value::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Record(map),
        }
    }
}

impl<'a> From<&'a Map<String, serde_json::Value>> for Value<'a> {
    fn from(map: &'a Map<String, serde_json::Value>) -> Self {
        Value::Record(map)
    }
}

/// Integers keep their signedness; everything else becomes a float.
fn from_number(n: &Number) -> Value<'static> {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt(u)
    } else {
        n.as_f64().map_or(Value::Nil, Value::Float)
    }
}
