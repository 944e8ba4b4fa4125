//! Predicate factories.
//!
//! Each function returns a [`Rule::Predicate`](crate::Rule::Predicate) built
//! from a plain `Fn(&Value) -> bool`. Families are grouped by the kind of
//! value they inspect; a value of the wrong kind is a non-match, never a
//! panic.
//!
//! ```
//! use rubric::{RuleSetBuilder, json, predicates::{int, string}};
//!
//! let ruleset = RuleSetBuilder::new()
//!     .field("name", string::range(1, 20))
//!     .field("age", int::min(18))
//!     .build();
//!
//! assert!(ruleset.test(&json!({ "name": "Ada", "age": 36 })));
//! ```

pub mod array;
pub mod float;
pub mod int;
pub mod num;
pub mod object;
pub mod string;

use serde_json::Value;

use crate::Rule;

/// Matches any present value.
#[must_use]
pub fn any() -> Rule {
    Rule::named_predicate("any", |_| true)
}

#[must_use]
pub fn boolean() -> Rule {
    Rule::named_predicate("boolean", Value::is_boolean)
}

#[must_use]
pub fn null() -> Rule {
    Rule::named_predicate("null", Value::is_null)
}

/// `true`, `1`, and the strings `"1"`, `"yes"` and `"true"`.
#[must_use]
pub fn truthy() -> Rule {
    Rule::named_predicate("truthy", |v| match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => matches!(s.as_str(), "1" | "yes" | "true"),
        _ => false,
    })
}

/// `false`, `0`, the empty array, and the strings `""`, `"0"`, `"no"`,
/// `"false"`, `"null"` and `"undefined"`.
#[must_use]
pub fn falsy() -> Rule {
    Rule::named_predicate("falsy", |v| match v {
        Value::Bool(b) => !*b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => matches!(
            s.as_str(),
            "" | "0" | "no" | "false" | "null" | "undefined"
        ),
        Value::Array(items) => items.is_empty(),
        Value::Null | Value::Object(_) => false,
    })
}
