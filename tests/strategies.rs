#![allow(dead_code)]

use proptest::prelude::*;
use rubric::predicates::{float, int, num, string};
use rubric::{OPTIONAL, Rule, RuleSet, Value, json};

// --- Fixed subject schema ---
// Keys are drawn from a small alphabet so rules and subjects collide often.
// Scalars come from a small pool so literal rules match some of the time.

pub const KEYS: &[&str] = &["a", "b", "c", "d"];
const WORDS: &[&str] = &["", "abc", "apple", "c", "123"];

/// Generate a scalar JSON value.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-3_i64..=3).prop_map(Value::from),
        prop::sample::select(&[0.5_f64, 1.0, 2.25, -1.5][..]).prop_map(Value::from),
        prop::sample::select(WORDS).prop_map(Value::from),
    ]
}

/// Generate any value a subject field might hold.
pub fn arb_field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => arb_scalar(),
        1 => prop::collection::vec(arb_scalar(), 0..4).prop_map(Value::Array),
        1 => prop::collection::btree_map(prop::sample::select(KEYS), arb_scalar(), 0..4)
            .prop_map(|m| json!(m)),
    ]
}

/// Generate an object subject over the fixed key alphabet.
pub fn arb_subject() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(prop::sample::select(KEYS), arb_field_value(), 0..5)
        .prop_map(|m| json!(m))
}

/// Generate a single-value rule: literal, predicate or pattern.
pub fn arb_leaf() -> impl Strategy<Value = Rule> {
    prop_oneof![
        arb_scalar().prop_map(Rule::Literal),
        (-3_i64..=3).prop_map(int::min),
        (-3_i64..=3).prop_map(int::max),
        Just(int::even()),
        Just(float::float()),
        (-2.0_f64..2.0).prop_map(num::greater_than),
        prop::sample::select(WORDS).prop_map(string::starts_with),
        (0_usize..4).prop_map(string::max),
        prop::sample::select(&["^a", "c$", "^-?\\d+$", "true"][..])
            .prop_map(|p| Rule::pattern(p).unwrap()),
    ]
}

/// Generate a rule of any kind, nesting at most one level.
pub fn arb_rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        4 => arb_leaf(),
        1 => Just(OPTIONAL),
        1 => Just(Rule::Absent),
        2 => prop::collection::vec(arb_leaf(), 0..4).prop_map(Rule::AnyOf),
        1 => prop::collection::vec(
                prop::collection::vec(arb_leaf(), 0..3).prop_map(Rule::AllOf),
                1..3,
            )
            .prop_map(Rule::AnyOf),
        1 => arb_flat_ruleset().prop_map(Rule::Nested),
    ]
}

/// Generate a raw key with random tags and a whole-number weight.
pub fn arb_raw_key() -> impl Strategy<Value = String> {
    (prop::sample::select(KEYS), any::<bool>(), prop::option::of(0_u8..=5)).prop_map(
        |(key, optional, weight)| {
            let mut raw = key.to_owned();
            if optional {
                raw.push_str(":optional");
            }
            if let Some(w) = weight {
                raw.push_str(&format!(":score({w})"));
            }
            raw
        },
    )
}

/// Generate a ruleset of leaf rules only.
pub fn arb_flat_ruleset() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec((arb_raw_key(), arb_leaf()), 0..4)
        .prop_map(|fields| fields.into_iter().collect())
}

/// Generate a ruleset whose rules may be composites or nested rulesets.
pub fn arb_ruleset() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec((arb_raw_key(), arb_rule()), 0..5)
        .prop_map(|fields| fields.into_iter().collect())
}
