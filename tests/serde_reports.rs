#![cfg(feature = "serde")]

use rubric::{RuleSetBuilder, json};

fn ruleset() -> rubric::RuleSet {
    RuleSetBuilder::new()
        .field("name:score(2)", "Ada")
        .nested("address", |a| a.field("city:score(3)", "London").field("zip", "NW1"))
        .build()
}

#[test]
fn breakdown_serializes_as_nested_map() {
    let subject = json!({ "name": "Ada", "address": { "city": "Paris", "zip": "NW1" } });
    let value = serde_json::to_value(ruleset().breakdown(&subject)).unwrap();

    assert_eq!(
        value,
        json!({ "name": true, "address": { "city": false, "zip": true } })
    );
}

#[test]
fn non_object_breakdown_serializes_as_false() {
    let value = serde_json::to_value(ruleset().breakdown(&json!(3))).unwrap();
    assert_eq!(value, json!(false));
}

#[test]
fn score_serializes_as_pair() {
    let subject = json!({ "name": "Ada", "address": { "city": "London", "zip": "E1" } });
    let value = serde_json::to_value(ruleset().score(&subject)).unwrap();
    assert_eq!(value, json!([5.0, 6.0]));
}

#[test]
fn score_breakdown_serializes_points() {
    let subject = json!({ "name": "Bob", "address": 7 });
    let value = serde_json::to_value(ruleset().score_breakdown(&subject)).unwrap();
    assert_eq!(value, json!({ "name": 0.0, "address": 0.0 }));
}

#[test]
fn key_order_is_declaration_order() {
    let subject = json!({ "address": { "zip": "NW1", "city": "London" }, "name": "Ada" });
    let text = serde_json::to_string(&ruleset().breakdown(&subject)).unwrap();
    assert_eq!(text, r#"{"name":true,"address":{"city":true,"zip":true}}"#);
}
