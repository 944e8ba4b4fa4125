//! Objects.

use serde_json::Value;

use crate::Rule;

#[must_use]
pub fn object() -> Rule {
    Rule::named_predicate("object::object", Value::is_object)
}

#[must_use]
pub fn has_property(key: impl Into<String>) -> Rule {
    let key = key.into();
    Rule::named_predicate(format!("object::has_property({key:?})"), move |v| {
        v.as_object().is_some_and(|map| map.contains_key(&key))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn object_kind() {
        assert!(object().matches(Some(&json!({}))));
        assert!(!object().matches(Some(&json!([]))));
        assert!(!object().matches(Some(&json!(null))));
    }

    #[test]
    fn property_presence() {
        let rule = has_property("id");
        assert!(rule.matches(Some(&json!({ "id": null }))));
        assert!(!rule.matches(Some(&json!({ "name": "x" }))));
        assert!(!rule.matches(Some(&json!("id"))));
    }
}
