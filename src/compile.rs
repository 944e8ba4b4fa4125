use serde_json::Value;

use crate::value::kind_name;
use crate::{Field, Rule, RuleError, RuleSet};

/// Turn a JSON description of a rule into a typed [`Rule`].
///
/// Scalars and `null` become literals, objects become nested rulesets and
/// arrays become composites. Arrays directly inside a composite are conjunct
/// groups; arrays inside a group are composites again.
pub(crate) fn compile_rule(value: Value) -> Rule {
    match value {
        Value::Array(items) => Rule::AnyOf(items.into_iter().map(compile_alternative).collect()),
        Value::Object(map) => Rule::Nested(fields_from_map(map)),
        scalar => Rule::Literal(scalar),
    }
}

fn compile_alternative(value: Value) -> Rule {
    match value {
        Value::Array(items) => Rule::AllOf(items.into_iter().map(compile_rule).collect()),
        other => compile_rule(other),
    }
}

fn fields_from_map(map: serde_json::Map<String, Value>) -> RuleSet {
    RuleSet {
        fields: map
            .into_iter()
            .map(|(raw_key, value)| Field::new(&raw_key, compile_rule(value)))
            .collect(),
    }
}

pub(crate) fn compile_ruleset(value: Value) -> Result<RuleSet, RuleError> {
    match value {
        Value::Object(map) => Ok(fields_from_map(map)),
        other => Err(RuleError::NotAnObject {
            found: kind_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_become_literals() {
        for v in [json!("s"), json!(1), json!(false), json!(null)] {
            assert!(matches!(compile_rule(v), Rule::Literal(_)));
        }
    }

    #[test]
    fn arrays_alternate_between_any_and_all() {
        let rule = compile_rule(json!(["a", ["b", ["c", "d"]]]));
        let Rule::AnyOf(top) = rule else {
            panic!("expected AnyOf at top level");
        };
        assert!(matches!(top[0], Rule::Literal(_)));
        let Rule::AllOf(group) = &top[1] else {
            panic!("expected AllOf group");
        };
        assert!(matches!(group[0], Rule::Literal(_)));
        assert!(matches!(&group[1], Rule::AnyOf(inner) if inner.len() == 2));
    }

    #[test]
    fn objects_become_nested_rulesets() {
        let rule = compile_rule(json!({ "hello": "world", "n:score(2)": 1 }));
        let Rule::Nested(rs) = rule else {
            panic!("expected Nested");
        };
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.fields()[1].key(), "n");
        assert_eq!(rs.fields()[1].tag().weight(), 2.0);
    }

    #[test]
    fn ruleset_keeps_declaration_order() {
        let rs = compile_ruleset(json!({ "z": 1, "a": 2, "m": 3 })).unwrap();
        let keys: Vec<&str> = rs.fields().iter().map(Field::key).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn ruleset_requires_object() {
        let err = compile_ruleset(json!("nope")).unwrap_err();
        assert!(matches!(err, RuleError::NotAnObject { found: "string" }));
    }
}
