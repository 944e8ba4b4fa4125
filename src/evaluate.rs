use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::value::{coerce_to_string, kind_name, strict_eq};
use crate::{Breakdown, Field, Outcome, Rule, RuleSet};

/// Test one rule against a field value; `None` means the field is absent.
pub(crate) fn matches(rule: &Rule, value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return accepts_absent(rule);
    };

    match rule {
        Rule::Literal(expected) => strict_eq(value, expected),
        Rule::Absent | Rule::Optional => false,
        Rule::Predicate(p) => p.test(value),
        Rule::Pattern(re) => re.is_match(&coerce_to_string(value)),
        Rule::Nested(ruleset) => test(ruleset, value),
        Rule::AnyOf(items) => any_of(items, value),
        Rule::AllOf(items) => items.iter().all(|r| matches(r, Some(value))),
    }
}

/// Whether a rule is satisfied by a missing field.
fn accepts_absent(rule: &Rule) -> bool {
    match rule {
        Rule::Absent | Rule::Optional => true,
        Rule::AnyOf(items) => items.iter().any(accepts_absent),
        Rule::AllOf(items) => items.iter().all(accepts_absent),
        Rule::Literal(_) | Rule::Predicate(_) | Rule::Pattern(_) | Rule::Nested(_) => false,
    }
}

/// A composite. An array value must have every element match some
/// alternative; anything else must match one alternative directly.
fn any_of(items: &[Rule], value: &Value) -> bool {
    if items.is_empty() {
        return false;
    }
    match value {
        Value::Array(elements) => elements.iter().all(|el| any_alternative(items, el)),
        _ => any_alternative(items, value),
    }
}

fn any_alternative(items: &[Rule], value: &Value) -> bool {
    items.iter().any(|item| matches(item, Some(value)))
}

fn field_passes(field: &Field, subject: &Map<String, Value>) -> bool {
    let value = subject.get(field.key());
    matches(field.rule(), value) || (value.is_none() && field.tag().is_optional())
}

pub(crate) fn test(ruleset: &RuleSet, subject: &Value) -> bool {
    let Value::Object(subject) = subject else {
        trace!(found = kind_name(subject), "subject is not an object");
        return false;
    };

    ruleset.fields.iter().all(|field| {
        let ok = field_passes(field, subject);
        if !ok {
            trace!(key = field.key(), rule = %field.rule(), "field rejected");
        }
        ok
    })
}

pub(crate) fn breakdown(ruleset: &RuleSet, subject: &Value) -> Breakdown {
    let Value::Object(subject) = subject else {
        debug!(found = kind_name(subject), "breakdown of a non-object subject");
        return Breakdown::NotAnObject;
    };

    let entries = ruleset
        .fields
        .iter()
        .map(|field| {
            let outcome = match (field.rule(), subject.get(field.key())) {
                (Rule::Nested(inner), Some(value @ Value::Object(_))) => {
                    Outcome::Nested(breakdown(inner, value))
                }
                _ => Outcome::Leaf(field_passes(field, subject)),
            };
            (field.key().to_owned(), outcome)
        })
        .collect::<Vec<_>>();

    debug!(
        fields = entries.len(),
        failed = entries.iter().filter(|(_, o)| !o.passed()).count(),
        "breakdown complete"
    );
    Breakdown::Fields(entries)
}
