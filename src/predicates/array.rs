//! Arrays. Membership uses the same equality as literal rules.

use serde_json::Value;

use crate::value::strict_eq;
use crate::Rule;

fn elements(name: String, test: impl Fn(&[Value]) -> bool + Send + Sync + 'static) -> Rule {
    Rule::named_predicate(name, move |v| v.as_array().is_some_and(|items| test(items.as_slice())))
}

fn values(items: impl IntoIterator<Item = impl Into<Value>>) -> Vec<Value> {
    items.into_iter().map(Into::into).collect()
}

fn has(items: &[Value], needle: &Value) -> bool {
    items.iter().any(|item| strict_eq(item, needle))
}

#[must_use]
pub fn array() -> Rule {
    Rule::named_predicate("array::array", Value::is_array)
}

#[must_use]
pub fn contains(item: impl Into<Value>) -> Rule {
    let item = item.into();
    elements(format!("array::contains({item})"), move |items| has(items, &item))
}

#[must_use]
pub fn contains_all(wanted: impl IntoIterator<Item = impl Into<Value>>) -> Rule {
    let wanted = values(wanted);
    elements("array::contains_all".to_owned(), move |items| {
        wanted.iter().all(|w| has(items, w))
    })
}

#[must_use]
pub fn contains_any(wanted: impl IntoIterator<Item = impl Into<Value>>) -> Rule {
    let wanted = values(wanted);
    elements("array::contains_any".to_owned(), move |items| {
        wanted.iter().any(|w| has(items, w))
    })
}

#[must_use]
pub fn contains_none(unwanted: impl IntoIterator<Item = impl Into<Value>>) -> Rule {
    let unwanted = values(unwanted);
    elements("array::contains_none".to_owned(), move |items| {
        !unwanted.iter().any(|u| has(items, u))
    })
}

#[must_use]
pub fn starts_with(prefix: impl IntoIterator<Item = impl Into<Value>>) -> Rule {
    let prefix = values(prefix);
    elements("array::starts_with".to_owned(), move |items| {
        prefix.len() <= items.len() && prefix.iter().zip(items).all(|(p, i)| strict_eq(p, i))
    })
}

#[must_use]
pub fn ends_with(suffix: impl IntoIterator<Item = impl Into<Value>>) -> Rule {
    let suffix = values(suffix);
    elements("array::ends_with".to_owned(), move |items| {
        suffix.len() <= items.len()
            && suffix
                .iter()
                .zip(&items[items.len() - suffix.len()..])
                .all(|(s, i)| strict_eq(s, i))
    })
}

/// Exactly `len` elements.
#[must_use]
pub fn size(len: usize) -> Rule {
    elements(format!("array::size({len})"), move |items| items.len() == len)
}

/// Between `min` and `max` elements, inclusive.
#[must_use]
pub fn range(min: usize, max: usize) -> Rule {
    elements(format!("array::range({min}, {max})"), move |items| {
        (min..=max).contains(&items.len())
    })
}

#[must_use]
pub fn min(len: usize) -> Rule {
    elements(format!("array::min({len})"), move |items| items.len() >= len)
}

#[must_use]
pub fn max(len: usize) -> Rule {
    elements(format!("array::max({len})"), move |items| items.len() <= len)
}

/// Every element matches `rule`.
///
/// Unlike a composite, this applies any rule kind element-wise and rejects
/// non-array values.
#[must_use]
pub fn each(rule: impl Into<Rule>) -> Rule {
    let rule = rule.into();
    elements(format!("array::each({rule})"), move |items| {
        items.iter().all(|item| rule.matches(Some(item)))
    })
}
