//! Strings. Lengths are counted in characters.

use crate::Rule;

fn text(name: String, test: impl Fn(&str) -> bool + Send + Sync + 'static) -> Rule {
    Rule::named_predicate(name, move |v| v.as_str().is_some_and(&test))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[must_use]
pub fn string() -> Rule {
    Rule::named_predicate("string::string", serde_json::Value::is_string)
}

#[must_use]
pub fn contains(needle: impl Into<String>) -> Rule {
    let needle = needle.into();
    text(format!("string::contains({needle:?})"), move |s| {
        s.contains(needle.as_str())
    })
}

#[must_use]
pub fn contains_ignore_case(needle: impl Into<String>) -> Rule {
    let needle = needle.into().to_lowercase();
    text(format!("string::contains_ignore_case({needle:?})"), move |s| {
        s.to_lowercase().contains(needle.as_str())
    })
}

#[must_use]
pub fn starts_with(prefix: impl Into<String>) -> Rule {
    let prefix = prefix.into();
    text(format!("string::starts_with({prefix:?})"), move |s| {
        s.starts_with(prefix.as_str())
    })
}

#[must_use]
pub fn ends_with(suffix: impl Into<String>) -> Rule {
    let suffix = suffix.into();
    text(format!("string::ends_with({suffix:?})"), move |s| {
        s.ends_with(suffix.as_str())
    })
}

/// Exactly `len` characters.
#[must_use]
pub fn size(len: usize) -> Rule {
    text(format!("string::size({len})"), move |s| char_len(s) == len)
}

/// Between `min` and `max` characters, inclusive.
#[must_use]
pub fn range(min: usize, max: usize) -> Rule {
    text(format!("string::range({min}, {max})"), move |s| {
        (min..=max).contains(&char_len(s))
    })
}

#[must_use]
pub fn min(len: usize) -> Rule {
    text(format!("string::min({len})"), move |s| char_len(s) >= len)
}

#[must_use]
pub fn max(len: usize) -> Rule {
    text(format!("string::max({len})"), move |s| char_len(s) <= len)
}
