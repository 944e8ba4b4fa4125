use std::fmt;

/// Per-field pass/fail report returned by
/// [`RuleSet::breakdown()`](super::ruleset::RuleSet::breakdown).
///
/// Mirrors the ruleset's shape: one entry per field, in declaration order,
/// keyed by bare key. Composite rules are reported as a single outcome.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Breakdown {
    /// The subject was not an object, so no field was evaluated.
    NotAnObject,
    Fields(Vec<(String, Outcome)>),
}

/// The result recorded for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Leaf(bool),
    /// The field's rule was a nested ruleset and its value an object.
    Nested(Breakdown),
}

impl Outcome {
    /// Whether this outcome, and everything under it, passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        match self {
            Outcome::Leaf(ok) => *ok,
            Outcome::Nested(inner) => inner.passed(),
        }
    }
}

impl Breakdown {
    /// The outcome recorded for a bare key, if the ruleset declares it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Outcome> {
        self.iter().find(|(k, _)| *k == key).map(|(_, o)| o)
    }

    /// Entries in declaration order. Empty for [`Breakdown::NotAnObject`].
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        let entries: &[(String, Outcome)] = match self {
            Breakdown::NotAnObject => &[],
            Breakdown::Fields(entries) => entries,
        };
        entries.iter().map(|(k, o)| (k.as_str(), o))
    }

    /// `true` iff every leaf passed. Agrees with [`RuleSet::test()`](super::RuleSet::test).
    #[must_use]
    pub fn passed(&self) -> bool {
        match self {
            Breakdown::NotAnObject => false,
            Breakdown::Fields(entries) => entries.iter().all(|(_, o)| o.passed()),
        }
    }

    /// Dotted paths of the failing leaves, in declaration order.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_failures(self, "", &mut out);
        out
    }
}

fn collect_failures(breakdown: &Breakdown, prefix: &str, out: &mut Vec<String>) {
    for (key, outcome) in breakdown.iter() {
        let path = if prefix.is_empty() {
            key.to_owned()
        } else {
            format!("{prefix}.{key}")
        };
        match outcome {
            Outcome::Leaf(false) | Outcome::Nested(Breakdown::NotAnObject) => out.push(path),
            Outcome::Leaf(true) => {}
            Outcome::Nested(inner) => collect_failures(inner, &path, out),
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakdown::NotAnObject => write!(f, "not an object"),
            Breakdown::Fields(entries) => {
                write!(f, "{{")?;
                for (i, (key, outcome)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {outcome}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Leaf(true) => write!(f, "pass"),
            Outcome::Leaf(false) => write!(f, "fail"),
            Outcome::Nested(inner) => write!(f, "{inner}"),
        }
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{Breakdown, Outcome};

    /// Fields serialize as a map; a non-object subject as `false`.
    impl Serialize for Breakdown {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Breakdown::NotAnObject => serializer.serialize_bool(false),
                Breakdown::Fields(entries) => {
                    let mut map = serializer.serialize_map(Some(entries.len()))?;
                    for (key, outcome) in entries {
                        map.serialize_entry(key, outcome)?;
                    }
                    map.end()
                }
            }
        }
    }

    impl Serialize for Outcome {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Outcome::Leaf(ok) => serializer.serialize_bool(*ok),
                Outcome::Nested(inner) => inner.serialize(serializer),
            }
        }
    }
}
