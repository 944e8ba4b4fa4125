use std::fmt;

use serde_json::Value;

use super::breakdown::Breakdown;
use super::error::RuleError;
use super::key_tag::KeyTag;
use super::rule::Rule;
use super::score::{Score, ScoreBreakdown};

/// Builder for constructing a [`RuleSet`].
///
/// Keys may carry `:optional` and `:score(N)` tags; they are parsed once here.
///
/// # Example
///
/// ```
/// use rubric::{RuleSetBuilder, json, predicates::num};
///
/// let ruleset = RuleSetBuilder::new()
///     .field("status", "active")
///     .field("age", num::range(18.0, 65.0))
///     .field("role:optional", "admin")
///     .build();
///
/// assert!(ruleset.test(&json!({ "status": "active", "age": 40 })));
/// assert!(!ruleset.test(&json!({ "status": "active", "age": 70 })));
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    fields: Vec<Field>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field rule under a raw (possibly tagged) key.
    #[must_use]
    pub fn field(mut self, raw_key: &str, rule: impl Into<Rule>) -> Self {
        self.fields.push(Field::new(raw_key, rule.into()));
        self
    }

    /// Add a nested ruleset defined by a closure.
    #[must_use]
    pub fn nested(self, raw_key: &str, f: impl FnOnce(RuleSetBuilder) -> RuleSetBuilder) -> Self {
        let inner = f(RuleSetBuilder::new()).build();
        self.field(raw_key, Rule::Nested(inner))
    }

    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet {
            fields: self.fields,
        }
    }
}

/// One entry of a ruleset: the raw key, its parsed tag, and its rule.
#[derive(Debug, Clone)]
pub struct Field {
    raw_key: String,
    tag: KeyTag,
    rule: Rule,
}

impl Field {
    pub(crate) fn new(raw_key: &str, rule: Rule) -> Self {
        Self {
            raw_key: raw_key.to_owned(),
            tag: KeyTag::parse(raw_key),
            rule,
        }
    }

    /// The key as written, tags included.
    #[must_use]
    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }

    #[must_use]
    pub fn tag(&self) -> &KeyTag {
        &self.tag
    }

    /// Shortcut for `self.tag().key()`.
    #[must_use]
    pub fn key(&self) -> &str {
        self.tag.key()
    }

    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }
}

/// An immutable, ordered set of field rules. Thread-safe and designed to be
/// shared behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub(crate) fields: Vec<Field>,
}

impl RuleSet {
    /// Build a ruleset from a JSON object, deciding each rule's kind from the
    /// shape of its value.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NotAnObject`] if `value` is not an object.
    pub fn from_json(value: Value) -> Result<Self, RuleError> {
        crate::compile::compile_ruleset(value)
    }

    /// Whether `subject` satisfies every field rule.
    ///
    /// Stops at the first failing field. A subject that is not an object fails.
    #[must_use]
    pub fn test(&self, subject: &Value) -> bool {
        crate::evaluate::test(self, subject)
    }

    /// Per-field pass/fail report. Every field is evaluated.
    pub fn breakdown(&self, subject: &Value) -> Breakdown {
        crate::evaluate::breakdown(self, subject)
    }

    /// Weighted score of `subject`.
    pub fn score(&self, subject: &Value) -> Score {
        crate::score::score(self, &self.breakdown(subject))
    }

    /// Achieved points per field, shaped like the ruleset.
    pub fn score_breakdown(&self, subject: &Value) -> ScoreBreakdown {
        crate::score::score_breakdown(self, &self.breakdown(subject))
    }

    /// Sum of all leaf weights. Equal to `score(..).total()` for any subject.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        crate::score::total_weight(self)
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by its bare key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key() == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>, R: Into<Rule>> FromIterator<(K, R)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (K, R)>>(iter: T) -> Self {
        RuleSet {
            fields: iter
                .into_iter()
                .map(|(k, r)| Field::new(k.as_ref(), r.into()))
                .collect(),
        }
    }
}

impl TryFrom<Value> for RuleSet {
    type Error = RuleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", field.tag, field.rule)?;
        }
        write!(f, "}}")
    }
}
