use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::error::RuleError;
use super::ruleset::RuleSet;

/// The optional marker.
///
/// Matches only when the field is absent. Useful on its own or as one of the
/// alternatives of an [`Rule::AnyOf`] to make that field optional.
pub const OPTIONAL: Rule = Rule::Optional;

/// One unit of validation logic, tested against a single field value.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Equal to this value, without coercion between kinds.
    Literal(Value),
    /// The field must be absent.
    Absent,
    /// An opaque check supplied by the caller.
    Predicate(Predicate),
    /// A regular expression tested against the value's string form.
    Pattern(Regex),
    /// The value must be an object satisfying this ruleset.
    Nested(RuleSet),
    /// A composite: at least one alternative must match. Sequence values are
    /// checked element by element.
    AnyOf(Vec<Rule>),
    /// A conjunct group: every rule must match.
    AllOf(Vec<Rule>),
    /// See [`OPTIONAL`].
    Optional,
}

impl Rule {
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Rule::Literal(value.into())
    }

    #[must_use]
    pub fn predicate(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Rule::Predicate(Predicate::new("predicate", check))
    }

    #[must_use]
    pub fn named_predicate(
        name: impl Into<Cow<'static, str>>,
        check: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Rule::Predicate(Predicate::new(name, check))
    }

    /// Compile `pattern` into a [`Rule::Pattern`].
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn pattern(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Rule::Pattern)
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    #[must_use]
    pub fn any_of(rules: impl IntoIterator<Item = impl Into<Rule>>) -> Self {
        Rule::AnyOf(rules.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn all_of(rules: impl IntoIterator<Item = impl Into<Rule>>) -> Self {
        Rule::AllOf(rules.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn nested(ruleset: RuleSet) -> Self {
        Rule::Nested(ruleset)
    }

    /// Test a single field value; `None` means the field is absent.
    #[must_use]
    pub fn matches(&self, value: Option<&Value>) -> bool {
        crate::evaluate::matches(self, value)
    }

    /// Combine with another rule into a composite of alternatives.
    #[must_use]
    pub fn or(self, other: impl Into<Rule>) -> Rule {
        match self {
            Rule::AnyOf(mut items) => {
                items.push(other.into());
                Rule::AnyOf(items)
            }
            this => Rule::AnyOf(vec![this, other.into()]),
        }
    }

    /// Combine with another rule into a conjunct group.
    #[must_use]
    pub fn and(self, other: impl Into<Rule>) -> Rule {
        match self {
            Rule::AllOf(mut items) => {
                items.push(other.into());
                Rule::AllOf(items)
            }
            this => Rule::AllOf(vec![this, other.into()]),
        }
    }
}

/// A caller-supplied check with a name for diagnostics.
///
/// Only an explicit `true` counts as a match. A panicking check is not caught.
#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        check: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Literal(v) => write!(f, "{v}"),
            Rule::Absent => write!(f, "absent"),
            Rule::Predicate(p) => write!(f, "{}", p.name()),
            Rule::Pattern(re) => write!(f, "/{}/", re.as_str()),
            Rule::Nested(rs) => write!(f, "{rs}"),
            Rule::AnyOf(items) => write_list(f, items, " OR "),
            Rule::AllOf(items) => write_list(f, items, " AND "),
            Rule::Optional => write!(f, "optional"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Rule], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, ")")
}

impl From<&str> for Rule {
    fn from(v: &str) -> Self {
        Rule::Literal(Value::from(v))
    }
}

impl From<String> for Rule {
    fn from(v: String) -> Self {
        Rule::Literal(Value::from(v))
    }
}

impl From<i64> for Rule {
    fn from(v: i64) -> Self {
        Rule::Literal(Value::from(v))
    }
}

impl From<i32> for Rule {
    fn from(v: i32) -> Self {
        Rule::Literal(Value::from(v))
    }
}

impl From<f64> for Rule {
    fn from(v: f64) -> Self {
        Rule::Literal(Value::from(v))
    }
}

impl From<bool> for Rule {
    fn from(v: bool) -> Self {
        Rule::Literal(Value::from(v))
    }
}

impl From<Regex> for Rule {
    fn from(v: Regex) -> Self {
        Rule::Pattern(v)
    }
}

impl From<RuleSet> for Rule {
    fn from(v: RuleSet) -> Self {
        Rule::Nested(v)
    }
}

impl From<Vec<Rule>> for Rule {
    fn from(v: Vec<Rule>) -> Self {
        Rule::AnyOf(v)
    }
}

/// Decide the rule kind from the shape of a JSON value: scalars are literals,
/// objects nested rulesets and arrays composites.
impl From<Value> for Rule {
    fn from(v: Value) -> Self {
        crate::compile::compile_rule(v)
    }
}
