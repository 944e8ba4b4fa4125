use std::fmt;

/// Annotations parsed out of a raw ruleset key.
///
/// `"hello:score(20):optional"` yields the bare key `hello`, optional, with a
/// weight of `20`. Produced once per key when a [`RuleSet`](super::RuleSet)
/// is built, and shared by testing, breakdowns and scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyTag {
    key: String,
    optional: bool,
    weight: f64,
}

impl KeyTag {
    pub(crate) fn new(key: impl Into<String>, optional: bool, weight: f64) -> Self {
        Self {
            key: key.into(),
            optional,
            weight,
        }
    }

    /// Parse a raw key. See [`parse_key`](crate::parse::parse_key).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        crate::parse::parse_key(raw)
    }

    /// The field name read from the subject.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether an absent field is acceptable.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Score weight, `1` by default and `NaN` when the score tag was not numeric.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if self.optional {
            write!(f, " (optional)")?;
        }
        if self.weight != 1.0 {
            write!(f, " x{}", self.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_through_accessors() {
        let tag = KeyTag::parse("key:optional:score(40)");
        assert_eq!(tag.key(), "key");
        assert!(tag.is_optional());
        assert_eq!(tag.weight(), 40.0);
    }

    #[test]
    fn display_plain() {
        assert_eq!(KeyTag::parse("name").to_string(), "name");
    }

    #[test]
    fn display_tagged() {
        assert_eq!(
            KeyTag::parse("bar:score(10):optional").to_string(),
            "bar (optional) x10"
        );
    }

    #[test]
    fn tags_are_case_sensitive() {
        let tag = KeyTag::parse("bar:OPTIONAL");
        assert_eq!(tag.key(), "bar:OPTIONAL");
        assert!(!tag.is_optional());
    }
}
