mod grammar;

use crate::KeyTag;

use grammar::Tag;

/// Parse a raw ruleset key into its [`KeyTag`].
///
/// Recognises `:optional` and `:score(N)` annotations at the end of the key,
/// in any order and any number of times. Anything else, including a
/// malformed tag, stays part of the bare key.
#[must_use]
pub fn parse_key(raw: &str) -> KeyTag {
    let (bare, tags) = grammar::split_tags(raw);

    let mut optional = false;
    let mut weight = 1.0;
    for tag in tags {
        match tag {
            Tag::Optional => optional = true,
            Tag::Score(text) => weight = text.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }

    if weight.is_nan() {
        tracing::warn!(key = raw, "score tag is not numeric; weight is NaN");
    }

    KeyTag::new(bare, optional, weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_key_defaults() {
        let tag = parse_key("status");
        assert_eq!(tag.key(), "status");
        assert!(!tag.is_optional());
        assert_eq!(tag.weight(), 1.0);
    }

    #[test]
    fn last_score_tag_wins() {
        let tag = parse_key("points:score(2):score(5)");
        assert_eq!(tag.key(), "points");
        assert_eq!(tag.weight(), 5.0);
    }

    #[test]
    fn fractional_weight() {
        assert_eq!(parse_key("x:score(0.5)").weight(), 0.5);
    }

    #[test]
    fn weight_ignores_surrounding_whitespace() {
        assert_eq!(parse_key("a:score( 5)").weight(), 5.0);
        assert_eq!(parse_key("a:score(2.5 )").weight(), 2.5);
    }

    #[test]
    fn non_numeric_weight_is_nan() {
        let tag = parse_key("foo:score(invalid)");
        assert_eq!(tag.key(), "foo");
        assert!(tag.weight().is_nan());
    }
}
