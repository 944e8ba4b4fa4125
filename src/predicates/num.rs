//! Numbers, including strings that hold a finite number.

use crate::value::as_number;
use crate::Rule;

fn numeric(name: String, test: impl Fn(f64) -> bool + Send + Sync + 'static) -> Rule {
    Rule::named_predicate(name, move |v| as_number(v).is_some_and(&test))
}

#[must_use]
pub fn number() -> Rule {
    Rule::named_predicate("num::number", |v| as_number(v).is_some())
}

/// Inclusive on both ends.
#[must_use]
pub fn range(min: f64, max: f64) -> Rule {
    numeric(format!("num::range({min}, {max})"), move |n| {
        n >= min && n <= max
    })
}

#[must_use]
pub fn greater_than(bound: f64) -> Rule {
    numeric(format!("num::greater_than({bound})"), move |n| n > bound)
}

#[must_use]
pub fn less_than(bound: f64) -> Rule {
    numeric(format!("num::less_than({bound})"), move |n| n < bound)
}

#[must_use]
pub fn min(bound: f64) -> Rule {
    numeric(format!("num::min({bound})"), move |n| n >= bound)
}

#[must_use]
pub fn max(bound: f64) -> Rule {
    numeric(format!("num::max({bound})"), move |n| n <= bound)
}

#[must_use]
pub fn positive() -> Rule {
    numeric("num::positive".to_owned(), |n| n > 0.0)
}

#[must_use]
pub fn negative() -> Rule {
    numeric("num::negative".to_owned(), |n| n < 0.0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn check(rule: &Rule, v: serde_json::Value) -> bool {
        rule.matches(Some(&v))
    }

    #[test]
    fn number_accepts_numeric_strings() {
        let rule = number();
        assert!(check(&rule, json!(1)));
        assert!(check(&rule, json!(-2.5)));
        assert!(check(&rule, json!("12")));
        assert!(!check(&rule, json!("twelve")));
        assert!(!check(&rule, json!(true)));
        assert!(!check(&rule, json!(null)));
    }

    #[test]
    fn range_is_inclusive() {
        let rule = range(18.0, 65.0);
        assert!(check(&rule, json!(18)));
        assert!(check(&rule, json!(40)));
        assert!(check(&rule, json!(65)));
        assert!(!check(&rule, json!(70)));
        assert!(!check(&rule, json!(17.9)));
        assert!(!check(&rule, json!([18, 19])));
    }

    #[test]
    fn bounds() {
        assert!(check(&greater_than(1.0), json!(2)));
        assert!(!check(&greater_than(1.0), json!(1)));
        assert!(check(&less_than(1.0), json!(0.5)));
        assert!(check(&min(1.0), json!(1)));
        assert!(check(&max(1.0), json!("1")));
        assert!(!check(&max(1.0), json!(1.01)));
    }

    #[test]
    fn sign() {
        assert!(check(&positive(), json!(0.1)));
        assert!(!check(&positive(), json!(0)));
        assert!(check(&negative(), json!(-1)));
        assert!(!check(&negative(), json!(0)));
    }

    #[test]
    fn name_is_descriptive() {
        match range(1.0, 2.5) {
            Rule::Predicate(p) => assert_eq!(p.name(), "num::range(1, 2.5)"),
            other => panic!("expected Predicate, got {other:?}"),
        }
    }
}
