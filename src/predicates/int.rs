//! Integral numbers. Strings are never coerced; `3.0` counts as an integer.

use serde_json::Value;

use crate::Rule;

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn as_int(value: &Value) -> Option<i64> {
    let n = value.as_number()?;
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    // i64::MAX as f64 rounds up, so the upper bound is exclusive
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn integral(name: String, test: impl Fn(i64) -> bool + Send + Sync + 'static) -> Rule {
    Rule::named_predicate(name, move |v| as_int(v).is_some_and(&test))
}

#[must_use]
pub fn integer() -> Rule {
    Rule::named_predicate("int::integer", |v| as_int(v).is_some())
}

/// Inclusive on both ends.
#[must_use]
pub fn range(min: i64, max: i64) -> Rule {
    integral(format!("int::range({min}, {max})"), move |n| {
        n >= min && n <= max
    })
}

#[must_use]
pub fn greater_than(bound: i64) -> Rule {
    integral(format!("int::greater_than({bound})"), move |n| n > bound)
}

#[must_use]
pub fn less_than(bound: i64) -> Rule {
    integral(format!("int::less_than({bound})"), move |n| n < bound)
}

#[must_use]
pub fn min(bound: i64) -> Rule {
    integral(format!("int::min({bound})"), move |n| n >= bound)
}

#[must_use]
pub fn max(bound: i64) -> Rule {
    integral(format!("int::max({bound})"), move |n| n <= bound)
}

#[must_use]
pub fn even() -> Rule {
    integral("int::even".to_owned(), |n| n % 2 == 0)
}

#[must_use]
pub fn odd() -> Rule {
    integral("int::odd".to_owned(), |n| n % 2 != 0)
}

#[must_use]
pub fn positive() -> Rule {
    integral("int::positive".to_owned(), |n| n > 0)
}

#[must_use]
pub fn negative() -> Rule {
    integral("int::negative".to_owned(), |n| n < 0)
}
