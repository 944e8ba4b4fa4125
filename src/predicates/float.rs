//! Numbers with a fractional part.

use serde_json::Value;

use crate::Rule;

fn as_float(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() != 0.0)
}

fn fractional(name: String, test: impl Fn(f64) -> bool + Send + Sync + 'static) -> Rule {
    Rule::named_predicate(name, move |v| as_float(v).is_some_and(&test))
}

#[must_use]
pub fn float() -> Rule {
    Rule::named_predicate("float::float", |v| as_float(v).is_some())
}

/// Digits after the decimal point when written out in full, so `1.5e-7`
/// has eight.
fn fraction_digits(f: f64) -> usize {
    let written = format!("{f:e}");
    let (mantissa, exp) = written.split_once('e').unwrap_or((written.as_str(), "0"));
    let mantissa_digits = mantissa.split_once('.').map_or(0, |(_, frac)| frac.len());
    let exp = exp.parse::<i64>().unwrap_or(0);
    let digits = i64::try_from(mantissa_digits).unwrap_or(i64::MAX).saturating_sub(exp);
    usize::try_from(digits).unwrap_or(0)
}

/// At least `digits` digits after the decimal point.
#[must_use]
pub fn precision(digits: usize) -> Rule {
    fractional(format!("float::precision({digits})"), move |n| {
        fraction_digits(n) >= digits
    })
}

/// Inclusive on both ends.
#[must_use]
pub fn range(min: f64, max: f64) -> Rule {
    fractional(format!("float::range({min}, {max})"), move |n| {
        n >= min && n <= max
    })
}

#[must_use]
pub fn greater_than(bound: f64) -> Rule {
    fractional(format!("float::greater_than({bound})"), move |n| n > bound)
}

#[must_use]
pub fn less_than(bound: f64) -> Rule {
    fractional(format!("float::less_than({bound})"), move |n| n < bound)
}

#[must_use]
pub fn min(bound: f64) -> Rule {
    fractional(format!("float::min({bound})"), move |n| n >= bound)
}

#[must_use]
pub fn max(bound: f64) -> Rule {
    fractional(format!("float::max({bound})"), move |n| n <= bound)
}

#[must_use]
pub fn positive() -> Rule {
    fractional("float::positive".to_owned(), |n| n > 0.0)
}

#[must_use]
pub fn negative() -> Rule {
    fractional("float::negative".to_owned(), |n| n < 0.0)
}
