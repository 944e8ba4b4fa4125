use tracing::debug;

use crate::{Breakdown, Field, Outcome, Points, Rule, RuleSet, Score, ScoreBreakdown};

/// Weight a field's leaf outcome contributes to the total.
///
/// Nested rulesets carry their own weights; the outer key's weight is not
/// applied to them.
fn leaf_weight(field: &Field) -> f64 {
    match field.rule() {
        Rule::Nested(inner) => total_weight(inner),
        _ => field.tag().weight(),
    }
}

pub(crate) fn total_weight(ruleset: &RuleSet) -> f64 {
    ruleset.fields.iter().map(leaf_weight).sum()
}

fn leaf_points(field: &Field, passed: bool) -> f64 {
    if passed {
        leaf_weight(field)
    } else {
        0.0
    }
}

/// Pair each field with its outcome. Breakdown entries line up with the
/// ruleset's fields; a non-object subject counts every field as failed.
fn outcomes<'a>(
    ruleset: &'a RuleSet,
    breakdown: &'a Breakdown,
) -> impl Iterator<Item = (&'a Field, Option<&'a Outcome>)> {
    ruleset
        .fields
        .iter()
        .enumerate()
        .map(move |(i, field)| match breakdown {
            Breakdown::NotAnObject => (field, None),
            Breakdown::Fields(entries) => (field, entries.get(i).map(|(_, o)| o)),
        })
}

pub(crate) fn score(ruleset: &RuleSet, breakdown: &Breakdown) -> Score {
    let result = outcomes(ruleset, breakdown)
        .map(|(field, outcome)| match (field.rule(), outcome) {
            (Rule::Nested(inner), Some(Outcome::Nested(nested))) => score(inner, nested),
            (_, outcome) => {
                let passed = outcome.is_some_and(Outcome::passed);
                Score::new(leaf_points(field, passed), leaf_weight(field))
            }
        })
        .fold(Score::default(), |acc, s| acc + s);

    debug!(
        achieved = result.achieved(),
        total = result.total(),
        "score computed"
    );
    result
}

pub(crate) fn score_breakdown(ruleset: &RuleSet, breakdown: &Breakdown) -> ScoreBreakdown {
    let entries = outcomes(ruleset, breakdown)
        .map(|(field, outcome)| {
            let points = match (field.rule(), outcome) {
                (Rule::Nested(inner), Some(Outcome::Nested(nested))) => {
                    Points::Nested(score_breakdown(inner, nested))
                }
                (_, outcome) => {
                    Points::Leaf(leaf_points(field, outcome.is_some_and(Outcome::passed)))
                }
            };
            (field.key().to_owned(), points)
        })
        .collect();

    ScoreBreakdown::new(entries)
}
