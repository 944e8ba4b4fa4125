//! Declarative validation of JSON-like objects.
//!
//! A [`RuleSet`] maps keys to [`Rule`]s. Testing a subject yields a boolean,
//! a [`Breakdown`] reports every field, and a [`Score`] weighs the fields by
//! their `:score(N)` tags.

mod compile;
mod evaluate;
pub mod parse;
pub mod predicates;
mod score;
mod types;

pub use serde_json::{Value, json};
pub use types::{
    Breakdown, Field, KeyTag, OPTIONAL, Outcome, Points, Predicate, Rule, RuleError, RuleSet,
    RuleSetBuilder, Score, ScoreBreakdown, value,
};
