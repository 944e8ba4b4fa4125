mod breakdown;
mod error;
mod key_tag;
mod rule;
mod ruleset;
mod score;
pub mod value;

pub use breakdown::{Breakdown, Outcome};
pub use error::RuleError;
pub use key_tag::KeyTag;
pub use rule::{OPTIONAL, Predicate, Rule};
pub use ruleset::{Field, RuleSet, RuleSetBuilder};
pub use score::{Points, Score, ScoreBreakdown};
