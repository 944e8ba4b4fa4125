use thiserror::Error;

/// Errors raised while constructing rules. Evaluation itself never fails.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("ruleset must be built from an object, found {found}")]
    NotAnObject { found: &'static str },
}
