use rubric::predicates::{int, string};
use rubric::{RuleSetBuilder, json};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    // Define rules
    let ruleset = RuleSetBuilder::new()
        .field("status", "active")
        .field("age", int::range(18, 65))
        .field("nickname:optional", string::max(12))
        .build();

    println!("{ruleset}");

    for subject in [
        json!({ "status": "active", "age": 40 }),
        json!({ "status": "active", "age": 70, "nickname": "ada" }),
        json!({ "status": "inactive", "age": 30 }),
    ] {
        println!("{subject} -> {}", ruleset.test(&subject));
    }
}
