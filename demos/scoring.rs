use rubric::predicates::string;
use rubric::{RuleSetBuilder, json};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    // Heavier weights mark the fields that matter most for a match.
    let ruleset = RuleSetBuilder::new()
        .field("firstName", "John")
        .field("lastName:score(10)", "Doe")
        .field("nickname:score(30)", string::contains_ignore_case("john"))
        .field("age:score(20)", 42_i64)
        .build();

    let candidates = [
        json!({ "firstName": "John", "lastName": "Doe", "nickname": "Johnny", "age": 42 }),
        json!({ "firstName": "John", "lastName": "Doe", "nickname": "Johnny", "age": 0 }),
        json!({ "firstName": "Jane", "lastName": "Roe", "nickname": "JJ" }),
    ];

    for candidate in &candidates {
        let score = ruleset.score(candidate);
        println!("{score} ({:.0}%)", score.ratio() * 100.0);
        println!("  {}", ruleset.score_breakdown(candidate));
    }
}
