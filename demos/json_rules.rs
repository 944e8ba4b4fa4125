use rubric::{RuleSet, json};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    // Arrays are alternatives; an array inside an array is an AND group.
    let ruleset = RuleSet::from_json(json!({
        "kind": "order",
        "currency": ["EUR", "USD"],
        "customer": {
            "id": [["vip", "vip"], "regular"],
            "email:optional": null,
        },
        "priority:score(5)": true,
    }))
    .expect("rules are an object");

    println!("{ruleset}");

    let order = json!({
        "kind": "order",
        "currency": "GBP",
        "customer": { "id": "regular" },
        "priority": true,
    });

    println!("test: {}", ruleset.test(&order));
    println!("breakdown: {}", ruleset.breakdown(&order));
    println!("score: {}", ruleset.score(&order));
}
