use rubric::predicates::{array, string};
use rubric::{Rule, RuleSetBuilder, json};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let ruleset = RuleSetBuilder::new()
        .field("name", string::range(1, 40))
        .field("tags", Rule::from("red").or("green").or("blue"))
        .field("roles", array::contains("member"))
        .nested("address", |a| {
            a.field("city", string::min(1))
                .field("zip", Rule::pattern(r"^\d{5}$").expect("valid pattern"))
        })
        .build();

    let subject = json!({
        "name": "Ada",
        "tags": ["red", "purple"],
        "roles": ["member", "admin"],
        "address": { "city": "London", "zip": "NW1" },
    });

    let breakdown = ruleset.breakdown(&subject);

    println!("{breakdown}");
    println!();
    println!("Passed: {}", breakdown.passed());
    println!("Failures: {:?}", breakdown.failures());
}
