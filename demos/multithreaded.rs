use std::sync::Arc;
use std::thread;

use rubric::predicates::int;
use rubric::{RuleSetBuilder, json};

fn main() {
    let ruleset = Arc::new(
        RuleSetBuilder::new()
            .field("age:score(2)", int::min(18))
            .field("status", "active")
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rs = Arc::clone(&ruleset);
            thread::spawn(move || {
                let subject = json!({ "age": 16 + i, "status": "active" });
                let score = rs.score(&subject);
                println!("Thread {i}: {} ({score})", rs.test(&subject));
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
