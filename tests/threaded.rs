use std::sync::Arc;
use std::thread;

use rubric::predicates::{int, string};
use rubric::{RuleSetBuilder, Score, json};

#[test]
fn evaluate_across_threads() {
    let ruleset = Arc::new(
        RuleSetBuilder::new()
            .field("age:score(2)", int::min(18))
            .field("status", "active")
            .field("nickname:optional", string::max(8))
            .build(),
    );

    let subjects = [
        json!({ "age": 25, "status": "active" }),
        json!({ "age": 30, "status": "active", "nickname": "far too long" }),
        json!({ "age": 15, "status": "active" }),
        json!({ "age": 25, "status": "inactive", "nickname": "ok" }),
    ];

    let handles: Vec<_> = subjects
        .into_iter()
        .map(|subject| {
            let rs = Arc::clone(&ruleset);
            thread::spawn(move || (rs.test(&subject), rs.score(&subject)))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(
        results,
        vec![
            (true, Score::new(4.0, 4.0)),
            (false, Score::new(3.0, 4.0)),
            (false, Score::new(2.0, 4.0)),
            (false, Score::new(3.0, 4.0)),
        ]
    );
}

#[test]
fn shared_ruleset_is_deterministic_under_contention() {
    let ruleset = Arc::new(
        RuleSetBuilder::new()
            .nested("address", |a| a.field("city", "London").field("zip:score(5)", string::size(3)))
            .build(),
    );
    let subject = Arc::new(json!({ "address": { "city": "London", "zip": "NW12" } }));
    let expected = ruleset.breakdown(&subject);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let rs = Arc::clone(&ruleset);
            let s = Arc::clone(&subject);
            thread::spawn(move || (0..200).map(|_| rs.breakdown(&s)).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        for breakdown in handle.join().unwrap() {
            assert_eq!(breakdown, expected);
        }
    }
}
