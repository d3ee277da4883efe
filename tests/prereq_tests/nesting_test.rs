use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use prereq::{parse_prereq_string, EngineConfig, PrereqEngine, PrereqError};

// Well under a second even unoptimized; exponential backtracking at these
// depths takes hours.
const TIME_LIMIT: Duration = Duration::from_secs(2);

/// `(...((15-122 and 15-151) and 15-151)...) and 15-151`, with `depth`
/// levels of parentheses.
fn nested_conjunction(depth: usize) -> String {
    let mut expr = "15-122 and 15-151".to_string();
    for _ in 0..depth {
        expr = format!("({}) and 15-151", expr);
    }
    expr
}

/// Alternates `and` / `or` between levels, so every group is first tried
/// with the wrong operator.
fn nested_alternating(depth: usize) -> String {
    let mut expr = "15-122 or 15-151".to_string();
    for level in 0..depth {
        let keyword = if level % 2 == 0 { "and" } else { "or" };
        expr = format!("({}) {} 21-127", expr, keyword);
    }
    expr
}

#[test]
fn it_parses_deep_conjunctions_quickly() {
    let input = nested_conjunction(30);
    let started = Instant::now();
    let tree = parse_prereq_string(&input).unwrap();
    assert!(started.elapsed() < TIME_LIMIT, "took {:?}", started.elapsed());

    let node = tree.expr().unwrap();
    assert_eq!(node.depth(), 31);
    assert_eq!(node.course_ids().len(), 32);
}

#[test]
fn it_parses_at_the_default_nesting_limit() {
    let limit = EngineConfig::default().max_nesting_depth;
    for input in [nested_conjunction(limit), nested_alternating(limit)] {
        let started = Instant::now();
        let tree = PrereqEngine::default().parse(&input).unwrap();
        assert!(started.elapsed() < TIME_LIMIT, "took {:?}", started.elapsed());
        assert_eq!(tree.expr().unwrap().depth(), limit + 1);
        assert_eq!(tree.to_string(), input);
    }
}

#[test]
fn it_rejects_deep_malformed_input_quickly() {
    let limit = EngineConfig::default().max_nesting_depth;
    let input = format!("{} or 21-128", nested_conjunction(limit));
    let started = Instant::now();
    let error = parse_prereq_string(&input).unwrap_err();
    assert!(started.elapsed() < TIME_LIMIT, "took {:?}", started.elapsed());
    assert!(matches!(error, PrereqError::Parse { .. }));
    assert_eq!(error.remaining(), Some("or 21-128"));
}
