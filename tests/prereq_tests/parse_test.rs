use pretty_assertions::assert_eq;
use prereq::{parse_prereq_string, ExprNode, PrereqTree};

use super::course;

fn parse_expr(input: &str) -> ExprNode {
    parse_prereq_string(input)
        .unwrap()
        .into_expr()
        .expect("expected an expression")
}

#[test]
fn it_parses_the_catalog_example() {
    assert_eq!(
        parse_expr("21-127 and (15-151 or 15-122)"),
        ExprNode::and(vec![
            course("21-127"),
            ExprNode::or(vec![course("15-151"), course("15-122")]),
        ])
    );
}

#[test]
fn it_parses_a_single_course() {
    assert_eq!(parse_expr("15-122"), course("15-122"));
    assert_eq!(parse_expr("15122"), course("15122"));
    assert_eq!(parse_expr("  15-122\n"), course("15-122"));
}

#[test]
fn it_keeps_source_order() {
    assert_eq!(
        parse_expr("15-112 and 15-122 and 15-150"),
        ExprNode::and(vec![course("15-112"), course("15-122"), course("15-150")])
    );
    assert_eq!(
        parse_expr("15-150 or 15-112"),
        ExprNode::or(vec![course("15-150"), course("15-112")])
    );
}

#[test]
fn it_parses_grouped_conjunctions() {
    assert_eq!(
        parse_expr("(15-122 and 15-151) or (21-127 and 21-128)"),
        ExprNode::or(vec![
            ExprNode::and(vec![course("15-122"), course("15-151")]),
            ExprNode::and(vec![course("21-127"), course("21-128")]),
        ])
    );
}

#[test]
fn it_ignores_whitespace_runs() {
    assert_eq!(
        parse_prereq_string("15-122  and   15-151").unwrap(),
        parse_prereq_string("15-122 and 15-151").unwrap()
    );
    assert_eq!(
        parse_prereq_string("(15-122\tor\n15-150)and 21-127").unwrap(),
        parse_prereq_string("(15-122 or 15-150) and 21-127").unwrap()
    );
}

#[test]
fn it_returns_no_prerequisites_for_blank_input() {
    assert_eq!(parse_prereq_string("").unwrap(), PrereqTree::NoPrerequisites);
    assert_eq!(parse_prereq_string("   ").unwrap(), PrereqTree::NoPrerequisites);
}

#[test]
fn it_keeps_singleton_groups() {
    assert_eq!(parse_expr("(15-122)"), ExprNode::or(vec![course("15-122")]));
}

#[test]
fn it_lists_referenced_courses() {
    let tree = parse_prereq_string("21-127 and (15-151 or 15-122)").unwrap();
    assert_eq!(tree.course_ids(), vec!["21-127", "15-151", "15-122"]);
}

#[test]
fn it_serializes_for_renderers() {
    let tree = parse_prereq_string("15-122 or 15-150").unwrap();
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        r#"{"tag":"or","children":[{"tag":"course","value":"15-122"},{"tag":"course","value":"15-150"}]}"#
    );
    assert_eq!(
        serde_json::to_string(&parse_prereq_string("").unwrap()).unwrap(),
        "null"
    );
}

#[test]
fn it_renders_canonical_syntax() {
    let tree = parse_prereq_string("21-127   and (15-151 or 15-122)").unwrap();
    assert_eq!(tree.to_string(), "21-127 and (15-151 or 15-122)");
    assert_eq!(parse_prereq_string(&tree.to_string()).unwrap(), tree);
}
