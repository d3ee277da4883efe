use proptest::prelude::*;
use prereq::{parse_prereq_string, ExprNode, PrereqTree};

fn course_id() -> impl Strategy<Value = String> {
    "[0-9]{2}-?[0-9]{3}"
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t\n]{1,4}"
}

/// Trees whose `And`/`Or` nodes have at least two children, so the
/// canonical rendering parses back without collapsing anything.
fn expr_tree() -> impl Strategy<Value = ExprNode> {
    let leaf = course_id().prop_map(ExprNode::course);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..5).prop_map(ExprNode::and),
            prop::collection::vec(inner, 2..5).prop_map(ExprNode::or),
        ]
    })
}

fn parse_expr(input: &str) -> ExprNode {
    match parse_prereq_string(input) {
        Ok(PrereqTree::Expr(node)) => node,
        other => panic!("{:?} did not parse to an expression: {:?}", input, other),
    }
}

proptest! {
    #[test]
    fn single_course_parses_to_an_atom(id in course_id()) {
        prop_assert_eq!(parse_expr(&id), ExprNode::course(id.clone()));
    }

    #[test]
    fn conjunction_keeps_source_order(ids in prop::collection::vec(course_id(), 2..6)) {
        let input = ids.join(" and ");
        let expected = ExprNode::and(ids.iter().cloned().map(ExprNode::course).collect());
        prop_assert_eq!(parse_expr(&input), expected);
    }

    #[test]
    fn disjunction_keeps_source_order(ids in prop::collection::vec(course_id(), 2..6)) {
        let input = ids.join(" or ");
        let expected = ExprNode::or(ids.iter().cloned().map(ExprNode::course).collect());
        prop_assert_eq!(parse_expr(&input), expected);
    }

    #[test]
    fn whitespace_runs_do_not_change_the_tree(
        ids in prop::collection::vec(course_id(), 2..6),
        seps in prop::collection::vec((separator(), separator()), 5),
        conjunction in any::<bool>(),
    ) {
        let keyword = if conjunction { "and" } else { "or" };
        let single = ids.join(format!(" {} ", keyword).as_str());
        let mut spaced = ids[0].clone();
        for (id, (before, after)) in ids[1..].iter().zip(&seps) {
            spaced.push_str(before);
            spaced.push_str(keyword);
            spaced.push_str(after);
            spaced.push_str(id);
        }
        prop_assert_eq!(
            parse_prereq_string(&spaced).unwrap(),
            parse_prereq_string(&single).unwrap()
        );
    }

    #[test]
    fn canonical_rendering_round_trips(tree in expr_tree()) {
        let rendered = tree.to_string();
        prop_assert_eq!(parse_expr(&rendered), tree);
    }

    #[test]
    fn course_ids_match_the_leaves(tree in expr_tree()) {
        let rendered = tree.to_string();
        let parsed = parse_prereq_string(&rendered).unwrap();
        prop_assert_eq!(parsed.course_ids(), tree.course_ids());
    }
}
