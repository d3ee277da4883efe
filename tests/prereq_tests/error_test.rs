use pretty_assertions::assert_eq;
use prereq::{
    analyzer::ParseError, parse_prereq_string, EngineConfig, PrereqEngine, PrereqError,
    PrereqTree,
};

#[test]
fn it_rejects_mixed_operators() {
    let error = parse_prereq_string("15-122 and 15-151 or 21-127").unwrap_err();
    assert!(matches!(error, PrereqError::Parse { .. }));
    assert_eq!(error.remaining(), Some("or 21-127"));
}

#[test]
fn it_does_not_report_malformed_input_as_no_prerequisites() {
    for input in ["15-122 and", "or 15-122", "()", "15-122 15-151", "15-122)"] {
        let result = parse_prereq_string(input);
        assert!(
            !matches!(result, Ok(PrereqTree::NoPrerequisites)),
            "{:?} parsed as no prerequisites",
            input
        );
        assert!(result.is_err(), "{:?} should fail", input);
    }
}

#[test]
fn it_rejects_unbalanced_parentheses() {
    let error = parse_prereq_string("(15-122 and 15-151").unwrap_err();
    match error {
        PrereqError::Parse {
            remaining, source, ..
        } => {
            assert_eq!(remaining, "");
            assert!(matches!(
                source.root_cause(),
                ParseError::UnexpectedEOF { position: 4, .. }
            ));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn it_reports_unknown_tokens() {
    let error = parse_prereq_string("15-122 xor 15-151").unwrap_err();
    match error {
        PrereqError::Lex(lex) => {
            assert_eq!(lex.consumed, "15-122 ");
            assert_eq!(lex.remaining, "xor 15-151");
            assert_eq!(lex.position, 7);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn it_reports_truncated_course_ids() {
    let error = parse_prereq_string("15-12 and 15-151").unwrap_err();
    assert_eq!(error.remaining(), Some("15-12 and 15-151"));
}

#[test]
fn it_applies_engine_limits() {
    let engine = PrereqEngine::new(EngineConfig {
        max_input_length: 64,
        max_nesting_depth: 1,
    });
    assert!(engine.parse("(15-122 or 15-150) and 15-151").is_ok());
    assert!(matches!(
        engine.parse("((15-122 or 15-150) and 15-151) or 21-127"),
        Err(PrereqError::NestingTooDeep { depth: 2, limit: 1 })
    ));

    let long = vec!["15-122"; 20].join(" or ");
    assert!(matches!(
        engine.parse(&long),
        Err(PrereqError::InputTooLong { limit: 64, .. })
    ));
}

#[test]
fn it_loads_limits_from_json() {
    let config: EngineConfig = prereq::config::from_str(r#"{"max_input_length": 8}"#).unwrap();
    let engine = PrereqEngine::new(config);
    assert!(matches!(
        engine.parse("15-122 or 15-150"),
        Err(PrereqError::InputTooLong {
            length: 16,
            limit: 8
        })
    ));
}
