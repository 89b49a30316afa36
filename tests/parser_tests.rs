// tests/parser_tests.rs

use query_filter::ast::{Combinator, Expression, Logic, Node, OpKind, Term};
use query_filter::parser::{ParseError, Parser, parse_syntax};
use rstest::rstest;

fn expr(op: OpKind, field: &str, value: &str) -> Node {
    Node::Expression(Expression::new(op, field, value))
}

fn eq(field: &str, value: &str) -> Node {
    expr(OpKind::Eq, field, value)
}

fn combinator(logic: Logic, children: Vec<Node>) -> Node {
    Node::Combinator(Combinator { logic, children })
}

fn nodes(input: &str) -> Vec<Node> {
    Parser::new().parse_query(input).unwrap().nodes
}

// ============================================================================
// Syntax tree
// ============================================================================

#[test]
fn test_syntax_records_separators() {
    let tree = parse_syntax(r#""a:1|b:2", c>3"#).unwrap();
    assert_eq!(tree.entries.len(), 2);
    assert_eq!(tree.entries[0].separator, Some(Logic::And));
    assert_eq!(tree.entries[1].separator, None);

    match &tree.entries[0].term {
        Term::Group(group) => {
            assert_eq!(group.position.offset, 0);
            assert_eq!(group.entries.len(), 2);
            assert_eq!(group.entries[0].separator, Some(Logic::Or));
            assert_eq!(group.entries[1].term.field, "b");
        }
        other => panic!("Expected group, got {:?}", other),
    }

    match &tree.entries[1].term {
        Term::Comparison(comparison) => {
            assert_eq!(comparison.operator, OpKind::Gte);
            assert_eq!(comparison.position.offset, 11);
        }
        other => panic!("Expected comparison, got {:?}", other),
    }
}

// ============================================================================
// Filter tree
// ============================================================================

#[test]
fn test_operator_table() {
    let test_cases = vec![
        (":", Some(OpKind::Eq), None),
        (">", Some(OpKind::Gte), Some("$gte")),
        ("<", Some(OpKind::Lte), Some("$lte")),
    ];

    for (symbol, expected, key) in test_cases {
        let op = OpKind::from_symbol(symbol);
        assert_eq!(op, expected, "Failed for symbol: {}", symbol);
        assert_eq!(op.and_then(OpKind::document_key), key);
    }

    assert_eq!(OpKind::from_symbol(">="), None);
    assert_eq!(OpKind::from_symbol("::"), None);
}

#[test]
fn test_single_expression() {
    assert_eq!(nodes("x<5"), vec![expr(OpKind::Lte, "x", "5")]);
}

#[test]
fn test_implicit_and_passes_through() {
    assert_eq!(nodes("a:1 b:2"), vec![eq("a", "1"), eq("b", "2")]);
}

#[test]
fn test_group_without_separator_is_flattened() {
    assert_eq!(
        nodes(r#""x:y a:b" | c:d"#),
        vec![combinator(Logic::Or, vec![eq("x", "y"), eq("a", "b"), eq("c", "d")])]
    );
}

#[test]
fn test_grouped_combinators() {
    assert_eq!(
        nodes(r#""x:y|a:b","foo:bar""#),
        vec![combinator(
            Logic::And,
            vec![
                combinator(Logic::Or, vec![eq("x", "y"), eq("a", "b")]),
                eq("foo", "bar"),
            ]
        )]
    );
}

#[test]
fn test_mixed_separators_last_wins() {
    assert_eq!(
        nodes("a:1,b:2|c:3"),
        vec![combinator(Logic::Or, vec![eq("a", "1"), eq("b", "2"), eq("c", "3")])]
    );
    assert_eq!(
        nodes("a:1|b:2,c:3"),
        vec![combinator(Logic::And, vec![eq("a", "1"), eq("b", "2"), eq("c", "3")])]
    );
}

#[test]
fn test_group_separators_do_not_leak() {
    // Only top-level separators decide the top-level combinator
    assert_eq!(
        nodes(r#""a:1|b:2" c:3"#),
        vec![combinator(Logic::Or, vec![eq("a", "1"), eq("b", "2")]), eq("c", "3")]
    );
}

#[test]
fn test_trailing_separator() {
    assert_eq!(nodes("x:y,"), vec![combinator(Logic::And, vec![eq("x", "y")])]);
    assert_eq!(
        nodes(r#""x:y|""#),
        vec![combinator(Logic::Or, vec![eq("x", "y")])]
    );
}

#[test]
fn test_parser_is_reusable() {
    let parser = Parser::new();
    let first = parser.parse_query("a:1|b:2").unwrap();
    let second = parser.parse_query("c:3").unwrap();
    assert_eq!(first.nodes.len(), 1);
    assert_eq!(second.nodes, vec![eq("c", "3")]);
}

// ============================================================================
// Errors
// ============================================================================

#[rstest]
#[case("")]
#[case("   ")]
fn test_empty_input(#[case] input: &str) {
    assert_eq!(parse_syntax(input), Err(ParseError::EmptyInput));
}

#[test]
fn test_unterminated_group() {
    match parse_syntax(r#"a:1 "x:y"#) {
        Err(ParseError::UnterminatedGroup { position }) => assert_eq!(position.offset, 4),
        other => panic!("Expected UnterminatedGroup, got {:?}", other),
    }
}

#[test]
fn test_lone_trailing_quote() {
    assert!(matches!(
        parse_syntax(r#"x:y ""#),
        Err(ParseError::UnterminatedGroup { .. })
    ));
}

#[test]
fn test_empty_group() {
    assert!(matches!(
        parse_syntax(r#"x:y """#),
        Err(ParseError::EmptyGroup { .. })
    ));
}

#[test]
fn test_unknown_operator() {
    match parse_syntax("x>:y") {
        Err(ParseError::UnknownOperator { operator, position }) => {
            assert_eq!(operator, ">:");
            assert_eq!(position.offset, 1);
        }
        other => panic!("Expected UnknownOperator, got {:?}", other),
    }
}

#[rstest]
#[case("|x:y", '|')]
#[case(",x:y", ',')]
#[case("x:y||a:b", '|')]
#[case("x:y,|a:b", '|')]
#[case(r#""x:y" , , a:b"#, ',')]
fn test_unexpected_separator(#[case] input: &str, #[case] expected: char) {
    match parse_syntax(input) {
        Err(ParseError::UnexpectedSeparator { separator, .. }) => assert_eq!(separator, expected),
        other => panic!("Expected UnexpectedSeparator for {:?}, got {:?}", input, other),
    }
}

#[rstest]
#[case("x")]
#[case("x:")]
#[case("x:y z")]
#[case("x:y #")]
#[case(r#""x:""#)]
fn test_lexical_errors(#[case] input: &str) {
    assert!(
        matches!(parse_syntax(input), Err(ParseError::Lex(_))),
        "Expected a lexical error for {:?}",
        input
    );
}

#[test]
fn test_errors_report_positions() {
    let err = parse_syntax("a:1 | ,").unwrap_err();
    assert_eq!(err.position().map(|p| p.offset), Some(6));
    assert!(err.to_string().contains("line 1, column 7"));
    assert_eq!(ParseError::EmptyInput.position(), None);
}
