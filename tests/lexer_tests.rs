// tests/lexer_tests.rs

use query_filter::ast::Token;
use query_filter::lexer::{LexError, Lexer};

fn tokens(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token()?;
        if token == Token::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

fn field(s: &str) -> Token {
    Token::Field(s.to_string())
}

fn op(s: &str) -> Token {
    Token::Operator(s.to_string())
}

fn value(s: &str) -> Token {
    Token::Value(s.to_string())
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_operators() {
    let test_cases = vec![(":", ":"), (">", ">"), ("<", "<")];

    for (symbol, expected) in test_cases {
        let input = format!("x{}y", symbol);
        assert_eq!(
            tokens(&input).unwrap(),
            vec![field("x"), op(expected), value("y")],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_operator_runs_are_one_token() {
    assert_eq!(tokens("x>:y").unwrap(), vec![field("x"), op(">:"), value("y")]);
}

#[test]
fn test_field_characters() {
    assert_eq!(
        tokens("created_at-2:x").unwrap(),
        vec![field("created_at-2"), op(":"), value("x")]
    );
}

#[test]
fn test_value_characters() {
    assert_eq!(
        tokens("url:/a/b.c:[0](1)_-").unwrap(),
        vec![field("url"), op(":"), value("/a/b.c:[0](1)_-")]
    );
}

#[test]
fn test_whitespace_between_parts() {
    assert_eq!(
        tokens("  x \t:\n y  ").unwrap(),
        vec![field("x"), op(":"), value("y")]
    );
}

#[test]
fn test_value_stops_at_quote() {
    assert_eq!(
        tokens("\"x:y\"").unwrap(),
        vec![Token::Quote, field("x"), op(":"), value("y"), Token::Quote]
    );
}

// ============================================================================
// Separators
// ============================================================================

#[test]
fn test_separators() {
    assert_eq!(
        tokens("a:1,b:2|c:3").unwrap(),
        vec![
            field("a"),
            op(":"),
            value("1"),
            Token::Comma,
            field("b"),
            op(":"),
            value("2"),
            Token::Pipe,
            field("c"),
            op(":"),
            value("3"),
        ]
    );
}

#[test]
fn test_adjacent_comparisons() {
    assert_eq!(
        tokens("a:1 b:2").unwrap(),
        vec![field("a"), op(":"), value("1"), field("b"), op(":"), value("2")]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_operator() {
    match tokens("x y") {
        Err(LexError::MissingOperator { field, found, position }) => {
            assert_eq!(field, "x");
            assert_eq!(found, Some('y'));
            assert_eq!(position.column, 3);
        }
        other => panic!("Expected MissingOperator, got {:?}", other),
    }
}

#[test]
fn test_missing_operator_at_end() {
    assert!(matches!(
        tokens("x"),
        Err(LexError::MissingOperator { found: None, .. })
    ));
}

#[test]
fn test_dangling_operator() {
    match tokens("x:") {
        Err(LexError::MissingValue { operator, found, .. }) => {
            assert_eq!(operator, ":");
            assert_eq!(found, None);
        }
        other => panic!("Expected MissingValue, got {:?}", other),
    }
}

#[test]
fn test_illegal_character() {
    match tokens("x:y & z:w") {
        Err(LexError::UnexpectedChar { ch, position }) => {
            assert_eq!(ch, '&');
            assert_eq!(position.offset, 4);
        }
        other => panic!("Expected UnexpectedChar, got {:?}", other),
    }
}

#[test]
fn test_positions_span_lines() {
    let err = tokens("a:1\n  $").unwrap_err();
    assert_eq!(err.position().line, 2);
    assert_eq!(err.position().column, 3);
}
