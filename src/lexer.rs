use std::fmt;

use thiserror::Error;

use crate::ast::Token;

/// Location of a character in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Character offset from the start of the input
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },

    #[error("expected an operator (':', '>' or '<') after field '{field}' at {position}, found {}", describe(.found))]
    MissingOperator {
        field: String,
        found: Option<char>,
        position: Position,
    },

    #[error("expected a value after operator '{operator}' at {position}, found {}", describe(.found))]
    MissingValue {
        operator: String,
        found: Option<char>,
        position: Position,
    },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::MissingOperator { position, .. }
            | LexError::MissingValue { position, .. } => *position,
        }
    }
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}

pub fn is_field_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

pub fn is_operator_char(ch: char) -> bool {
    matches!(ch, ':' | '>' | '<')
}

pub fn is_value_char(ch: char) -> bool {
    is_field_char(ch) || matches!(ch, '/' | ':' | '.' | '[' | ']' | '(' | ')')
}

/// What the lexer expects to read next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// A field, a separator, a quote or the end of input
    Start,
    /// The operator of the comparison whose field was just read
    Operator,
    /// The value of the comparison whose operator was just read
    Value,
}

pub struct Lexer {
    input: Vec<char>,
    position: Position,
    token_start: Position,
    mode: Mode,
    last_text: String,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: Position::start(),
            token_start: Position::start(),
            mode: Mode::Start,
            last_text: String::new(),
        }
    }

    /// Where the most recently returned token began.
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position.offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position.offset += 1;
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if accept(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.position;

        match self.mode {
            Mode::Start => self.read_start(),
            Mode::Operator => {
                let operator = self.read_while(is_operator_char);
                if operator.is_empty() {
                    return Err(LexError::MissingOperator {
                        field: std::mem::take(&mut self.last_text),
                        found: self.current_char(),
                        position: self.position,
                    });
                }
                self.mode = Mode::Value;
                self.last_text.clone_from(&operator);
                Ok(Token::Operator(operator))
            }
            Mode::Value => {
                let value = self.read_while(is_value_char);
                if value.is_empty() {
                    return Err(LexError::MissingValue {
                        operator: std::mem::take(&mut self.last_text),
                        found: self.current_char(),
                        position: self.position,
                    });
                }
                self.mode = Mode::Start;
                Ok(Token::Value(value))
            }
        }
    }

    fn read_start(&mut self) -> Result<Token, LexError> {
        match self.current_char() {
            None => Ok(Token::Eof),
            Some('"') => {
                self.advance();
                Ok(Token::Quote)
            }
            Some('|') => {
                self.advance();
                Ok(Token::Pipe)
            }
            Some(',') => {
                self.advance();
                Ok(Token::Comma)
            }
            Some(ch) if is_field_char(ch) => {
                let field = self.read_while(is_field_char);
                self.mode = Mode::Operator;
                self.last_text.clone_from(&field);
                Ok(Token::Field(field))
            }
            Some(ch) => Err(LexError::UnexpectedChar {
                ch,
                position: self.position,
            }),
        }
    }
}

#[test]
fn test_separators_and_quotes() {
    let mut lexer = Lexer::new("\" | , \"");
    assert_eq!(lexer.next_token(), Ok(Token::Quote));
    assert_eq!(lexer.next_token(), Ok(Token::Pipe));
    assert_eq!(lexer.next_token(), Ok(Token::Comma));
    assert_eq!(lexer.next_token(), Ok(Token::Quote));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_comparison() {
    let mut lexer = Lexer::new("path:/a/b:c");
    assert_eq!(lexer.next_token(), Ok(Token::Field("path".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Operator(":".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Value("/a/b:c".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_token_start_tracks_columns() {
    let mut lexer = Lexer::new("  x > 5");
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_start().column, 3);
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_start().column, 5);
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_start().column, 7);
}
