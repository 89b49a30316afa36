use std::mem;

use thiserror::Error;

use crate::ast::{Comparison, Entry, Group, Logic, OpKind, Query, SyntaxTree, Term, Token};
use crate::builder;
use crate::conversion::{Conversion, Raw};
use crate::lexer::{LexError, Lexer, Position};
use crate::output::Document;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("empty query")]
    EmptyInput,

    #[error("empty group at {position}")]
    EmptyGroup { position: Position },

    #[error("unterminated group: quote opened at {position} is never closed")]
    UnterminatedGroup { position: Position },

    #[error("unknown operator '{operator}' at {position}")]
    UnknownOperator { operator: String, position: Position },

    #[error("unexpected separator '{separator}' at {position}, expected a field or a group")]
    UnexpectedSeparator { separator: char, position: Position },

    #[error("unexpected {found} at {position}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        position: Position,
    },
}

impl ParseError {
    /// Where the offending input starts, when there is any.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Lex(e) => Some(e.position()),
            ParseError::EmptyInput => None,
            ParseError::EmptyGroup { position }
            | ParseError::UnterminatedGroup { position }
            | ParseError::UnknownOperator { position, .. }
            | ParseError::UnexpectedSeparator { position, .. }
            | ParseError::UnexpectedToken { position, .. } => Some(*position),
        }
    }
}

/// Parse a query string into its concrete syntax tree.
///
/// The whole input must be consumed; trailing input that does not fit the
/// grammar is an error rather than being ignored.
pub fn parse_syntax(input: &str) -> Result<SyntaxTree, ParseError> {
    Grammar::new(Lexer::new(input))?.parse_tree()
}

/// Recursive descent over the query grammar:
///
/// ```text
/// top_level  := term (separator? term)* separator?
/// term       := group | comparison
/// group      := '"' comparison (separator? comparison)* separator? '"'
/// comparison := FIELD OPERATOR VALUE
/// separator  := '|' | ','
/// ```
struct Grammar {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
}

impl Grammar {
    fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_start();
        Ok(Grammar {
            lexer,
            current_token,
            current_position,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_start();
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn parse_tree(&mut self) -> Result<SyntaxTree, ParseError> {
        if self.check(&Token::Eof) {
            return Err(ParseError::EmptyInput);
        }

        let mut entries = vec![];
        while !self.check(&Token::Eof) {
            let term = self.parse_term()?;
            let separator = self.parse_separator()?;
            entries.push(Entry { term, separator });
        }

        Ok(SyntaxTree { entries })
    }

    fn parse_term(&mut self) -> Result<Term, ParseError> {
        if self.check(&Token::Quote) {
            self.parse_group().map(Term::Group)
        } else {
            self.parse_comparison().map(Term::Comparison)
        }
    }

    fn parse_separator(&mut self) -> Result<Option<Logic>, ParseError> {
        let separator = match self.current_token {
            Token::Pipe => Logic::Or,
            Token::Comma => Logic::And,
            _ => return Ok(None),
        };
        self.advance()?;
        Ok(Some(separator))
    }

    fn parse_group(&mut self) -> Result<Group, ParseError> {
        let position = self.current_position;
        self.advance()?; // Consume opening quote

        if self.check(&Token::Quote) {
            return Err(ParseError::EmptyGroup { position });
        }

        let mut entries = vec![];
        loop {
            if self.check(&Token::Eof) {
                return Err(ParseError::UnterminatedGroup { position });
            }

            let term = self.parse_comparison()?;
            let separator = self.parse_separator()?;
            entries.push(Entry { term, separator });

            if self.check(&Token::Quote) {
                self.advance()?; // Consume closing quote
                break;
            }
        }

        Ok(Group { position, entries })
    }

    fn parse_comparison(&mut self) -> Result<Comparison, ParseError> {
        let position = self.current_position;

        let field = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Field(field) => field,
            Token::Pipe => return Err(self.unexpected_separator(Logic::Or)),
            Token::Comma => return Err(self.unexpected_separator(Logic::And)),
            token => return Err(self.unexpected(token, "a field")),
        };
        self.advance()?;

        let operator = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Operator(symbol) => {
                OpKind::from_symbol(&symbol).ok_or_else(|| ParseError::UnknownOperator {
                    operator: symbol,
                    position: self.current_position,
                })?
            }
            token => return Err(self.unexpected(token, "an operator")),
        };
        self.advance()?;

        let value = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Value(value) => value,
            token => return Err(self.unexpected(token, "a value")),
        };
        self.advance()?;

        Ok(Comparison {
            field,
            operator,
            value,
            position,
        })
    }

    fn unexpected_separator(&self, logic: Logic) -> ParseError {
        ParseError::UnexpectedSeparator {
            separator: logic.separator(),
            position: self.current_position,
        }
    }

    fn unexpected(&self, found: Token, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            found: found.to_string(),
            expected,
            position: self.current_position,
        }
    }
}

/// Translates query strings into filter documents.
///
/// A parser holds no per-call state: every call builds an independent tree,
/// so one parser may be reused freely.
///
/// # Examples
///
/// ```
/// use query_filter::Parser;
/// use serde_json::json;
///
/// let parser = Parser::new();
/// let document = parser.parse(r#""x:y|x:z""#).unwrap();
///
/// assert_eq!(
///     serde_json::Value::Object(document),
///     json!({"$or": [{"x": "y"}, {"x": "z"}]})
/// );
/// ```
///
/// The conversion is part of the parser's type, so a parser is `Send` and
/// `Sync` exactly when its conversion is.
#[derive(Debug, Clone)]
pub struct Parser<C = Raw> {
    conversion: C,
}

impl Parser {
    /// Create a parser that leaves every value as its raw string.
    pub fn new() -> Self {
        Parser { conversion: Raw }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Conversion> Parser<C> {
    /// Create a parser that passes every leaf value through `conversion`.
    pub fn with_conversion(conversion: C) -> Self {
        Parser { conversion }
    }

    /// Parse `input` and return the filter document.
    pub fn parse(&self, input: &str) -> Result<Document, crate::Error> {
        let query = self.parse_query(input)?;
        Ok(query.to_document_with(&self.conversion)?)
    }

    /// Parse `input` into a [`Query`] without producing the document.
    ///
    /// No conversion runs at this stage; values stay raw until
    /// [`Query::to_document`] or [`Query::to_document_with`] is called.
    pub fn parse_query(&self, input: &str) -> Result<Query, ParseError> {
        let tree = parse_syntax(input)?;
        Ok(builder::build(tree))
    }
}
