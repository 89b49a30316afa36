use std::fmt;

/// Lexical token produced by the [`Lexer`](crate::lexer::Lexer).
///
/// The lexer is mode-aware: a `Field` is always followed by an `Operator`,
/// and an `Operator` by a `Value`, so the three parts of a comparison are
/// never confused even though their character classes overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Field name, drawn from `[A-Za-z0-9_-]`
    ///
    /// # Examples
    /// ```text
    /// status
    /// created_at
    /// x-ray
    /// ```
    Field(String),

    /// Comparison operator run, drawn from `:`, `>` and `<`
    ///
    /// Only single-character runs map to a comparison; anything longer is
    /// rejected by the parser.
    Operator(String),

    /// Raw comparison value, drawn from `[A-Za-z0-9_-/:.[]()]`
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 2024-01-01T10:00
    /// /api/v1/items
    /// ```
    Value(String),

    // Separators
    /// OR separator (`|`)
    Pipe,
    /// AND separator (`,`)
    Comma,

    /// Group delimiter (`"`), used both to open and to close a group
    Quote,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Field(name) => write!(f, "field '{}'", name),
            Token::Operator(op) => write!(f, "operator '{}'", op),
            Token::Value(value) => write!(f, "value '{}'", value),
            Token::Pipe => write!(f, "'|'"),
            Token::Comma => write!(f, "','"),
            Token::Quote => write!(f, "'\"'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
