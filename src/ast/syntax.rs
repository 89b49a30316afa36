use crate::ast::{Logic, OpKind};
use crate::lexer::Position;

/// Concrete parse tree.
///
/// This is what the grammar produces before any AND/OR disambiguation takes
/// place. It records every term together with the separator that followed
/// it, exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    /// Top-level terms, in input order. Never empty.
    pub entries: Vec<Entry<Term>>,
}

/// A term and the separator written directly after it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub term: T,
    pub separator: Option<Logic>,
}

/// A top-level term: a bare comparison or a quoted group.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Comparison(Comparison),
    Group(Group),
}

/// A quoted group (`"x:1,y:2"`).
///
/// Groups only hold comparisons; there is a single level of nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Position of the opening quote
    pub position: Position,
    /// Comparisons inside the quotes. Never empty.
    pub entries: Vec<Entry<Comparison>>,
}

/// A `field operator value` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub field: String,
    pub operator: OpKind,
    pub value: String,
    /// Position of the field
    pub position: Position,
}
