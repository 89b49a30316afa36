use crate::ast::{Logic, OpKind};

/// A node of the filter tree.
///
/// Every node is owned by its parent; the tree holds no shared references.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single comparison
    ///
    /// # Example
    /// ```text
    /// price>100
    /// ```
    Expression(Expression),

    /// An AND/OR grouping of child nodes
    ///
    /// # Example
    /// ```text
    /// "x>1,x<5"
    /// ```
    Combinator(Combinator),
}

/// A field/operator/value comparison.
///
/// The value is kept exactly as written. Conversion to a typed value
/// happens when the document is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub op: OpKind,
    pub field: String,
    pub raw_value: String,
}

impl Expression {
    pub fn new(op: OpKind, field: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Expression {
            op,
            field: field.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// A flat AND or OR over its children.
///
/// Mixing AND with OR is only possible by nesting combinators.
#[derive(Debug, Clone, PartialEq)]
pub struct Combinator {
    pub logic: Logic,
    /// Never empty
    pub children: Vec<Node>,
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Node::Expression(expression)
    }
}

impl From<Combinator> for Node {
    fn from(combinator: Combinator) -> Self {
        Node::Combinator(combinator)
    }
}
