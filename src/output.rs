//! Filter document serialization.
//!
//! This module turns a filter tree into its document form and renders
//! documents as JSON text.
//!
//! # Document Shape
//!
//! - **Equality** - `x:y` becomes `{"x": "y"}`
//! - **Ranges** - `x>y` becomes `{"x": {"$gte": "y"}}`, `x<y` becomes
//!   `{"x": {"$lte": "y"}}`
//! - **Combinators** - a list joined with `|` becomes `{"$or": [...]}`, one
//!   joined with `,` becomes `{"$and": [...]}`, children in input order
//! - **Top level** - sibling nodes are merged key by key; on a collision
//!   the later node wins
//!
//! Keys keep their insertion order, so output is deterministic.
//!
//! # Examples
//!
//! ```
//! use query_filter::Parser;
//! use query_filter::output::to_json;
//!
//! let document = Parser::new().parse("x>1").unwrap();
//! assert_eq!(to_json(&document), r#"{"x":{"$gte":"1"}}"#);
//! ```

use serde_json::{Map, Value};

use crate::ast::{Expression, Node};

/// A filter document: an ordered mapping from keys to values.
pub type Document = Map<String, Value>;

/// Merge the documents of top-level sibling nodes into one.
///
/// `convert` produces the value of every leaf; its first error aborts the
/// whole document.
pub fn assemble<F, E>(nodes: &[Node], convert: &F) -> Result<Document, E>
where
    F: Fn(&Expression) -> Result<Value, E>,
{
    let mut document = Document::new();
    for node in nodes {
        document.extend(serialize(node, convert)?);
    }
    Ok(document)
}

/// Serialize one node, recursing into combinator children.
pub fn serialize<F, E>(node: &Node, convert: &F) -> Result<Document, E>
where
    F: Fn(&Expression) -> Result<Value, E>,
{
    let mut document = Document::new();

    match node {
        Node::Expression(expression) => {
            let value = convert(expression)?;
            let value = match expression.op.document_key() {
                None => value,
                Some(key) => {
                    let mut comparison = Document::new();
                    comparison.insert(key.to_string(), value);
                    Value::Object(comparison)
                }
            };
            document.insert(expression.field.clone(), value);
        }
        Node::Combinator(combinator) => {
            let children = combinator
                .children
                .iter()
                .map(|child| serialize(child, convert).map(Value::Object))
                .collect::<Result<Vec<_>, E>>()?;
            document.insert(combinator.logic.document_key().to_string(), Value::Array(children));
        }
    }

    Ok(document)
}

/// Render a document as compact JSON.
pub fn to_json(document: &Document) -> String {
    Value::Object(document.clone()).to_string()
}

/// Render a document as JSON with 2-space indentation.
pub fn to_json_pretty(document: &Document) -> String {
    format!("{:#}", Value::Object(document.clone()))
}
