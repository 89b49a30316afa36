use std::convert::Infallible;

use serde_json::Value;

use crate::ast::{Expression, Node};
use crate::conversion::{Conversion, ConversionError};
use crate::output::{self, Document};

/// Complete parsed query.
///
/// Holds the top-level nodes of one parse. Siblings are combined by key
/// union when the document is produced, so two sibling nodes that write the
/// same key resolve to the later one.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Top-level nodes, in input order
    pub nodes: Vec<Node>,
}

impl Query {
    /// Produce the document with every value left as its raw string.
    pub fn to_document(&self) -> Document {
        let raw = |expression: &Expression| -> Result<Value, Infallible> {
            Ok(Value::String(expression.raw_value.clone()))
        };
        match output::assemble(&self.nodes, &raw) {
            Ok(document) => document,
            Err(never) => match never {},
        }
    }

    /// Produce the document, passing every leaf value through `conversion`.
    ///
    /// The first conversion failure aborts serialization and is returned
    /// as-is.
    pub fn to_document_with(&self, conversion: &dyn Conversion) -> Result<Document, ConversionError> {
        let convert = |expression: &Expression| {
            conversion.convert(&expression.field, &expression.raw_value)
        };
        output::assemble(&self.nodes, &convert)
    }
}
