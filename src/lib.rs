pub mod ast;
pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod conversion;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Combinator, Expression, Logic, Node, OpKind, Query, Token};
pub use conversion::{Conversion, ConversionError, Infer, Raw};
pub use error::Error;
pub use lexer::{LexError, Lexer, Position};
pub use output::{Document, to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
