use thiserror::Error;

use crate::conversion::ConversionError;
use crate::parser::ParseError;

/// Error returned by [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not match the query grammar
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The conversion rejected a value
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
