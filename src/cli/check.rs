//! Parse queries into filter documents

use log::debug;

use super::CliError;
use crate::{Conversion, Document, Infer, Parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to parse
    pub query: String,
    /// Infer scalar types (numbers, booleans, null) from raw values
    pub infer: bool,
    /// Only validate syntax, don't produce the document
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Query parsed into a filter document
    Success(Document),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = options.query.trim();
    if query.is_empty() {
        return Err(CliError::NoInput);
    }

    debug!("parsing query {:?} (infer: {})", query, options.infer);

    if options.infer {
        check_with(&Parser::with_conversion(Infer), query, options.syntax_only)
    } else {
        check_with(&Parser::new(), query, options.syntax_only)
    }
}

fn check_with<C: Conversion>(
    parser: &Parser<C>,
    query: &str,
    syntax_only: bool,
) -> Result<CheckResult, CliError> {
    if syntax_only {
        let parsed = parser.parse_query(query)?;
        debug!("syntax valid, {} top-level node(s)", parsed.nodes.len());
        return Ok(CheckResult::SyntaxValid);
    }

    let document = parser.parse(query)?;
    debug!("produced document with {} top-level key(s)", document.len());
    Ok(CheckResult::Success(document))
}
