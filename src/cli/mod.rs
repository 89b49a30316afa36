//! CLI support for query-filter
//!
//! Provides programmatic access to the `qf` command line functionality for
//! embedding in other tools.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] crate::ConversionError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    #[error("Unknown topic: '{0}'\nRun 'qf docs' to see available topics.")]
    UnknownCategory(String),
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        match e {
            crate::Error::Parse(e) => CliError::Parse(e),
            crate::Error::Conversion(e) => CliError::Conversion(e),
        }
    }
}
