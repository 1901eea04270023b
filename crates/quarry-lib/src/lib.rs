//! Quarry: lenient parsing of free-text search queries.
//!
//! Raw user input goes through three stages:
//!
//! 1. the [`normalizer`] silently repairs it into a canonical query string,
//! 2. the [`Scanner`](parser::Scanner) tokenizes that string,
//! 3. the [`Parser`](parser::Parser) builds an AST and reports syntax errors.
//!
//! # Example
//!
//! ```
//! use quarry_lib::QueryReader;
//!
//! let mut reader = QueryReader::new();
//! assert_eq!(reader.read_string("rust --async lang:en^2"), "rust OR -async OR lang:en^2");
//!
//! let result = reader.parse();
//! assert!(!result.has_errors());
//! print!("{}", result.root().unwrap().dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod normalizer;
pub mod parser;
pub mod query;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, ParseError};
pub use normalizer::{Normalizer, normalize};
pub use parser::{FilterOp, Node, ParseResult, Parser, Token, TokenKind, lex};
pub use query::{QueryReader, ReaderOptions};

/// Group nesting allowed by default.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Errors that can occur when a parse result is turned into a plain `Result`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The query normalized to nothing.
    #[error("query is empty")]
    EmptyQuery,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("query parsing failed with {} errors", .0.len())]
    QueryParseError(Diagnostics),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Normalize and parse `raw` with default options.
pub fn parse(raw: &str) -> ParseResult {
    let mut reader = QueryReader::new();
    reader.read_string(raw);
    reader.parse()
}
