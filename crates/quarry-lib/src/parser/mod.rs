//! Scanner and recursive-descent parser for normalized queries.
//!
//! # Architecture
//!
//! - The [`Scanner`] yields tokens lazily; the parser keeps one token of
//!   lookahead and never materializes the token stream.
//! - Productions build an owned [`Node`] tree directly, collapsing one-item
//!   lists as they go.
//! - Errors are collected as diagnostics and parsing resumes at the next
//!   `OR`, `AND`, `)` or end of input.
//!
//! # Recovery Strategy
//!
//! 1. Unexpected tokens in term position get reported and skipped
//! 2. Missing terms emit a diagnostic without consuming (the caller may handle)
//! 3. A broken suffix ends its term; the rest of the term is skipped
//! 4. On recursion limit, parsing stops and the root is dropped

pub mod ast;
pub mod lexer;
pub mod printer;
pub mod token;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use ast::Node;
pub use self::core::{ParseResult, Parser};
pub use lexer::{ScanState, Scanner, lex};
pub use printer::AstPrinter;
pub use token::{FilterOp, Token, TokenKind, TokenSet};

/// Parse already-normalized text without running the normalizer.
pub fn parse(source: &str) -> ParseResult {
    Parser::new(source).parse()
}
