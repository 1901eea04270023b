//! Stateful entry point: load a raw query, then parse it.


use serde::Deserialize;

use crate::DEFAULT_RECURSION_LIMIT;
use crate::normalizer::Normalizer;
use crate::parser::{ParseResult, Parser};

/// Knobs for [`QueryReader`]. Missing fields take their defaults when
/// deserialized, so hosts can embed this in their own config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Rewrite `AND` to `OR` and drop parentheses embedded in terms.
    pub fold_operators: bool,
    /// Maximum group nesting; `None` disables the limit.
    pub recursion_limit: Option<u32>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            fold_operators: false,
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }
}

impl ReaderOptions {
    pub fn fold_operators(mut self, value: bool) -> Self {
        self.fold_operators = value;
        self
    }

    pub fn recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }
}

/// Holds one query at a time.
///
/// [`read_string`](Self::read_string) replaces whatever was loaded before;
/// nothing carries over between queries.
#[derive(Debug, Clone, Default)]
pub struct QueryReader {
    options: ReaderOptions,
    raw: String,
    normalized: String,
}

impl QueryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReaderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Load and normalize `raw`. Returns the normalized text.
    pub fn read_string(&mut self, raw: &str) -> &str {
        self.raw = raw.to_string();
        self.normalized = Normalizer::new()
            .fold_operators(self.options.fold_operators)
            .normalize(raw);
        &self.normalized
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Parse the loaded query. Error spans point into [`normalized`](Self::normalized).
    pub fn parse(&self) -> ParseResult {
        Parser::new(&self.normalized)
            .with_recursion_fuel(self.options.recursion_limit)
            .parse()
    }
}
