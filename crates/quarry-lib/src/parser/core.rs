//! Parser state machine and low-level operations.

use std::cell::Cell;

use quarry_core::Span;

use super::ast::Node;
use super::lexer::Scanner;
use super::token::{Token, TokenKind, TokenSet};
use crate::diagnostics::{DiagnosticKind, Diagnostics, ParseError};
use crate::{DEFAULT_RECURSION_LIMIT, Error};

/// Outcome of one parse: an optional root plus every error found.
///
/// `source` is the text the spans in `diagnostics` point into.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub(crate) root: Option<Node>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) source: String,
}

impl ParseResult {
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn errors(&self) -> &[ParseError] {
        self.diagnostics.as_slice()
    }

    /// Top-level expressions, optionally only those built from `kind` tokens.
    pub fn expressions(&self, kind: Option<TokenKind>) -> Vec<&Node> {
        let Some(root) = &self.root else {
            return Vec::new();
        };
        root.expressions()
            .into_iter()
            .filter(|node| kind.is_none_or(|k| node.token_kind() == k))
            .collect()
    }

    pub fn render_errors(&self, colored: bool) -> String {
        self.diagnostics.render_colored(&self.source, colored)
    }

    /// The root, unless anything went wrong.
    pub fn into_result(self) -> Result<Node, Error> {
        if self.diagnostics.has_fatal() {
            return Err(Error::RecursionLimitExceeded);
        }
        if !self.diagnostics.is_empty() {
            return Err(Error::QueryParseError(self.diagnostics));
        }
        self.root.ok_or(Error::EmptyQuery)
    }
}

/// Recursive-descent parser pulling tokens lazily from a [`Scanner`].
pub struct Parser<'s> {
    pub(super) source: &'s str,
    scanner: Scanner<'s>,
    current: Option<Token<'s>>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    last_diagnostic_pos: Option<u32>,
    pub(super) delimiter_stack: Vec<Span>,
    pub(super) debug_fuel: Cell<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal: bool,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            scanner: Scanner::new(source),
            current: None,
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: Cell::new(256),
            recursion_fuel_limit: Some(DEFAULT_RECURSION_LIMIT),
            fatal: false,
        }
    }

    /// Maximum group nesting; `None` disables the check.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> ParseResult {
        let root = self.parse_root();
        let root = if self.fatal { None } else { root };
        tracing::debug!(
            errors = self.diagnostics.len(),
            has_root = root.is_some(),
            "parsed query"
        );
        ParseResult {
            root,
            diagnostics: self.diagnostics,
            source: self.source.to_string(),
        }
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    fn peek(&mut self) -> Token<'s> {
        self.ensure_progress();
        *self
            .current
            .get_or_insert_with(|| self.scanner.next_token())
    }

    pub(super) fn current(&mut self) -> TokenKind {
        self.peek().kind
    }

    pub(super) fn current_span(&mut self) -> Span {
        self.peek().span
    }

    pub(super) fn eof(&mut self) -> bool {
        self.current() == TokenKind::EndOfInput
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.fatal || self.eof()
    }

    pub(super) fn currently_is(&mut self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn bump(&mut self) -> Token<'s> {
        let token = self.peek();
        assert!(token.kind != TokenKind::EndOfInput, "bump called at EOF");
        self.reset_debug_fuel();
        self.current = None;
        token
    }

    fn should_report(&mut self, pos: u32) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    /// Report at an explicit range. `detail` fills the kind's message template.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: Span, detail: Option<&str>) {
        if !self.should_report(range.start) {
            return;
        }
        let builder = self.diagnostics.report(kind, range);
        match detail {
            Some(detail) => builder.message(detail).emit(),
            None => builder.emit(),
        }
    }

    /// Report at the current token without consuming it.
    pub(super) fn error(&mut self, kind: DiagnosticKind, detail: Option<&str>) {
        let range = self.current_span();
        self.error_at(kind, range, detail);
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind, detail: Option<&str>) {
        self.error(kind, detail);
        if !self.eof() {
            self.bump();
        }
    }

    /// Skip tokens up to the next resynchronization point. Groups opened while
    /// skipping are skipped whole.
    pub(super) fn recover(&mut self, recovery: TokenSet) {
        let mut nesting = 0u32;
        while !self.should_stop() {
            match self.current() {
                TokenKind::CloseParen if nesting > 0 => nesting -= 1,
                kind if nesting == 0 && recovery.contains(kind) => break,
                TokenKind::OpenParen => nesting += 1,
                _ => {}
            }
            let token = self.bump();
            tracing::trace!(kind = %token.kind, text = token.text, "skipped during recovery");
        }
    }

    pub(super) fn error_recover(
        &mut self,
        kind: DiagnosticKind,
        detail: Option<&str>,
        recovery: TokenSet,
    ) {
        self.error(kind, detail);
        self.recover(recovery);
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if !self.fatal {
                let range = self.current_span();
                self.diagnostics
                    .report(DiagnosticKind::RecursionLimitExceeded, range)
                    .message(format!("limit is {limit}"))
                    .emit();
                self.fatal = true;
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn push_delimiter(&mut self, span: Span) {
        self.delimiter_stack.push(span);
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<Span> {
        self.delimiter_stack.pop()
    }

    pub(super) fn error_unclosed_delimiter(&mut self, open_range: Span) {
        let current = self.current_span();
        if !self.should_report(current.start) {
            return;
        }
        let full_range = open_range.cover(current);
        let closed = format!("{} )", full_range.text(self.source).trim_end());
        self.diagnostics
            .report(DiagnosticKind::UnclosedGroup, full_range)
            .related_to("group opened here", open_range)
            .fix("close the group", closed)
            .emit();
    }
}
