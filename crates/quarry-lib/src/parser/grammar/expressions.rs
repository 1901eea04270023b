//! Boolean lists and prefix operators.

use super::{ATOM_FIRST, OR_LIST_END, RECOVERY};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::ast::Node;
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Whole input. Stray `)` at the top level are reported and skipped.
    pub(crate) fn parse_root(&mut self) -> Option<Node> {
        let mut items = Vec::new();
        loop {
            items.extend(self.parse_or_items());
            if self.should_stop() {
                break;
            }
            self.assert_current(TokenKind::CloseParen);
            self.error_and_bump(DiagnosticKind::UnmatchedCloseParen, None);
        }
        Node::or_list(items)
    }

    /// `andList ( ("OR" | ε) andList )*`, up to `)` or end of input.
    pub(crate) fn parse_or_items(&mut self) -> Vec<Node> {
        let mut items = Vec::new();

        loop {
            if self.should_stop() || self.currently_is_one_of(OR_LIST_END) {
                break;
            }
            if self.currently_is(TokenKind::OrOperator) || self.currently_is(TokenKind::AndOperator)
            {
                let detail = self.current().describe();
                self.error_and_bump(DiagnosticKind::UnexpectedToken, Some(detail));
                continue;
            }

            items.extend(self.parse_and_list());

            if self.currently_is(TokenKind::OrOperator) {
                let op = self.bump();
                if self.currently_is_one_of(RECOVERY) {
                    self.error_at(DiagnosticKind::DanglingOperator, op.span, Some(op.text));
                }
            }
        }

        items
    }

    /// `unary ( "AND" unary )*`
    pub(crate) fn parse_and_list(&mut self) -> Option<Node> {
        let mut items = Vec::new();
        items.extend(self.parse_unary());

        while self.currently_is(TokenKind::AndOperator) && !self.should_stop() {
            let op = self.bump();
            if self.currently_is_one_of(RECOVERY) {
                self.error_at(DiagnosticKind::DanglingOperator, op.span, Some(op.text));
                break;
            }
            items.extend(self.parse_unary());
        }

        Node::and_list(items)
    }

    /// `("-" | "+")? atom suffix*`
    pub(crate) fn parse_unary(&mut self) -> Option<Node> {
        let wrap: fn(Node) -> Node = match self.current() {
            TokenKind::Exclude => Node::exclude,
            TokenKind::Include => Node::include,
            _ => return self.parse_term(),
        };
        let op = self.bump();

        match self.current() {
            TokenKind::Quote => {
                // An unterminated phrase takes the rest of its term with it.
                let quote = self.bump();
                self.error_at(
                    DiagnosticKind::UnterminatedPhrase,
                    op.span.cover(quote.span),
                    Some("the prefixed term is dropped"),
                );
                self.recover(RECOVERY);
                None
            }
            kind if ATOM_FIRST.contains(kind) => self.parse_term().map(wrap),
            _ => {
                self.error_at(DiagnosticKind::MissingOperand, op.span, Some(op.text));
                None
            }
        }
    }
}
