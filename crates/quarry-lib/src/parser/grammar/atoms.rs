//! Atomic terms and parenthesized groups.

use super::{LEAF_FIRST, RECOVERY};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::ast::Node;
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Atom plus any suffixes.
    pub(crate) fn parse_term(&mut self) -> Option<Node> {
        let atom_kind = self.current();
        let atom = self.parse_atom()?;
        Some(self.parse_suffixes(atom, atom_kind))
    }

    pub(crate) fn parse_atom(&mut self) -> Option<Node> {
        match self.current() {
            TokenKind::OpenParen => self.parse_group(),
            kind if LEAF_FIRST.contains(kind) => self.parse_leaf(),
            TokenKind::CloseParen | TokenKind::EndOfInput => {
                self.error(DiagnosticKind::ExpectedTerm, None);
                None
            }
            TokenKind::OrOperator | TokenKind::AndOperator => {
                let detail = self.current().describe();
                self.error_and_bump(DiagnosticKind::UnexpectedToken, Some(detail));
                None
            }
            TokenKind::Illegal => {
                self.error_and_bump(DiagnosticKind::IllegalToken, None);
                None
            }
            kind => {
                self.error_recover(DiagnosticKind::UnexpectedToken, Some(kind.describe()), RECOVERY);
                None
            }
        }
    }

    /// Word, phrase, URL, date, number, hashtag or mention.
    pub(crate) fn parse_leaf(&mut self) -> Option<Node> {
        let token = self.bump();
        let node = match token.kind {
            TokenKind::Word | TokenKind::Url | TokenKind::Date | TokenKind::Number => {
                Node::word(token.text, token.kind)
            }
            TokenKind::Phrase => Node::text(&token.text[1..token.text.len() - 1]),
            TokenKind::Hashtag => Node::hashtag(&token.text[1..]),
            TokenKind::Mention => Node::mention(&token.text[1..]),
            TokenKind::Quote => return self.parse_unterminated_phrase(token.span),
            kind => unreachable!("parse_leaf called on {kind:?}"),
        };
        Some(node)
    }

    /// `"word` with no closing quote: keep the word, report the quote.
    fn parse_unterminated_phrase(&mut self, quote: quarry_core::Span) -> Option<Node> {
        match self.current() {
            TokenKind::Word
            | TokenKind::Url
            | TokenKind::Date
            | TokenKind::Number
            | TokenKind::Hashtag
            | TokenKind::Mention => {
                let token = self.bump();
                self.error_at(
                    DiagnosticKind::UnterminatedPhrase,
                    quote.cover(token.span),
                    Some("read as a plain word"),
                );
                Some(Node::word(token.text, TokenKind::Word))
            }
            _ => {
                self.error_at(DiagnosticKind::UnterminatedPhrase, quote, None);
                None
            }
        }
    }

    /// `"(" orList ")"`
    pub(crate) fn parse_group(&mut self) -> Option<Node> {
        self.assert_current(TokenKind::OpenParen);
        if !self.enter_recursion() {
            return None;
        }
        let open = self.bump();
        self.push_delimiter(open.span);

        let items = self.parse_or_items();
        self.exit_recursion();
        self.pop_delimiter();

        if self.has_fatal_error() {
            return None;
        }

        let inner = Node::or_list(items);
        if self.currently_is(TokenKind::CloseParen) {
            let close = self.bump();
            if inner.is_none() {
                self.error_at(DiagnosticKind::EmptyGroup, open.span.cover(close.span), None);
            }
        } else {
            self.error_unclosed_delimiter(open.span);
        }

        inner.map(Node::subexpression)
    }
}
