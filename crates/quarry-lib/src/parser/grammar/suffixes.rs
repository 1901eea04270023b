//! Filter, range and boost suffixes.
//!
//! Suffixes attach left to right to the atom before them. Each kind may
//! appear once per term; a repeat is an error and ends the term.

use super::{LEAF_FIRST, RECOVERY, SUFFIX_FIRST};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::ast::Node;
use crate::parser::token::{FilterOp, TokenKind};

/// Accumulates suffixes for one term.
struct TermBuilder {
    value: Node,
    value_kind: TokenKind,
    filter_key: Option<String>,
    filter_op: FilterOp,
    boost: Option<f64>,
    range_to: Option<Node>,
}

impl TermBuilder {
    fn new(value: Node, value_kind: TokenKind) -> Self {
        Self {
            value,
            value_kind,
            filter_key: None,
            filter_op: FilterOp::Eq,
            boost: None,
            range_to: None,
        }
    }

    fn has_suffix(&self) -> bool {
        self.filter_key.is_some() || self.boost.is_some() || self.range_to.is_some()
    }

    /// The key word a filter can attach to, if the term is still a bare word.
    fn filter_key_candidate(&self) -> Option<&str> {
        match &self.value {
            Node::Word { text, kind } if *kind == TokenKind::Word && !self.has_suffix() => {
                Some(text)
            }
            _ => None,
        }
    }

    fn build(self) -> Node {
        if !self.has_suffix() {
            return self.value;
        }
        Node::Explicit {
            value: Box::new(self.value),
            filter_key: self.filter_key,
            filter_op: self.filter_op,
            boost: self.boost,
            range_to: self.range_to.map(Box::new),
        }
    }
}

/// Whether a suffix was attached or the term must end here.
enum Attach {
    Continue,
    Stop,
}

impl Parser<'_> {
    pub(crate) fn parse_suffixes(&mut self, atom: Node, atom_kind: TokenKind) -> Node {
        if !self.currently_is_one_of(SUFFIX_FIRST) {
            return atom;
        }

        let mut term = TermBuilder::new(atom, atom_kind);
        while self.currently_is_one_of(SUFFIX_FIRST) {
            let attach = match self.current() {
                TokenKind::Filter => self.parse_filter(&mut term),
                TokenKind::Boost => self.parse_boost(&mut term),
                TokenKind::Range => self.parse_range(&mut term),
                kind => unreachable!("{kind:?} is not a suffix"),
            };
            if let Attach::Stop = attach {
                self.recover(RECOVERY);
                break;
            }
        }
        term.build()
    }

    /// `key:value`, `key:>value`, ...
    fn parse_filter(&mut self, term: &mut TermBuilder) -> Attach {
        let op = self.bump();

        if let Some(key) = term.filter_key.clone() {
            self.error_at(DiagnosticKind::DuplicateFilter, op.span, Some(&key));
            return Attach::Stop;
        }
        let Some(key) = term.filter_key_candidate().map(str::to_string) else {
            self.error_at(DiagnosticKind::FilterOnNonWord, op.span, Some(op.text));
            return Attach::Stop;
        };

        if !self.currently_is_one_of(LEAF_FIRST) {
            self.error(DiagnosticKind::ExpectedFilterValue, None);
            return Attach::Stop;
        }
        let value_kind = self.current();
        let Some(value) = self.parse_leaf() else {
            return Attach::Stop;
        };

        term.value = value;
        term.value_kind = value_kind;
        term.filter_key = Some(key);
        term.filter_op = FilterOp::from_lexeme(op.text).unwrap_or_default();
        Attach::Continue
    }

    /// `^number`
    fn parse_boost(&mut self, term: &mut TermBuilder) -> Attach {
        let caret = self.bump();

        if term.boost.is_some() {
            self.error_at(DiagnosticKind::DuplicateBoost, caret.span, None);
            return Attach::Stop;
        }
        if !term.value.is_leaf() {
            self.error_at(DiagnosticKind::BoostOnGroup, caret.span, None);
            return Attach::Stop;
        }

        let boost = match self.current() {
            TokenKind::Number => {
                let number = self.bump();
                number.text.parse::<f64>().ok()
            }
            _ => None,
        };
        let Some(boost) = boost else {
            self.error_at(DiagnosticKind::ExpectedBoostValue, caret.span, None);
            return Attach::Stop;
        };

        term.boost = Some(boost);
        Attach::Continue
    }

    /// `..upper` after a date or number filter value.
    fn parse_range(&mut self, term: &mut TermBuilder) -> Attach {
        let dots = self.bump();

        if term.filter_key.is_none() {
            self.error_at(DiagnosticKind::RangeWithoutFilter, dots.span, None);
            return Attach::Stop;
        }
        if term.range_to.is_some() {
            self.error_at(DiagnosticKind::DuplicateRange, dots.span, None);
            return Attach::Stop;
        }

        let bound_kind = self.current();
        if !matches!(bound_kind, TokenKind::Date | TokenKind::Number) {
            self.error(DiagnosticKind::ExpectedRangeBound, None);
            return Attach::Stop;
        }
        let bound = self.bump();

        if bound_kind != term.value_kind {
            let range = dots.span.cover(bound.span);
            let detail = format!(
                "{} .. {}",
                term.value_kind.describe(),
                bound_kind.describe()
            );
            self.error_at(DiagnosticKind::RangeKindMismatch, range, Some(&detail));
            return Attach::Stop;
        }

        term.range_to = Some(Node::word(bound.text, bound_kind));
        Attach::Continue
    }
}
