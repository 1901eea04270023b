//! Grammar productions for the query language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Precedence, loosest first: implicit/explicit `OR`, `AND`, prefix `-`/`+`,
//! suffixes (`:filter`, `..range`, `^boost`), atoms.

mod atoms;
mod expressions;
mod suffixes;

use super::token::{TokenKind, TokenSet};

/// Resynchronization points after a syntax error.
pub(super) const RECOVERY: TokenSet = TokenSet::new(&[
    TokenKind::OrOperator,
    TokenKind::AndOperator,
    TokenKind::CloseParen,
    TokenKind::EndOfInput,
]);

/// Tokens that end an `OR` list.
pub(super) const OR_LIST_END: TokenSet =
    TokenSet::new(&[TokenKind::CloseParen, TokenKind::EndOfInput]);

/// Tokens a leaf term can start with. `Quote` starts an unterminated phrase.
pub(super) const LEAF_FIRST: TokenSet = TokenSet::new(&[
    TokenKind::Word,
    TokenKind::Phrase,
    TokenKind::Url,
    TokenKind::Date,
    TokenKind::Number,
    TokenKind::Hashtag,
    TokenKind::Mention,
    TokenKind::Quote,
]);

pub(super) const ATOM_FIRST: TokenSet = LEAF_FIRST.union(TokenSet::new(&[TokenKind::OpenParen]));

pub(super) const SUFFIX_FIRST: TokenSet =
    TokenSet::new(&[TokenKind::Filter, TokenKind::Range, TokenKind::Boost]);
