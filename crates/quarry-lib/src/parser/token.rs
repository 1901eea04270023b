//! Token kinds produced by the scanner.

use quarry_core::Span;
use serde::Serialize;

/// Closed set of token kinds.
///
/// `Whitespace` is matched but never handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    EndOfInput = 0,
    Whitespace,
    Word,
    Phrase,
    Url,
    Date,
    Number,
    Exclude,
    Include,
    Hashtag,
    Mention,
    Filter,
    Range,
    Boost,
    OrOperator,
    AndOperator,
    OpenParen,
    CloseParen,
    Quote,
    Illegal,
}

impl TokenKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::EndOfInput => "end of input",
            Self::Whitespace => "whitespace",
            Self::Word => "word",
            Self::Phrase => "phrase",
            Self::Url => "URL",
            Self::Date => "date",
            Self::Number => "number",
            Self::Exclude => "`-`",
            Self::Include => "`+`",
            Self::Hashtag => "hashtag",
            Self::Mention => "mention",
            Self::Filter => "filter operator",
            Self::Range => "`..`",
            Self::Boost => "`^`",
            Self::OrOperator => "`OR`",
            Self::AndOperator => "`AND`",
            Self::OpenParen => "`(`",
            Self::CloseParen => "`)`",
            Self::Quote => "`\"`",
            Self::Illegal => "unrecognized input",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Bitset of token kinds for recovery and lookahead checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u32);

impl TokenSet {
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i] as u8;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        self.0 & (1 << kind as u8) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

/// Comparison carried by a filter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FilterOp {
    #[default]
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl FilterOp {
    /// `:` and `:=` are both equality.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            ":" | ":=" => Some(Self::Eq),
            ":>" => Some(Self::Gt),
            ":<" => Some(Self::Lt),
            ":>=" => Some(Self::Gte),
            ":<=" => Some(Self::Lte),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => ":",
            Self::Gt => ":>",
            Self::Lt => ":<",
            Self::Gte => ":>=",
            Self::Lte => ":<=",
        }
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-copy token: kind, lexeme slice and its span in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
    pub span: Span,
}

impl<'s> Token<'s> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'s str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Start offset of the lexeme.
    pub fn offset(&self) -> usize {
        self.span.start as usize
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.text, self.span)
    }
}
