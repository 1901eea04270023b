//! Context-sensitive scanner for normalized queries.
//!
//! Rules are tried in a fixed priority order. A rule wins when its pattern
//! matches the remaining input *and* its validator accepts the match in the
//! current [`ScanState`]; otherwise the next rule is tried. The state is a
//! handful of flags describing the filter value being scanned, so a `..` or a
//! signed number means different things inside and outside `field:value`.
//!
//! Anything no rule accepts becomes one `Illegal` token spanning the rest of
//! the input, after which the scanner only yields `EndOfInput`.

use std::sync::LazyLock;

use quarry_core::Span;
use quarry_core::utils::{filter_operator_prefix, is_value_start, is_word_char, url_scheme_len};
use regex_automata::dfa::dense::DFA;
use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::{Anchored, Input};

use super::token::{FilterOp, Token, TokenKind};

fn compile(pattern: &str) -> DFA<Vec<u32>> {
    dense::DFA::builder()
        .configure(dense::DFA::config().start_kind(StartKind::Anchored))
        .build(pattern)
        .expect("scanner patterns are valid")
}

static WHITESPACE: LazyLock<DFA<Vec<u32>>> = LazyLock::new(|| compile(r"\s+"));
static PHRASE: LazyLock<DFA<Vec<u32>>> = LazyLock::new(|| compile(r#""[^"]*""#));
static DATE: LazyLock<DFA<Vec<u32>>> =
    LazyLock::new(|| compile(r"[0-9]{4}-[0-9]{2}-[0-9]{2}"));
static NUMBER: LazyLock<DFA<Vec<u32>>> =
    LazyLock::new(|| compile(r"[+\-]?[0-9]+(?:\.[0-9]+)?"));

/// Length of the anchored match of `dfa` at the start of `rest`.
fn find(dfa: &DFA<Vec<u32>>, rest: &str) -> Option<usize> {
    let input = Input::new(rest).anchored(Anchored::Yes);
    match dfa.try_search_fwd(&input) {
        Ok(Some(m)) if m.offset() > 0 => Some(m.offset()),
        _ => None,
    }
}

/// Flags describing where the scanner is relative to a `field:value` filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Set by a `Filter` token, cleared by whitespace.
    pub in_filter: bool,
    pub filter_op: Option<FilterOp>,
    /// A `..` was already scanned in the current filter value.
    pub range_seen: bool,
    /// Kind of the previous token, whitespace included.
    pub last: Option<TokenKind>,
}

impl ScanState {
    fn last_is(&self, kinds: &[TokenKind]) -> bool {
        self.last.is_some_and(|k| kinds.contains(&k))
    }

    fn accepts_range(&self) -> bool {
        self.in_filter && self.filter_op == Some(FilterOp::Eq) && !self.range_seen
    }
}

/// A candidate lexeme: `len` bytes of token text, followed by `skip` bytes that
/// are consumed without becoming a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lexeme {
    len: usize,
    skip: usize,
}

impl Lexeme {
    fn new(len: usize) -> Self {
        Self { len, skip: 0 }
    }
}

struct Rule {
    kind: TokenKind,
    matches: fn(&str) -> Option<Lexeme>,
    accepts: fn(&str, Lexeme, &ScanState) -> bool,
}

fn always(_: &str, _: Lexeme, _: &ScanState) -> bool {
    true
}

/// Scanner rules in priority order.
const RULES: &[Rule] = &[
    Rule {
        kind: TokenKind::Whitespace,
        matches: |rest| find(&WHITESPACE, rest).map(Lexeme::new),
        accepts: always,
    },
    Rule {
        kind: TokenKind::Phrase,
        matches: |rest| find(&PHRASE, rest).map(Lexeme::new),
        accepts: always,
    },
    Rule {
        kind: TokenKind::Url,
        matches: match_url,
        accepts: always,
    },
    Rule {
        kind: TokenKind::Date,
        matches: |rest| find(&DATE, rest).map(Lexeme::new),
        accepts: accepts_literal,
    },
    Rule {
        kind: TokenKind::Number,
        matches: |rest| find(&NUMBER, rest).map(Lexeme::new),
        accepts: accepts_number,
    },
    Rule {
        kind: TokenKind::OrOperator,
        matches: |rest| match_keyword(rest, "OR"),
        accepts: accepts_keyword,
    },
    Rule {
        kind: TokenKind::AndOperator,
        matches: |rest| match_keyword(rest, "AND"),
        accepts: accepts_keyword,
    },
    Rule {
        kind: TokenKind::OpenParen,
        matches: |rest| rest.starts_with('(').then_some(Lexeme::new(1)),
        accepts: always,
    },
    Rule {
        kind: TokenKind::CloseParen,
        matches: |rest| rest.starts_with(')').then_some(Lexeme::new(1)),
        accepts: always,
    },
    Rule {
        kind: TokenKind::Exclude,
        matches: |rest| rest.starts_with('-').then_some(Lexeme::new(1)),
        accepts: accepts_prefix,
    },
    Rule {
        kind: TokenKind::Include,
        matches: |rest| rest.starts_with('+').then_some(Lexeme::new(1)),
        accepts: accepts_prefix,
    },
    Rule {
        kind: TokenKind::Hashtag,
        matches: match_hashtag,
        accepts: always,
    },
    Rule {
        kind: TokenKind::Mention,
        matches: match_mention,
        accepts: always,
    },
    Rule {
        kind: TokenKind::Filter,
        matches: |rest| filter_operator_prefix(rest).map(|op| Lexeme::new(op.len())),
        accepts: always,
    },
    Rule {
        kind: TokenKind::Range,
        matches: |rest| rest.starts_with("..").then_some(Lexeme::new(2)),
        accepts: accepts_range,
    },
    Rule {
        kind: TokenKind::Boost,
        matches: |rest| rest.starts_with('^').then_some(Lexeme::new(1)),
        accepts: accepts_boost,
    },
    Rule {
        kind: TokenKind::Quote,
        matches: |rest| rest.starts_with('"').then_some(Lexeme::new(1)),
        accepts: always,
    },
    Rule {
        kind: TokenKind::Word,
        matches: match_word,
        accepts: always,
    },
    Rule {
        kind: TokenKind::Illegal,
        matches: |rest| Some(Lexeme::new(rest.len())),
        accepts: always,
    },
];

fn match_keyword(rest: &str, keyword: &str) -> Option<Lexeme> {
    let after = rest.strip_prefix(keyword)?;
    after
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || c == '(' || c == ')')
        .then_some(Lexeme::new(keyword.len()))
}

/// Marker plus a body run; the lexeme keeps the marker. The body must hold
/// at least one `required` character, so `#123` and `@42` are not tags.
fn match_marked(
    rest: &str,
    marker: char,
    body: fn(char) -> bool,
    required: fn(char) -> bool,
) -> Option<Lexeme> {
    let tail = rest.strip_prefix(marker)?;
    let len = run_len(tail, body);
    tail[..len]
        .chars()
        .any(required)
        .then_some(Lexeme::new(marker.len_utf8() + len))
}

fn match_hashtag(rest: &str) -> Option<Lexeme> {
    match_marked(rest, '#', is_word_char, |c| c.is_alphabetic() || c == '_')
}

fn match_mention(rest: &str) -> Option<Lexeme> {
    match_marked(
        rest,
        '@',
        |c| is_word_char(c) || c == '-',
        |c| c.is_alphabetic() || c == '_' || c == '-',
    )
}

/// `scheme://` and everything up to whitespace, minus a trailing `^boost`.
fn match_url(rest: &str) -> Option<Lexeme> {
    let scheme = url_scheme_len(rest)?;
    let len = scheme + run_len(&rest[scheme..], |c| !c.is_whitespace());
    if len == scheme {
        return None;
    }
    let text = &rest[..len];
    let boost_start = text
        .rfind('^')
        .filter(|&caret| caret > scheme)
        .filter(|&caret| find(&NUMBER, &text[caret + 1..]) == Some(len - caret - 1));
    let len = boost_start.unwrap_or(len);
    Some(Lexeme::new(len))
}

fn match_word(rest: &str) -> Option<Lexeme> {
    let len = run_len(rest, |c| {
        !c.is_whitespace() && !matches!(c, '(' | ')' | '"' | ':' | '^')
    });
    if len == 0 {
        return None;
    }
    let after = &rest[len..];

    // `word:` or `word^` with nothing after: the operator is dropped.
    let op_len = filter_operator_prefix(after)
        .map(str::len)
        .or_else(|| after.starts_with('^').then_some(1));
    if let Some(op_len) = op_len
        && after[op_len..].chars().next().is_none_or(char::is_whitespace)
    {
        return Some(Lexeme { len, skip: op_len });
    }

    // `word:` followed by something that cannot start a value is one word.
    if let Some(op) = filter_operator_prefix(after)
        && after[op.len()..].chars().next().is_some_and(|c| !is_value_start(c))
    {
        let len = len + run_len(after, |c| !c.is_whitespace());
        return Some(Lexeme::new(len));
    }

    Some(Lexeme::new(len))
}

/// What follows a date or number must end it: nothing, whitespace, a boost,
/// or a range marker inside an equality filter.
fn ends_literal(after: &str, state: &ScanState) -> bool {
    match after.chars().next() {
        None => true,
        Some(c) if c.is_whitespace() || c == '^' => true,
        Some(_) => after.starts_with("..") && state.accepts_range(),
    }
}

fn accepts_literal(rest: &str, lexeme: Lexeme, state: &ScanState) -> bool {
    ends_literal(&rest[lexeme.len..], state)
}

/// Signs belong to the number only as a boost or filter value.
fn accepts_number(rest: &str, lexeme: Lexeme, state: &ScanState) -> bool {
    let signed = rest.starts_with(['+', '-']);
    if signed && !state.last_is(&[TokenKind::Boost, TokenKind::Filter]) {
        return false;
    }
    accepts_literal(rest, lexeme, state)
}

fn accepts_keyword(_: &str, _: Lexeme, state: &ScanState) -> bool {
    !state.last_is(&[TokenKind::Exclude, TokenKind::Include, TokenKind::Filter])
}

fn accepts_prefix(rest: &str, lexeme: Lexeme, state: &ScanState) -> bool {
    let followed = rest[lexeme.len..]
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace());
    followed && !state.last_is(&[TokenKind::Filter])
}

fn accepts_range(_: &str, _: Lexeme, state: &ScanState) -> bool {
    state.accepts_range() && state.last_is(&[TokenKind::Date, TokenKind::Number])
}

fn accepts_boost(rest: &str, lexeme: Lexeme, _: &ScanState) -> bool {
    find(&NUMBER, &rest[lexeme.len..]).is_some()
}

fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Lazy token cursor over one query string.
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    source: &'s str,
    pos: usize,
    state: ScanState,
    processed: String,
    done: bool,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            pos: 0,
            state: ScanState::default(),
            processed: String::with_capacity(source.len()),
            done: false,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Everything consumed so far, whitespace included.
    pub fn processed(&self) -> &str {
        &self.processed
    }

    /// Input not consumed yet.
    pub fn remaining(&self) -> &'s str {
        &self.source[self.pos..]
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Next non-whitespace token. Yields `EndOfInput` forever once drained.
    pub fn next_token(&mut self) -> Token<'s> {
        loop {
            let token = self.scan();
            if token.kind != TokenKind::Whitespace {
                return token;
            }
        }
    }

    fn scan(&mut self) -> Token<'s> {
        let rest = self.remaining();
        if rest.is_empty() || self.done {
            return Token::new(TokenKind::EndOfInput, "", Span::empty(self.pos));
        }

        let (kind, lexeme) = RULES
            .iter()
            .find_map(|rule| {
                let lexeme = (rule.matches)(rest)?;
                (rule.accepts)(rest, lexeme, &self.state).then_some((rule.kind, lexeme))
            })
            .unwrap_or((TokenKind::Illegal, Lexeme::new(rest.len())));

        let start = self.pos;
        let text = &rest[..lexeme.len];
        let consumed = lexeme.len + lexeme.skip;
        self.pos += consumed;
        self.processed.push_str(&rest[..consumed]);
        self.update_state(kind, text);

        if kind == TokenKind::Illegal {
            self.done = true;
        }

        let token = Token::new(kind, text, Span::new(start, start + lexeme.len));
        if kind != TokenKind::Whitespace {
            tracing::trace!(kind = %token.kind, text = token.text, span = %token.span, "token");
        }
        token
    }

    fn update_state(&mut self, kind: TokenKind, text: &str) {
        match kind {
            TokenKind::Whitespace => {
                self.state.in_filter = false;
                self.state.filter_op = None;
                self.state.range_seen = false;
            }
            TokenKind::Filter => {
                self.state.in_filter = true;
                self.state.filter_op = FilterOp::from_lexeme(text);
                self.state.range_seen = false;
            }
            TokenKind::Range => self.state.range_seen = true,
            _ => {}
        }
        self.state.last = Some(kind);
    }
}

impl<'s> Iterator for Scanner<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfInput).then_some(token)
    }
}

/// All tokens of `source` except whitespace and the final `EndOfInput`.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}
