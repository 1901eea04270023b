//! Phase 1: split raw input into typed segments.

use quarry_core::Span;
use quarry_core::emoticon::{ascii_emoticon_prefix, is_pictograph, pictograph_run_len};
use quarry_core::utils::{is_word_char, url_scheme_len};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentKind {
    Emoticon,
    Paren,
    Exclude,
    Include,
    Hashtag,
    Mention,
    Boost,
    Url,
    Phrase,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    /// Where the segment came from in the raw input.
    pub span: Span,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == SegmentKind::Paren && self.text == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == SegmentKind::Paren && self.text == ")"
    }

    /// Text that must survive rewriting byte for byte: phrases and `-"..."` / `+"..."`.
    pub fn is_quoted(&self) -> bool {
        match self.kind {
            SegmentKind::Phrase => true,
            SegmentKind::Exclude | SegmentKind::Include => self.text[1..].starts_with('"'),
            _ => false,
        }
    }
}

type Matcher = fn(rest: &str, prev: Option<char>) -> Option<usize>;

/// Segment matchers in priority order. The first one that matches at a
/// position wins; a position nothing matches loses one character.
const MATCHERS: &[(SegmentKind, Matcher)] = &[
    (SegmentKind::Emoticon, match_ascii_emoticon),
    (SegmentKind::Emoticon, match_pictographs),
    (SegmentKind::Paren, match_paren),
    (SegmentKind::Exclude, match_exclude),
    (SegmentKind::Include, match_include),
    (SegmentKind::Hashtag, match_hashtag),
    (SegmentKind::Mention, match_mention),
    (SegmentKind::Boost, match_boost),
    (SegmentKind::Url, match_url),
    (SegmentKind::Phrase, match_phrase),
    (SegmentKind::Other, match_other),
];

pub(crate) fn segment(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pos = 0;
    let mut prev = None;

    while let Some(c) = raw[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            prev = Some(c);
            continue;
        }

        let rest = &raw[pos..];
        let matched = MATCHERS
            .iter()
            .find_map(|(kind, matcher)| matcher(rest, prev).map(|len| (*kind, len)));

        match matched {
            Some((kind, len)) => {
                let text = &rest[..len];
                segments.push(Segment::new(kind, text, Span::new(pos, pos + len)));
                prev = text.chars().next_back();
                pos += len;
            }
            None => {
                pos += c.len_utf8();
                prev = Some(c);
            }
        }
    }

    segments
}

fn match_ascii_emoticon(rest: &str, prev: Option<char>) -> Option<usize> {
    if !prev.is_none_or(|c| c.is_whitespace() || c == '(') {
        return None;
    }
    let glyph = ascii_emoticon_prefix(rest)?;
    let next = rest[glyph.len()..].chars().next();
    next.is_none_or(|c| c.is_whitespace() || c == ')')
        .then_some(glyph.len())
}

fn match_pictographs(rest: &str, _prev: Option<char>) -> Option<usize> {
    match pictograph_run_len(rest) {
        0 => None,
        len => Some(len),
    }
}

fn match_paren(rest: &str, _prev: Option<char>) -> Option<usize> {
    matches!(rest.as_bytes().first(), Some(b'(' | b')')).then_some(1)
}

fn match_exclude(rest: &str, _prev: Option<char>) -> Option<usize> {
    match_prefixed(rest, '-')
}

fn match_include(rest: &str, _prev: Option<char>) -> Option<usize> {
    match_prefixed(rest, '+')
}

/// `-term`, `+term`, or a signed phrase. Without a closing quote the phrase
/// ends where a plain term would.
fn match_prefixed(rest: &str, sign: char) -> Option<usize> {
    let body = rest.strip_prefix(sign)?;
    if let Some(phrase) = body.strip_prefix('"') {
        let len = match phrase.find('"') {
            Some(i) => i + 1,
            None => run_len(phrase, |c| !c.is_whitespace() && !matches!(c, '(' | ')')),
        };
        return Some(2 + len);
    }
    let len = run_len(body, |c| {
        !c.is_whitespace() && !matches!(c, '(' | ')' | '"' | '^') && !is_pictograph(c)
    });
    (len > 0).then_some(1 + len)
}

/// `#` + word characters, at least one of them a letter or `_`.
fn match_hashtag(rest: &str, _prev: Option<char>) -> Option<usize> {
    let body = rest.strip_prefix('#')?;
    let len = run_len(body, is_word_char);
    body[..len]
        .chars()
        .any(|c| c.is_alphabetic() || c == '_')
        .then_some(1 + len)
}

/// `@` + word characters or `-`, at least one of them a letter, `_` or `-`.
fn match_mention(rest: &str, _prev: Option<char>) -> Option<usize> {
    let body = rest.strip_prefix('@')?;
    let len = run_len(body, |c| is_word_char(c) || c == '-');
    body[..len]
        .chars()
        .any(|c| c.is_alphabetic() || c == '_' || c == '-')
        .then_some(1 + len)
}

/// `^` + optionally signed decimal.
fn match_boost(rest: &str, _prev: Option<char>) -> Option<usize> {
    let body = rest.strip_prefix('^')?;
    let sign = usize::from(body.starts_with(['+', '-']));
    let len = signed_decimal_len(&body[sign..])?;
    Some(1 + sign + len)
}

fn match_url(rest: &str, _prev: Option<char>) -> Option<usize> {
    let scheme = url_scheme_len(rest)?;
    let len = run_len(&rest[scheme..], |c| {
        !c.is_whitespace() && !matches!(c, '(' | ')' | '"' | '^' | '#')
    });
    (len > 0).then_some(scheme + len)
}

fn match_phrase(rest: &str, _prev: Option<char>) -> Option<usize> {
    let body = rest.strip_prefix('"')?;
    body.find('"').map(|i| i + 2)
}

fn match_other(rest: &str, _prev: Option<char>) -> Option<usize> {
    let len = run_len(rest, |c| {
        !c.is_whitespace() && !matches!(c, '(' | ')' | '#' | '^' | '"') && !is_pictograph(c)
    });
    (len > 0).then_some(len)
}

/// `\d+(\.\d+)?` at the start of `s`.
pub(crate) fn signed_decimal_len(s: &str) -> Option<usize> {
    let int = run_len(s, |c| c.is_ascii_digit());
    if int == 0 {
        return None;
    }
    let frac = s[int..]
        .strip_prefix('.')
        .map(|f| run_len(f, |c| c.is_ascii_digit()))
        .filter(|&n| n > 0)
        .map_or(0, |n| n + 1);
    Some(int + frac)
}

fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}
