//! Phase 2: per-segment character cleanup and URL re-merging.

use quarry_core::Span;
use quarry_core::utils::COLLAPSIBLE_OPERATORS;

use super::segment::{Segment, SegmentKind};

pub(crate) fn clean(raw: &str, segments: Vec<Segment>, fold_operators: bool) -> Vec<Segment> {
    let segments = segments
        .into_iter()
        .filter_map(|mut seg| {
            let trimmed = seg.text.trim();
            if trimmed.len() != seg.text.len() {
                seg.text = trimmed.to_string();
            }
            if fold_operators {
                fold(&mut seg);
            }
            if seg.text.is_empty() {
                return None;
            }
            if !seg.is_quoted() && !matches!(seg.kind, SegmentKind::Url | SegmentKind::Emoticon) {
                seg.text = collapse_repeats(&seg.text);
            }
            Some(seg)
        })
        .collect();

    merge_urls(raw, segments)
}

/// `AND` becomes `OR`, and parentheses inside a term are dropped.
fn fold(seg: &mut Segment) {
    if seg.kind == SegmentKind::Other && seg.text == "AND" {
        seg.text = "OR".to_string();
        return;
    }
    let keeps_parens = seg.is_quoted()
        || matches!(
            seg.kind,
            SegmentKind::Paren | SegmentKind::Url | SegmentKind::Emoticon
        );
    if !keeps_parens && seg.text.contains(['(', ')']) {
        seg.text.retain(|c| c != '(' && c != ')');
    }
}

/// Collapse runs of a repeated operator to its first occurrence, and a
/// leading mix of `-`/`+` to its first sign.
pub(crate) fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    if let Some(sign) = rest.chars().next().filter(|c| matches!(c, '-' | '+')) {
        out.push(sign);
        rest = rest.trim_start_matches(['-', '+']);
    }

    while let Some(c) = rest.chars().next() {
        match COLLAPSIBLE_OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            Some(op) => {
                out.push_str(op);
                rest = &rest[op.len()..];
                while let Some(tail) = rest.strip_prefix(op) {
                    rest = tail;
                }
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

/// Segmentation cuts URLs at parentheses, quotes and `#`. Glue the pieces
/// that sat next to a URL in the raw input back onto it. A `(` only joins
/// the URL once its `)` does, so a URL never carries an unmatched paren.
fn merge_urls(raw: &str, segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut run: Option<UrlRun> = None;

    for seg in segments {
        if let Some(url) = run.as_mut()
            && url.continues(raw, &seg)
        {
            url.absorb(raw, seg);
            continue;
        }
        if let Some(url) = run.take() {
            url.finish(&mut out);
        }
        if seg.kind == SegmentKind::Url {
            run = Some(UrlRun::new(seg));
        } else {
            out.push(seg);
        }
    }
    if let Some(url) = run {
        url.finish(&mut out);
    }

    out
}

/// A URL being reassembled. `pending` holds pieces after an unclosed `(`.
struct UrlRun {
    url: Segment,
    pending: Vec<Segment>,
    depth: u32,
}

impl UrlRun {
    fn new(url: Segment) -> Self {
        Self {
            url,
            pending: Vec::new(),
            depth: 0,
        }
    }

    fn end(&self) -> u32 {
        self.pending.last().map_or(self.url.span.end, |seg| seg.span.end)
    }

    fn continues(&mut self, raw: &str, next: &Segment) -> bool {
        let gap = &raw[self.end() as usize..next.span.start as usize];
        if gap.contains(char::is_whitespace) {
            return false;
        }
        match next.kind {
            SegmentKind::Boost | SegmentKind::Phrase => false,
            SegmentKind::Paren if next.text == "(" => {
                self.depth += 1;
                true
            }
            SegmentKind::Paren => {
                if self.depth == 0 {
                    return false;
                }
                self.depth -= 1;
                true
            }
            _ => true,
        }
    }

    fn absorb(&mut self, raw: &str, seg: Segment) {
        self.pending.push(seg);
        if self.depth > 0 {
            return;
        }
        let span = Span::new(self.url.span.start as usize, self.end() as usize);
        self.url.text = span.text(raw).to_string();
        self.url.span = span;
        self.pending.clear();
    }

    fn finish(self, out: &mut Vec<Segment>) {
        out.push(self.url);
        out.extend(self.pending);
    }
}
