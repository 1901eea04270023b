//! Phase 4: balance parentheses, drop misplaced keywords and render.

use quarry_core::Span;
use quarry_core::utils::{filter_operator_suffix, is_operator_keyword};

use super::rewrite::accepts_boost;
use super::segment::{Segment, SegmentKind};

pub(crate) fn assemble(segments: Vec<Segment>) -> String {
    let segments = balance(segments);
    let segments = tidy(segments);
    render(&segments)
}

fn paren(text: &str) -> Segment {
    Segment::new(SegmentKind::Paren, text, Span::default())
}

fn is_keyword(seg: &Segment) -> bool {
    seg.kind == SegmentKind::Other && is_operator_keyword(&seg.text)
}

/// Excess `)` get a matching `(` in front; excess `(` get a `)` at the end.
fn balance(segments: Vec<Segment>) -> Vec<Segment> {
    let mut depth = 0usize;
    let mut missing_opens = 0usize;

    for seg in &segments {
        if seg.is_open_paren() {
            depth += 1;
        } else if seg.is_close_paren() {
            if depth == 0 {
                missing_opens += 1;
            } else {
                depth -= 1;
            }
        }
    }

    if depth == 0 && missing_opens == 0 {
        return segments;
    }

    tracing::trace!(missing_opens, missing_closes = depth, "balancing parentheses");
    let mut out = Vec::with_capacity(segments.len() + missing_opens + depth);
    out.extend(std::iter::repeat_with(|| paren("(")).take(missing_opens));
    out.extend(segments);
    out.extend(std::iter::repeat_with(|| paren(")")).take(depth));
    out
}

/// Remove keywords with nothing to join, empty groups and orphaned boosts
/// until nothing changes.
fn tidy(mut segments: Vec<Segment>) -> Vec<Segment> {
    loop {
        let before = segments.len();
        let mut out: Vec<Segment> = Vec::with_capacity(before);

        let mut iter = segments.into_iter().peekable();
        while let Some(seg) = iter.next() {
            let next = iter.peek();
            let prev = out.last();

            if is_keyword(&seg) {
                let dangling_left = prev.is_none_or(|p| p.is_open_paren() || is_keyword(p));
                let dangling_right = next.is_none_or(|n| n.is_close_paren());
                if dangling_left || dangling_right {
                    continue;
                }
            }
            if seg.is_close_paren() && prev.is_some_and(Segment::is_open_paren) {
                out.pop();
                continue;
            }
            if seg.kind == SegmentKind::Boost && !prev.is_some_and(accepts_boost) {
                continue;
            }
            out.push(seg);
        }

        segments = out;
        if segments.len() == before {
            return segments;
        }
    }
}

fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Segment> = None;

    for seg in segments {
        if let Some(p) = prev {
            out.push_str(separator(p, seg));
        }
        out.push_str(&seg.text);
        prev = Some(seg);
    }

    out
}

fn separator(prev: &Segment, cur: &Segment) -> &'static str {
    if cur.is_close_paren() || prev.is_open_paren() {
        return " ";
    }
    if cur.kind == SegmentKind::Boost {
        return "";
    }
    if filter_operator_suffix(&prev.text).is_some()
        && prev.kind != SegmentKind::Phrase
        && cur.kind != SegmentKind::Paren
        && !is_keyword(cur)
    {
        return "";
    }
    if is_keyword(prev) || is_keyword(cur) {
        return " ";
    }
    " OR "
}
