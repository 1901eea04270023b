//! Phase 3: drop, repair and quote segments.

use quarry_core::emoticon::is_emoticon;
use quarry_core::utils::{
    filter_operator_suffix, is_bare_operator, is_filter_key, is_operator_keyword, looks_like_url,
};

use super::segment::{Segment, SegmentKind};

pub(crate) fn rewrite(segments: Vec<Segment>) -> Vec<Segment> {
    let segments: Vec<Segment> = segments
        .into_iter()
        .filter(|seg| !is_bare_operator(&seg.text))
        .collect();
    let segments = merge_filter_values(segments);

    let segments: Vec<Segment> = segments
        .into_iter()
        .map(repair_filter)
        .filter(|seg| !seg.text.is_empty() && !is_bare_operator(&seg.text))
        .collect();

    let segments = drop_stacked_boosts(segments);
    let segments = drop_orphan_boosts(segments);

    segments.into_iter().map(quote_emoticon).collect()
}

/// `field:` followed by its value in a separate segment becomes one segment.
/// `OR`/`AND` are never values; `field:` stays dangling before them.
fn merge_filter_values(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());

    for seg in segments {
        if let Some(last) = out.last_mut()
            && awaits_value(last)
            && can_be_value(&seg)
        {
            last.text.push_str(&seg.text);
            last.span = last.span.cover(seg.span);
            last.kind = SegmentKind::Other;
            continue;
        }
        out.push(seg);
    }

    out
}

fn can_be_value(seg: &Segment) -> bool {
    match seg.kind {
        SegmentKind::Other => !is_operator_keyword(&seg.text),
        SegmentKind::Exclude
        | SegmentKind::Include
        | SegmentKind::Hashtag
        | SegmentKind::Mention
        | SegmentKind::Url => true,
        _ => false,
    }
}

/// A keyed segment ending in a filter operator, such as `lang:` or `-price:>`.
pub(crate) fn awaits_value(seg: &Segment) -> bool {
    if !matches!(
        seg.kind,
        SegmentKind::Other | SegmentKind::Exclude | SegmentKind::Include
    ) || seg.is_quoted()
    {
        return false;
    }
    let sign_len = usize::from(seg.kind != SegmentKind::Other);
    filter_operator_suffix(&seg.text).is_some_and(|op| seg.text.len() > sign_len + op.len())
}

/// Invalid field names lose their filter; stacked filters keep the last value.
fn repair_filter(mut seg: Segment) -> Segment {
    if !matches!(
        seg.kind,
        SegmentKind::Other | SegmentKind::Exclude | SegmentKind::Include
    ) || seg.is_quoted()
    {
        return seg;
    }

    let sign_len = usize::from(seg.kind != SegmentKind::Other);
    let (sign, body) = seg.text.split_at(sign_len);
    let Some(first) = body.find(':') else {
        return seg;
    };

    let key = &body[..first];
    let repaired = if !is_filter_key(key) {
        key.to_string()
    } else {
        let value = body[first + 1..].trim_start_matches(['>', '<', '=']);
        let last = body.rfind(':').unwrap_or(first);
        if last == first || looks_like_url(value) {
            return seg;
        }
        format!("{key}{}", &body[last..])
    };

    tracing::trace!(from = %seg.text, to = %repaired, "repaired filter");
    seg.text = format!("{sign}{repaired}");
    seg
}

/// `a^1^2`: of two boosts in a row only the later one survives.
fn drop_stacked_boosts(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments {
        if seg.kind == SegmentKind::Boost
            && out.last().is_some_and(|last| last.kind == SegmentKind::Boost)
        {
            out.pop();
        }
        out.push(seg);
    }
    out
}

/// A boost must follow a term: not a group, a keyword, a dangling filter, or nothing.
fn drop_orphan_boosts(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments {
        if seg.kind == SegmentKind::Boost && !out.last().is_some_and(accepts_boost) {
            continue;
        }
        out.push(seg);
    }
    out
}

pub(crate) fn accepts_boost(prev: &Segment) -> bool {
    match prev.kind {
        SegmentKind::Paren | SegmentKind::Boost => false,
        SegmentKind::Other => !is_operator_keyword(&prev.text) && !awaits_value(prev),
        _ => !awaits_value(prev),
    }
}

fn quote_emoticon(mut seg: Segment) -> Segment {
    if seg.kind == SegmentKind::Emoticon && is_emoticon(&seg.text) {
        seg.text = format!("\"{}\"", seg.text);
        seg.kind = SegmentKind::Phrase;
    }
    seg
}
