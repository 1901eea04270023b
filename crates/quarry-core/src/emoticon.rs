//! Emoticon recognition.
//!
//! Two sources feed the normalizer's emoticon quoting: a short list of ASCII
//! glyphs like `:-)`, and a code-point range table for Unicode pictographs
//! (emoji, flags, dingbats). Skin-tone modifiers, variation selectors, the
//! zero-width joiner and tag characters only ever continue a pictograph run.

use std::cmp::Ordering;

/// ASCII emoticons, longest first so prefix matching prefers `:-)` over `:-`.
pub const ASCII_EMOTICONS: &[&str] = &[
    "</3", ":-)", ":-(", ":-D", ":-P", ":-p", ":-O", ":-o", ":-/", ":-|", ":-*", ";-)", ":'(",
    "^_^", "-_-", "o_O", "O_o", "B-)", ":)", ":(", ":D", ":P", ":p", ":O", ":o", ":/", ":|",
    ":*", ";)", ";D", ";P", "<3", ":3",
];

/// Inclusive code-point ranges that start a pictograph. Sorted and disjoint.
const PICTOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F02F),
    (0x1F0A0, 0x1F0FF),
    // Enclosed alphanumerics, including the regional indicators used by flags.
    (0x1F100, 0x1F2FF),
    (0x1F300, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F7E0, 0x1F7EB),
    (0x1F900, 0x1F9FF),
    (0x1FA70, 0x1FAFF),
];

/// Code points that may follow a pictograph inside one sequence.
const MODIFIER_RANGES: &[(u32, u32)] = &[
    (0x200D, 0x200D),
    (0x20E3, 0x20E3),
    (0xFE0E, 0xFE0F),
    (0x1F3FB, 0x1F3FF),
    (0xE0020, 0xE007F),
];

fn in_ranges(table: &[(u32, u32)], c: char) -> bool {
    let cp = c as u32;
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Whether `c` can start a pictograph sequence.
#[inline]
pub fn is_pictograph(c: char) -> bool {
    in_ranges(PICTOGRAPH_RANGES, c)
}

/// Whether `c` only makes sense as part of a pictograph sequence.
#[inline]
pub fn is_pictograph_modifier(c: char) -> bool {
    in_ranges(MODIFIER_RANGES, c)
}

/// Byte length of the pictograph run at the start of `s` (0 if none).
pub fn pictograph_run_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if is_pictograph(c) => {}
        _ => return 0,
    }
    for (i, c) in chars {
        if !is_pictograph(c) && !is_pictograph_modifier(c) {
            return i;
        }
    }
    s.len()
}

/// Longest ASCII emoticon that `s` starts with.
pub fn ascii_emoticon_prefix(s: &str) -> Option<&'static str> {
    ASCII_EMOTICONS.iter().copied().find(|e| s.starts_with(e))
}

/// Whether `s` is exactly one ASCII emoticon.
pub fn is_basic_emoticon(s: &str) -> bool {
    ASCII_EMOTICONS.contains(&s)
}

/// Whether all of `s` is an emoticon: one ASCII glyph or one pictograph run.
pub fn is_emoticon(s: &str) -> bool {
    !s.is_empty() && (is_basic_emoticon(s) || pictograph_run_len(s) == s.len())
}
