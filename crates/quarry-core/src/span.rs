//! Byte spans into query text.

use std::ops::Range;

use serde::Serialize;

/// Half-open byte range `start..end` into a query string.
///
/// Offsets are `u32`: queries are user-typed search boxes, never gigabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Slices `source` by this span.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.as_range()]
    }

    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.as_range()
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
