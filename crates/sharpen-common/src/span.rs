//! Byte-offset spans into source text.

use serde::{Deserialize, Serialize};

/// A contiguous range of source text, expressed as a start offset and a length.
///
/// Offsets are byte offsets into the rendered text of a syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub length: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Create a span from start and (exclusive) end offsets.
    ///
    /// An `end` before `start` yields an empty span at `start`.
    #[inline]
    pub const fn from_bounds(start: u32, end: u32) -> Self {
        let length = if end > start { end - start } else { 0 };
        Self { start, length }
    }

    /// An empty span at `offset`, as produced by a caret position.
    #[inline]
    pub const fn at(offset: u32) -> Self {
        Self::new(offset, 0)
    }

    /// Exclusive end offset, saturating at `u32::MAX`.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }

    /// Exclusive end offset, or `None` when it does not fit in a `u32`.
    #[inline]
    pub const fn checked_end(&self) -> Option<u32> {
        self.start.checked_add(self.length)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `offset` lies within `[start, end)`.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Whether `other` lies entirely within this span.
    ///
    /// An empty span placed exactly at `end` is contained, so a caret sitting
    /// right after a token still counts as touching it.
    #[inline]
    pub const fn contains_span(&self, other: Span) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{})", self.start, self.end())
    }
}

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod span_tests;
