//! Byte ranges within one input line.

/// Half-open byte range `start..end` into the line being parsed.
///
/// Offsets are `u32`; [`parse`](crate::parse) rejects longer input before
/// any span is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for nodes with no source position.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`, used for the line anchors.
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// Span from scanner offsets, saturating at `u32::MAX`.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span::new(clamp(start), clamp(end))
    }

    /// Smallest span covering both.
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// One-based column of `start`, as printed in `origin:col: error:` lines.
    pub const fn column(self) -> u32 {
        self.start.saturating_add(1)
    }

    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}
