//! Byte ranges into CSV source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The same range moved `offset` bytes to the right, turning a
    /// line-relative span into a document-relative one.
    pub fn offset(&self, offset: usize) -> Self {
        Self::new(self.start + offset..self.end + offset)
    }

    /// The covered text of `source`.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds or not on character boundaries.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}
