//! Source positions: [Span]s and the [LineTable] used to turn them into lines and columns

/// Something that can provide the [Span] of the source it was created from
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A range of bytes in a source file
#[derive(Debug, Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: min,
            len: max - min,
        }
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// The byte offset each line of a source file starts at.
///
/// The lexer records a new entry every time it passes a newline, so resolving an offset
/// to a line and column never needs to rescan the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    starts: Vec<usize>,
}

impl LineTable {
    /// Creates a line table containing only the first line
    pub fn new() -> Self {
        Self { starts: vec![0] }
    }

    /// Records that a line starts at `offset`.
    ///
    /// Offsets must be pushed in increasing order.
    pub fn push_line_start(&mut self, offset: usize) {
        debug_assert!(
            self.starts.last().map_or(true, |&last| last < offset),
            "line starts must increase monotonically"
        );
        self.starts.push(offset);
    }

    /// Gets the 1-based line and column of a byte offset
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset) - 1;
        (line + 1, offset - self.starts[line] + 1)
    }

    /// The number of lines seen
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// The line start offsets, in order
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
}

impl Default for LineTable {
    fn default() -> Self {
        Self::new()
    }
}
