//! A notion of a chunk of a linear index space.

/// A half-open interval `[start, end)` of indices within a collection.
///
/// `start` is inclusive and `end` is exclusive. The chunks produced from
/// a single partition tile the collection index space with no gaps and
/// no overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// The index of the first element in this chunk.
    pub start: u64,
    /// The position after the last element in this chunk.
    pub end: u64,
}

impl Chunk {
    /// The number of indices this chunk spans.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether this chunk spans no indices.
    ///
    /// Chunks emitted by [`Chunker::chunks`](crate::Chunker::chunks) are
    /// never empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Take the start and end out of this chunk.
    pub fn into_inner(self) -> (u64, u64) {
        (self.start, self.end)
    }
}
