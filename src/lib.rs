//! Split a linear index space into consecutive fixed-size chunks and
//! deliver them through a buffered channel.
//!
//! The [`Chunker`] computes the partition of `[0, N)` for a given chunk
//! size; it never touches the underlying collection elements, it only
//! deals in index ranges.

pub mod chunk;
pub mod chunker;

pub use chunk::Chunk;
pub use chunker::{ChunkSize, Chunker, CollectionSize, InvalidArgumentError};
