//! The chunker and its channel-based chunk delivery.

use tokio::sync::mpsc;

use crate::Chunk;

/// The type we use for the collection size.
pub type CollectionSize = u64;

/// The type we use for the chunk size.
pub type ChunkSize = u64;

/// An invalid argument was passed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentError {
    /// The chunk size was not a positive integer.
    #[error("chunk size must be a positive integer")]
    ChunkSize,
    /// The collection size was not a positive integer.
    #[error("collection size must be a positive integer")]
    CollectionSize,
}

/// The chunker splits a linear index space into equally-sized (except for
/// possibly the last one) consecutive chunks and delivers them via a
/// buffered channel.
///
/// Immutable after construction; [`Chunker::chunks`] may be called any
/// number of times, and each call produces an independent channel with
/// the same partition.
#[derive(Debug)]
pub struct Chunker {
    /// The total number of indexable elements in the collection.
    collection_size: CollectionSize,
    /// The size of a chunk.
    chunk_size: ChunkSize,
}

impl Chunker {
    /// Create a new [`Chunker`] for the given collection and chunk sizes.
    ///
    /// Both sizes must be positive integers.
    pub fn new(
        collection_size: CollectionSize,
        chunk_size: ChunkSize,
    ) -> Result<Self, InvalidArgumentError> {
        if chunk_size == 0 {
            return Err(InvalidArgumentError::ChunkSize);
        }
        if collection_size == 0 {
            return Err(InvalidArgumentError::CollectionSize);
        }
        Ok(Self {
            collection_size,
            chunk_size,
        })
    }

    /// The total number of chunks the partition consists of.
    ///
    /// Equal to the collection size divided by the chunk size, rounded up.
    pub fn total_chunks(&self) -> u64 {
        let full_chunks = self.collection_size / self.chunk_size;
        full_chunks + u64::from(self.collection_size % self.chunk_size != 0)
    }

    /// Produce the partition chunks via a buffered receive-only channel.
    ///
    /// Consecutive chunks are sent to the channel in ascending order, each
    /// of the same size; the final chunk may be smaller than the others.
    /// If the chunk size is greater than the collection size, the single
    /// chunk sent covers the entire collection.
    ///
    /// The channel buffer is sized to the total number of chunks, so the
    /// producing task never blocks and always runs to completion and
    /// closes the channel, whether or not the receiver keeps draining.
    /// Dropping the receiver early is safe.
    ///
    /// Must be called within a tokio runtime context.
    pub fn chunks(&self) -> mpsc::Receiver<Chunk> {
        let full_chunks = self.collection_size / self.chunk_size;
        let remainder = self.collection_size % self.chunk_size;
        let total_chunks = full_chunks + u64::from(remainder != 0);

        let capacity = total_chunks
            .try_into()
            .expect("unable to convert the chunk count to usize");
        let (tx, rx) = mpsc::channel(capacity);

        let collection_size = self.collection_size;
        let chunk_size = self.chunk_size;
        tokio::spawn(async move {
            tracing::debug!(
                message = "producing chunks",
                %collection_size,
                %chunk_size,
                %total_chunks,
            );
            for index in 0..full_chunks {
                let chunk = Chunk {
                    start: index * chunk_size,
                    end: (index + 1) * chunk_size,
                };
                if tx.send(chunk).await.is_err() {
                    // The receiver is gone, no point in producing more.
                    tracing::debug!(message = "chunk receiver dropped", %index);
                    return;
                }
            }
            if remainder != 0 {
                let chunk = Chunk {
                    start: full_chunks * chunk_size,
                    end: collection_size,
                };
                if tx.send(chunk).await.is_err() {
                    tracing::debug!(message = "chunk receiver dropped", index = %full_chunks);
                }
            }
        });

        rx
    }
}
