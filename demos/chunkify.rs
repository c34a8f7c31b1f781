//! A simple CLI app that prints the chunk partition of an index range.

use chunkify::Chunker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let collection_size = args
        .next()
        .ok_or("pass collection size as a first argument")?
        .parse()?;
    let chunk_size = args
        .next()
        .ok_or("pass chunk size as a second argument")?
        .parse()?;

    let chunker = Chunker::new(collection_size, chunk_size)?;
    let mut chunks = chunker.chunks();
    while let Some(chunk) = chunks.recv().await {
        println!("[{}, {})", chunk.start, chunk.end);
    }

    Ok(())
}
