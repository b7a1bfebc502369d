//! Fixed-size chunking of section buffers

use crate::error::{DecodeError, Result};

/// Iterator over equal-size chunks of a byte buffer.
///
/// A trailing partial chunk is never yielded; it stays reachable through
/// [`Chunks::remainder`]. Clone the iterator to walk the buffer again.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    inner: std::slice::ChunksExact<'a, u8>,
}

/// Split `data` into `size`-byte chunks.
pub fn chunks(data: &[u8], size: usize) -> Result<Chunks<'_>> {
    if size == 0 {
        return Err(DecodeError::InvalidChunkSize(size));
    }
    Ok(Chunks { inner: data.chunks_exact(size) })
}

impl<'a> Chunks<'a> {
    /// Bytes left over after the last whole chunk.
    pub fn remainder(&self) -> &'a [u8] {
        self.inner.remainder()
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chunks<'_> {}
