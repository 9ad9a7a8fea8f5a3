//! Newline-boundary text chunking.
//!
//! The knowledge document is split into retrieval chunks the same way the
//! vector index was originally built: pieces separated on `'\n'`, merged
//! greedily into chunks of at most `chunk_size` characters, with a tail of
//! up to `chunk_overlap` characters carried into the next chunk so that
//! facts spanning a boundary stay retrievable. A single piece longer than
//! `chunk_size` becomes its own oversized chunk rather than being cut
//! mid-line.

/// Splits text into overlapping chunks on newline boundaries.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Default for TextSplitter {
    /// The fixed document-chunking configuration the vector index was
    /// built with: 1000-character chunks, 200-character overlap.
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

impl TextSplitter {
    /// Creates a splitter with explicit chunk size and overlap.
    #[must_use]
    pub const fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Splits `text` into chunks. Deterministic: the same input always
    /// produces the same chunk sequence.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0usize;

        for piece in text.split('\n') {
            let sep = usize::from(!current.is_empty());
            if current_len + sep + piece.len() > self.chunk_size && !current.is_empty() {
                chunks.push(current.join("\n"));

                let (tail, tail_len) = self.overlap_tail(&current);
                current = tail;
                current_len = tail_len;
            }

            let sep = usize::from(!current.is_empty());
            current_len += sep + piece.len();
            current.push(piece);
        }

        if !current.is_empty() {
            chunks.push(current.join("\n"));
        }

        chunks.retain(|c| !c.trim().is_empty());
        chunks
    }

    /// Collects trailing pieces of the emitted chunk, newest-first, until
    /// adding another would exceed the overlap budget.
    fn overlap_tail<'a>(&self, pieces: &[&'a str]) -> (Vec<&'a str>, usize) {
        let mut tail: Vec<&str> = Vec::new();
        let mut tail_len = 0usize;

        for piece in pieces.iter().rev() {
            let sep = usize::from(!tail.is_empty());
            if tail_len + sep + piece.len() > self.chunk_overlap {
                break;
            }
            tail_len += sep + piece.len();
            tail.push(piece);
        }

        tail.reverse();
        (tail, tail_len)
    }
}
