//! Growable append-only byte sink for rendered output.
//!
//! Rendering appends literal markup and transformed text into an
//! [`OutputBuf`], which is handed back to the caller whole once the event
//! stream has been consumed. The buffer only ever grows during a render
//! pass; the single exception is the one-byte [`pop`](OutputBuf::pop) used
//! to trim a trailing dash from a heading slug.

use std::fmt;
use std::ops::Range;

use bstr::ByteSlice;

/// An owned, growable byte sequence.
///
/// Thin wrapper over `Vec<u8>` that exposes exactly the operations the
/// renderer needs: capacity reservation, appends, ranged self-copy (for
/// duplicating a slug into an anchor's `href`), and the trailing-byte trim.
/// Allocation failure aborts the process, so appends are infallible.
#[derive(Clone, Default)]
pub struct OutputBuf {
    bytes: Vec<u8>,
}

impl OutputBuf {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a buffer with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Ensure space for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.bytes.reserve(additional);
    }

    /// Append a single byte.
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append a byte slice.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Re-append a range of already-written output.
    pub fn extend_from_within(&mut self, range: Range<usize>) {
        self.bytes.extend_from_within(range);
    }

    /// Drop the last byte. No-op on an empty buffer.
    pub(crate) fn pop(&mut self) {
        self.bytes.pop();
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// View the accumulated output.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the accumulated output.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Write for OutputBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.bytes.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl fmt::Debug for OutputBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OutputBuf")
            .field(&self.bytes.as_bstr())
            .finish()
    }
}
