//! A single link of a byte range chain.

use bytes::{Buf, Bytes};

/// A view into a shared, reference-counted byte buffer.
///
/// The view holds a `Bytes` handle, which keeps the backing storage alive
/// for as long as the range exists. Several ranges, possibly held by
/// different chains, can refer to the same storage; slicing a range never
/// copies the bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainedByteRange {
    range: Bytes,
}

impl ChainedByteRange {
    /// Creates a range viewing all of `bytes`.
    #[inline]
    pub fn new(bytes: Bytes) -> Self {
        ChainedByteRange { range: bytes }
    }

    /// Returns the bytes currently visible through this range.
    #[inline]
    pub fn range(&self) -> &[u8] {
        &self.range
    }

    /// Returns the shared handle backing this range.
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.range
    }

    /// Returns the number of bytes in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Returns true if the range views no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Consumes the range, returning the handle to the viewed bytes.
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.range
    }

    /// Advances the start of the range by `cnt` bytes.
    ///
    /// The range keeps its reference to the backing storage even if it
    /// becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `cnt` exceeds the length of the range.
    pub fn trim_start(&mut self, cnt: usize) {
        assert!(
            cnt <= self.range.len(),
            "cannot trim {} bytes from a range of length {}",
            cnt,
            self.range.len()
        );
        self.range.advance(cnt);
    }

    /// Splits off the first `at` bytes into a new range sharing the same
    /// storage. `self` is left with the bytes `[at, len)`.
    pub(crate) fn split_to(&mut self, at: usize) -> Self {
        debug_assert!(at <= self.range.len());
        ChainedByteRange {
            range: self.range.split_to(at),
        }
    }

    /// Copies the viewed bytes into a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.range.to_vec()
    }
}

impl From<Bytes> for ChainedByteRange {
    #[inline]
    fn from(bytes: Bytes) -> Self {
        ChainedByteRange::new(bytes)
    }
}
