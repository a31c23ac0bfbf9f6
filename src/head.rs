//! The owning handle of a byte range chain.

use crate::{ChainedByteRange, IntoRanges, Iter};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use log::trace;

use std::collections::LinkedList;
use std::io::IoSlice;
use std::iter::FromIterator;
use std::mem;

/// An ordered run of bytes held as a chain of zero-copy ranges.
///
/// Each range in the chain views a part of some shared `Bytes` buffer.
/// Appending data, splitting off a prefix and trimming the start of the
/// chain never copy the payload bytes: whole ranges are moved between chains
/// by relinking, and a range that straddles the split point is sliced into
/// two ranges that share the backing storage.
///
/// The chain never holds empty ranges, and the total length is cached so
/// that `chain_length` is O(1).
///
/// `ChainedByteRangeHead` is not `Clone`; to hand the data over to another
/// owner, move the head, or use `std::mem::take` to leave an empty head
/// in its place.
#[derive(Debug, Default)]
pub struct ChainedByteRangeHead {
    ranges: LinkedList<ChainedByteRange>,
    len: usize,
}

impl ChainedByteRangeHead {
    /// Creates an empty chain.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a chain from a sequence of buffer segments.
    /// Empty segments are skipped.
    pub fn from_chain<I>(chain: I) -> Self
    where
        I: IntoIterator<Item = Bytes>,
    {
        let mut head = ChainedByteRangeHead::new();
        head.append_chain(chain);
        head
    }

    /// Returns the total number of bytes in the chain.
    #[inline]
    pub fn chain_length(&self) -> usize {
        self.len
    }

    /// Computes the total number of bytes by walking the chain.
    ///
    /// The result always equals `chain_length`; this is provided for
    /// consistency checks.
    pub fn compute_chain_data_length(&self) -> usize {
        self.ranges.iter().map(ChainedByteRange::len).sum()
    }

    /// Returns true if the chain holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of ranges in the chain.
    #[inline]
    pub fn num_ranges(&self) -> usize {
        self.ranges.len()
    }

    /// Returns the first range of the chain, or `None` if the chain is empty.
    #[inline]
    pub fn front(&self) -> Option<&ChainedByteRange> {
        self.ranges.front()
    }

    /// Returns an iterator over the ranges of the chain, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.ranges.iter())
    }

    /// Appends a buffer segment to the end of the chain without copying
    /// the data.
    ///
    /// If `bytes` is empty, this method does nothing.
    pub fn append_bytes(&mut self, bytes: Bytes) {
        if !bytes.is_empty() {
            self.len += bytes.len();
            self.ranges.push_back(ChainedByteRange::new(bytes));
        }
    }

    /// Appends every non-empty segment of `chain`, in order, without copying
    /// the data. Empty segments do not produce ranges.
    pub fn append_chain<I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = Bytes>,
    {
        for bytes in chain {
            self.append_bytes(bytes);
        }
    }

    /// Moves all ranges of `other` to the end of this chain, leaving `other`
    /// empty.
    ///
    /// This is an O(1) operation.
    pub fn append(&mut self, other: &mut ChainedByteRangeHead) {
        if other.is_empty() {
            return;
        }
        self.len += mem::take(&mut other.len);
        self.ranges.append(&mut other.ranges);
    }

    /// Removes the first `len` bytes from the chain and returns them as a new
    /// chain. If the chain is shorter than `len`, all of its bytes are
    /// returned.
    ///
    /// Whole ranges are moved to the returned chain as they are. If the split
    /// point falls inside a range, that range is sliced in two, with both
    /// parts sharing the same backing buffer.
    pub fn split_at_most(&mut self, len: usize) -> ChainedByteRangeHead {
        let len = self.clamp(len, "split");
        if len == 0 {
            return ChainedByteRangeHead::new();
        }

        let (whole, partial) = self.locate(len);
        let rest = self.ranges.split_off(whole);
        let mut ranges = mem::replace(&mut self.ranges, rest);
        if partial != 0 {
            if let Some(front) = self.ranges.front_mut() {
                trace!(
                    "splitting a range of {} bytes at {}",
                    front.len(),
                    partial
                );
                ranges.push_back(front.split_to(partial));
            }
        }
        self.len -= len;

        let prefix = ChainedByteRangeHead { ranges, len };
        debug_assert_eq!(self.compute_chain_data_length(), self.len);
        debug_assert_eq!(prefix.compute_chain_data_length(), prefix.len);
        prefix
    }

    /// Discards up to `len` bytes from the start of the chain, releasing
    /// the ranges that are consumed entirely.
    /// Returns the number of bytes actually removed, which is less than
    /// `len` if the chain was shorter.
    pub fn trim_start_at_most(&mut self, len: usize) -> usize {
        let len = self.clamp(len, "trim");
        let (whole, partial) = self.locate(len);
        for _ in 0..whole {
            self.ranges.pop_front();
        }
        if partial != 0 {
            if let Some(front) = self.ranges.front_mut() {
                front.trim_start(partial);
                debug_assert!(!front.is_empty());
            }
        }
        self.len -= len;
        debug_assert_eq!(self.compute_chain_data_length(), self.len);
        len
    }

    /// Copies the bytes of the entire chain into a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut vec = Vec::with_capacity(self.len);
        for range in &self.ranges {
            vec.extend_from_slice(range.range());
        }
        vec
    }

    fn clamp(&self, len: usize, op: &str) -> usize {
        if len > self.len {
            trace!(
                "{} of {} bytes clamped to chain length {}",
                op,
                len,
                self.len
            );
            self.len
        } else {
            len
        }
    }

    // Finds how many ranges from the front are covered entirely by `len`
    // bytes, and how many bytes are left to take from the range after them.
    // The leftover is always less than the length of that range.
    fn locate(&self, len: usize) -> (usize, usize) {
        let mut whole = 0;
        let mut remaining = len;
        for range in &self.ranges {
            if range.len() > remaining {
                break;
            }
            remaining -= range.len();
            whole += 1;
        }
        (whole, remaining)
    }
}

impl From<Bytes> for ChainedByteRangeHead {
    #[inline]
    fn from(bytes: Bytes) -> Self {
        let mut head = ChainedByteRangeHead::new();
        head.append_bytes(bytes);
        head
    }
}

impl FromIterator<Bytes> for ChainedByteRangeHead {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Bytes>>(iter: I) -> Self {
        ChainedByteRangeHead::from_chain(iter)
    }
}

impl Extend<Bytes> for ChainedByteRangeHead {
    #[inline]
    fn extend<I: IntoIterator<Item = Bytes>>(&mut self, iter: I) {
        self.append_chain(iter)
    }
}

impl IntoIterator for ChainedByteRangeHead {
    type Item = Bytes;
    type IntoIter = IntoRanges;

    #[inline]
    fn into_iter(self) -> IntoRanges {
        IntoRanges::new(self.ranges.into_iter())
    }
}

impl<'a> IntoIterator for &'a ChainedByteRangeHead {
    type Item = &'a ChainedByteRange;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Buf for ChainedByteRangeHead {
    #[inline]
    fn remaining(&self) -> usize {
        self.len
    }

    #[inline]
    fn has_remaining(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the bytes of the first range in the chain.
    #[inline]
    fn chunk(&self) -> &[u8] {
        match self.ranges.front() {
            Some(range) => range.range(),
            None => &[],
        }
    }

    /// Advances the reading position by `cnt`, dropping the ranges that
    /// the position has been advanced past.
    ///
    /// # Panics
    ///
    /// This function panics when `cnt > self.remaining()`.
    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= self.len,
            "cannot advance past the end of the chain: {} > {}",
            cnt,
            self.len
        );
        self.trim_start_at_most(cnt);
    }

    /// Fills `dst` sequentially with the slice views of the ranges.
    /// Returns the number of `IoSlice` entries filled.
    fn chunks_vectored<'a>(&'a self, dst: &mut [IoSlice<'a>]) -> usize {
        let zipped = dst.iter_mut().zip(self.ranges.iter());
        let n = zipped.len();
        for (io_slice, range) in zipped {
            *io_slice = IoSlice::new(range.range());
        }
        n
    }

    /// Removes the first `len` bytes and returns them as `Bytes`.
    /// No bytes are copied if they all lie within the first range.
    ///
    /// # Panics
    ///
    /// This function panics when `len > self.remaining()`.
    fn copy_to_bytes(&mut self, len: usize) -> Bytes {
        assert!(
            len <= self.len,
            "cannot copy past the end of the chain: {} > {}",
            len,
            self.len
        );
        let mut prefix = self.split_at_most(len);
        if prefix.num_ranges() <= 1 {
            return prefix
                .ranges
                .pop_front()
                .map_or_else(Bytes::new, ChainedByteRange::into_bytes);
        }
        let mut buf = BytesMut::with_capacity(len);
        for range in prefix {
            buf.put(range);
        }
        buf.freeze()
    }
}
