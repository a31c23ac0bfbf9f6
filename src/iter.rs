use crate::ChainedByteRange;

use bytes::Bytes;

use std::collections::linked_list;
use std::iter::FusedIterator;

/// The iterator produced by the `iter` method of `ChainedByteRangeHead`.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: linked_list::Iter<'a, ChainedByteRange>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(inner: linked_list::Iter<'a, ChainedByteRange>) -> Self {
        Iter { inner }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ChainedByteRange;

    #[inline]
    fn next(&mut self) -> Option<&'a ChainedByteRange> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a ChainedByteRange> {
        self.inner.next_back()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
impl<'a> FusedIterator for Iter<'a> {}

/// The iterator produced by consuming a `ChainedByteRangeHead`.
/// Yields the `Bytes` handles of the ranges in order.
#[derive(Debug)]
pub struct IntoRanges {
    inner: linked_list::IntoIter<ChainedByteRange>,
}

impl IntoRanges {
    #[inline]
    pub(crate) fn new(inner: linked_list::IntoIter<ChainedByteRange>) -> Self {
        IntoRanges { inner }
    }
}

impl Iterator for IntoRanges {
    type Item = Bytes;

    #[inline]
    fn next(&mut self) -> Option<Bytes> {
        self.inner.next().map(ChainedByteRange::into_bytes)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoRanges {
    #[inline]
    fn next_back(&mut self) -> Option<Bytes> {
        self.inner.next_back().map(ChainedByteRange::into_bytes)
    }
}

impl ExactSizeIterator for IntoRanges {}
impl FusedIterator for IntoRanges {}
