//! Output targets for the scanner.
//!
//! The scanner is generic over [`Sink`]: [`Counter`] only measures, while
//! [`SliceWriter`] and [`VecWriter`] store the bytes. Every sink advances by
//! exactly `bytes.len()` per call, which is what keeps the measured length
//! and the written length equal.

use alloc::vec::Vec;

pub(crate) trait Sink {
    fn put(&mut self, bytes: &[u8]);
}

/// Measures output without storing it.
#[derive(Debug, Default)]
pub(crate) struct Counter {
    pub(crate) len: usize,
}

impl Sink for Counter {
    #[inline]
    fn put(&mut self, bytes: &[u8]) {
        self.len += bytes.len();
    }
}

/// Writes into a caller-provided slice.
///
/// Once a write would run past the end of the slice the writer stops storing
/// bytes but keeps counting, so the caller can report how much room was
/// needed.
#[derive(Debug)]
pub(crate) struct SliceWriter<'d> {
    dst: &'d mut [u8],
    len: usize,
    overflowed: bool,
}

impl<'d> SliceWriter<'d> {
    pub(crate) fn new(dst: &'d mut [u8]) -> Self {
        Self {
            dst,
            len: 0,
            overflowed: false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.dst.len()
    }

    pub(crate) fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Sink for SliceWriter<'_> {
    #[inline]
    fn put(&mut self, bytes: &[u8]) {
        let end = self.len + bytes.len();
        if !self.overflowed {
            match self.dst.get_mut(self.len..end) {
                Some(slot) => slot.copy_from_slice(bytes),
                None => self.overflowed = true,
            }
        }
        self.len = end;
    }
}

/// Appends to a growable buffer.
#[derive(Debug)]
pub(crate) struct VecWriter<'d>(pub(crate) &'d mut Vec<u8>);

impl Sink for VecWriter<'_> {
    #[inline]
    fn put(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }
}
