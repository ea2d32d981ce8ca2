//! How much of the source a call may read.

use bstr::ByteSlice;

/// How much of the source a call may read.
///
/// A NUL byte ends the scan in either mode, and no mode ever reads past the
/// end of the slice it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceLen {
    /// Read at most this many bytes.
    ///
    /// A length larger than the slice is clamped to the slice.
    Bounded(usize),
    /// Read until the first NUL byte, or the end of the slice if it has none.
    NulTerminated,
}

impl SourceLen {
    /// Narrow `source` to the bytes the scanner is allowed to look at.
    pub(crate) fn window(self, source: &[u8]) -> &[u8] {
        let bounded = match self {
            SourceLen::Bounded(n) => &source[..n.min(source.len())],
            SourceLen::NulTerminated => source,
        };
        match bounded.find_byte(0) {
            Some(end) => &bounded[..end],
            None => bounded,
        }
    }
}

impl From<usize> for SourceLen {
    fn from(len: usize) -> Self {
        SourceLen::Bounded(len)
    }
}

/// Signed lengths follow the C convention: any negative value means the
/// source is NUL-terminated.
impl From<isize> for SourceLen {
    fn from(len: isize) -> Self {
        match usize::try_from(len) {
            Ok(len) => SourceLen::Bounded(len),
            Err(_) => SourceLen::NulTerminated,
        }
    }
}
