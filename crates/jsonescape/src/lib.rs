//! JSON string escaping with embedded UTF-8 validation.
//!
//! The input is any byte sequence that is meant to be text. The output is a
//! JSON-string-safe rendition of it, optionally wrapped in quotes, in which
//! every malformed UTF-8 sequence has been replaced by U+FFFD.
//!
//! Escaping follows a two-phase protocol: [`estimate`] measures the exact
//! output length (terminator included), the caller provides a buffer of that
//! size, and [`write`] fills it. [`escape_json`] offers both phases behind one
//! C-style entry point, and [`escape_json_owned`] sequences them for you,
//! skipping the allocation when the input can be used as-is.
//!
//! ```rust
//! use jsonescape::{SourceLen, Status, escape_json, estimate, write};
//!
//! let src = b"tab\there".as_slice();
//! let measured = estimate(Some(src), SourceLen::Bounded(src.len()), true);
//! assert_eq!(measured.status, Status::Success);
//!
//! let mut buf = vec![0u8; measured.len];
//! let written = write(&mut buf, Some(src), SourceLen::Bounded(src.len()), true).unwrap();
//! assert_eq!(written, measured);
//! assert_eq!(buf, b"\"tab\\there\"\0");
//!
//! let same = escape_json(None, Some(src), SourceLen::NulTerminated, true).unwrap();
//! assert_eq!(same, measured);
//! ```
//!
//! # Validation
//!
//! Validation is structural. A lead byte `110xxxxx`, `1110xxxx` or
//! `11110xxx` followed by the matching number of `10xxxxxx` continuation bytes
//! is copied unchanged; anything else is replaced one byte at a time, so the
//! bytes after a broken lead are examined again on their own. Overlong forms
//! and encoded surrogates are not rejected.
//!
//! # Terminators
//!
//! A NUL byte ends the input in every [`SourceLen`] mode. Measured lengths
//! and written buffers include one trailing NUL after the payload.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod error;
mod options;
mod owned;
mod scan;
mod sink;
mod status;
mod table;

#[cfg(test)]
mod tests;

pub use error::EscapeError;
pub use options::SourceLen;
pub use owned::{escape_json_owned, escape_json_to_vec};
pub use status::{Outcome, Status};
pub use table::needs_escape;

use scan::escape_terminated;
use sink::{Counter, SliceWriter};

/// Measure the escaped form of `source`.
///
/// The returned length counts every output byte plus the NUL terminator, and
/// is exactly what [`write`] needs. Without a source the length is 5 (`null`
/// and its terminator) when quoting and 0 otherwise.
#[must_use]
pub fn estimate(source: Option<&[u8]>, source_len: SourceLen, quote: bool) -> Outcome {
    let mut counter = Counter::default();
    let flags = escape_terminated(&mut counter, source, source_len, quote);
    Outcome {
        status: Status::from_flags(flags.found, flags.error),
        len: counter.len,
    }
}

/// Write the escaped form of `source` into `dest`, followed by a NUL.
///
/// `dest` should be at least as long as [`estimate`] reports for the same
/// arguments. Bytes of `dest` past the returned length are left untouched.
///
/// # Errors
///
/// Returns [`EscapeError::DestinationTooSmall`] when `dest` cannot hold the
/// output. Nothing is written past the end of `dest`, but the bytes that did
/// fit are left in place.
pub fn write(
    dest: &mut [u8],
    source: Option<&[u8]>,
    source_len: SourceLen,
    quote: bool,
) -> Result<Outcome, EscapeError> {
    let mut writer = SliceWriter::new(dest);
    let flags = escape_terminated(&mut writer, source, source_len, quote);
    if writer.overflowed() {
        return Err(EscapeError::DestinationTooSmall {
            needed: writer.len(),
            capacity: writer.capacity(),
        });
    }
    Ok(Outcome {
        status: Status::from_flags(flags.found, flags.error),
        len: writer.len(),
    })
}

/// Measure (`dest` is `None`) or write (`dest` is `Some`) the escaped form
/// of `source`.
///
/// This is the two-phase call in one function: call it once without a
/// destination to learn the length, allocate, then call it again with the
/// buffer.
///
/// ```rust
/// use jsonescape::{SourceLen, Status, escape_json};
///
/// let src = b"ab\"c".as_slice();
/// let len = SourceLen::from(-1isize);
/// let measured = escape_json(None, Some(src), len, true).unwrap();
/// let mut buf = vec![0u8; measured.len];
/// let written = escape_json(Some(&mut buf[..]), Some(src), len, true).unwrap();
///
/// assert_eq!(written.status, Status::Success);
/// assert_eq!(&buf[..written.len - 1], br#""ab\"c""#);
/// ```
///
/// # Errors
///
/// Only the write phase can fail; see [`write`].
pub fn escape_json(
    dest: Option<&mut [u8]>,
    source: Option<&[u8]>,
    source_len: SourceLen,
    quote: bool,
) -> Result<Outcome, EscapeError> {
    match dest {
        Some(dest) => write(dest, source, source_len, quote),
        None => Ok(estimate(source, source_len, quote)),
    }
}
