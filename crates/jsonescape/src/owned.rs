//! Conveniences that sequence both phases.
//!
//! [`escape_json_owned`] measures first and allocates only when the output
//! differs from the input. [`escape_json_to_vec`] appends to a growable
//! buffer for callers assembling a larger document.

use alloc::{borrow::Cow, vec, vec::Vec};

use bstr::BStr;

use crate::{
    SourceLen, Status, estimate,
    scan::{escape_payload, escape_terminated},
    sink::{SliceWriter, VecWriter},
};

/// Escape `source`, allocating only when the output differs from the input.
///
/// Returns the source borrowed as-is when nothing needed escaping. Otherwise
/// the result is a fresh buffer of exactly [`estimate`]'s length, ending in a
/// NUL terminator. A missing source yields an owned `null` (plus terminator)
/// when quoting, and `None` otherwise.
///
/// ```rust
/// use jsonescape::{SourceLen, escape_json_owned};
///
/// let plain = escape_json_owned(Some(b"plain".as_slice()), SourceLen::Bounded(5), false).unwrap();
/// assert!(matches!(plain, std::borrow::Cow::Borrowed(_)));
///
/// let quoted = escape_json_owned(Some(b"a\"b".as_slice()), SourceLen::NulTerminated, true).unwrap();
/// let bytes: &[u8] = &quoted;
/// assert_eq!(bytes, b"\"a\\\"b\"\0");
/// ```
#[must_use]
pub fn escape_json_owned(
    source: Option<&[u8]>,
    source_len: SourceLen,
    quote: bool,
) -> Option<Cow<'_, BStr>> {
    let outcome = estimate(source, source_len, quote);

    if outcome.status == Status::NotFound {
        return match source {
            Some(source) => Some(Cow::Borrowed(BStr::new(source))),
            None if quote => Some(Cow::Owned(b"null\0".to_vec().into())),
            None => None,
        };
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(len = outcome.len, status = ?outcome.status, "allocating escaped buffer");

    let mut buf = vec![0u8; outcome.len];
    let mut writer = SliceWriter::new(&mut buf);
    escape_terminated(&mut writer, source, source_len, quote);
    debug_assert!(!writer.overflowed());
    debug_assert_eq!(writer.len(), outcome.len);
    Some(Cow::Owned(buf.into()))
}

/// Append the escaped form of `source` to `dst`, without a terminator.
///
/// Bytes are appended even when the status is [`Status::NotFound`], so `dst`
/// always ends up holding the complete output.
///
/// ```rust
/// use jsonescape::{SourceLen, Status, escape_json_to_vec};
///
/// let mut out = b"{\"k\":".to_vec();
/// let status = escape_json_to_vec(&mut out, Some(b"tab\there".as_slice()), SourceLen::NulTerminated, true);
/// out.push(b'}');
/// assert_eq!(status, Status::Success);
/// assert_eq!(out, br#"{"k":"tab\there"}"#);
/// ```
pub fn escape_json_to_vec(
    dst: &mut Vec<u8>,
    source: Option<&[u8]>,
    source_len: SourceLen,
    quote: bool,
) -> Status {
    let flags = escape_payload(&mut VecWriter(dst), source, source_len, quote);
    Status::from_flags(flags.found, flags.error)
}
