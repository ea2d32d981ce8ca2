//! The single escaping pass shared by measurement and writing.
//!
//! [`escape_payload`] walks the input once, classifying each unit and handing
//! the resulting bytes to a [`Sink`]. Measuring and writing differ only in
//! the sink, so they cannot disagree about the output length.

use crate::{
    classify::{REPLACEMENT, Unit},
    options::SourceLen,
    sink::Sink,
};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Terminal classification of one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Flags {
    /// The output differs from the input.
    pub found: bool,
    /// A malformed sequence was replaced.
    pub error: bool,
}

/// Emit the escaped form of `source` without a terminator.
///
/// A missing source becomes `null` when quoting and nothing otherwise; in
/// both cases no transformation is reported.
pub(crate) fn escape_payload<S: Sink>(
    sink: &mut S,
    source: Option<&[u8]>,
    len: SourceLen,
    quote: bool,
) -> Flags {
    let Some(source) = source else {
        if quote {
            sink.put(b"null");
        }
        return Flags::default();
    };

    let input = len.window(source);
    let mut flags = Flags {
        found: quote,
        error: false,
    };

    if quote {
        sink.put(b"\"");
    }

    let mut pos = 0;
    while pos < input.len() {
        let unit = Unit::classify(&input[pos..]);
        match unit {
            Unit::Verbatim(n) => sink.put(&input[pos..pos + n]),
            Unit::Short(b) => {
                sink.put(&[b'\\', b]);
                flags.found = true;
            }
            Unit::Control(b) => {
                sink.put(&[
                    b'\\',
                    b'u',
                    b'0',
                    b'0',
                    HEX[usize::from(b >> 4)],
                    HEX[usize::from(b & 0xF)],
                ]);
                flags.found = true;
            }
            Unit::Replacement => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    offset = pos,
                    byte = input[pos],
                    "replacing malformed UTF-8 sequence"
                );
                sink.put(REPLACEMENT);
                flags.found = true;
                flags.error = true;
            }
        }
        pos += unit.consumed();
    }

    if quote {
        sink.put(b"\"");
    }
    flags
}

/// Emit the escaped form of `source` followed by a NUL terminator.
///
/// With no source and no quoting nothing at all is emitted, terminator
/// included.
pub(crate) fn escape_terminated<S: Sink>(
    sink: &mut S,
    source: Option<&[u8]>,
    len: SourceLen,
    quote: bool,
) -> Flags {
    let flags = escape_payload(sink, source, len, quote);
    if source.is_some() || quote {
        sink.put(b"\0");
    }
    flags
}
