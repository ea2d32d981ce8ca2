//! Decoding and classification of the next input unit.
//!
//! The scanner hands [`Unit::classify`] the window of input that starts at
//! the cursor and ends at the terminator (the declared length, the first NUL
//! byte, or the end of the slice, whichever comes first). The returned
//! [`Unit`] says how many raw bytes were consumed and what has to be emitted
//! for them. Nothing here looks past the window, so a multi-byte sequence cut
//! short by the declared length is reported as malformed.

use crate::table::needs_escape;

/// U+FFFD REPLACEMENT CHARACTER, UTF-8 encoded.
pub(crate) const REPLACEMENT: &[u8; 3] = b"\xEF\xBF\xBD";

/// The classification of one logical unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// Copy the next `n` bytes (1..=4) unchanged.
    Verbatim(usize),
    /// Emit `\` followed by this byte; consumes one input byte.
    Short(u8),
    /// Emit `\u00xx` for this control byte; consumes one input byte.
    Control(u8),
    /// Emit U+FFFD for a malformed sequence; consumes one input byte.
    Replacement,
}

impl Unit {
    /// Classify the unit at the front of `rest`.
    ///
    /// `rest` must be non-empty.
    #[inline]
    pub(crate) fn classify(rest: &[u8]) -> Unit {
        let c = rest[0];
        if !needs_escape(c) {
            return Unit::Verbatim(1);
        }
        match c {
            b'\x08' => Unit::Short(b'b'),
            b'\x0C' => Unit::Short(b'f'),
            b'\n' => Unit::Short(b'n'),
            b'\r' => Unit::Short(b'r'),
            b'\t' => Unit::Short(b't'),
            b'\\' => Unit::Short(b'\\'),
            b'"' => Unit::Short(b'"'),
            0x00..=0x1F => Unit::Control(c),
            0x20..=0x7F => Unit::Verbatim(1),
            _ => Self::multibyte(rest),
        }
    }

    /// Validate a sequence starting with a byte that has its high bit set.
    fn multibyte(rest: &[u8]) -> Unit {
        let width = match rest[0] {
            b if b >> 5 == 0b110 => 2,
            b if b >> 4 == 0b1110 => 3,
            b if b >> 3 == 0b1_1110 => 4,
            _ => return Unit::Replacement,
        };
        match rest.get(1..width) {
            Some(tail) if tail.iter().all(|&b| is_continuation(b)) => Unit::Verbatim(width),
            _ => Unit::Replacement,
        }
    }

    /// Number of raw input bytes this unit covers.
    #[inline]
    pub(crate) fn consumed(self) -> usize {
        match self {
            Unit::Verbatim(n) => n,
            Unit::Short(_) | Unit::Control(_) | Unit::Replacement => 1,
        }
    }

    /// Number of output bytes this unit produces.
    #[cfg(test)]
    pub(crate) fn emitted(self) -> usize {
        match self {
            Unit::Verbatim(n) => n,
            Unit::Short(_) => 2,
            Unit::Control(_) => 6,
            Unit::Replacement => REPLACEMENT.len(),
        }
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b >> 6 == 0b10
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Unit;

    #[rstest]
    #[case(b"\x08", Unit::Short(b'b'))]
    #[case(b"\x0C", Unit::Short(b'f'))]
    #[case(b"\n", Unit::Short(b'n'))]
    #[case(b"\r", Unit::Short(b'r'))]
    #[case(b"\t", Unit::Short(b't'))]
    #[case(b"\\", Unit::Short(b'\\'))]
    #[case(b"\"", Unit::Short(b'"'))]
    #[case(b"\x01", Unit::Control(0x01))]
    #[case(b"\x1F", Unit::Control(0x1F))]
    #[case(b"a", Unit::Verbatim(1))]
    #[case(b"\x7F", Unit::Verbatim(1))]
    #[case(b"/", Unit::Verbatim(1))]
    fn single_byte_units(#[case] input: &[u8], #[case] expected: Unit) {
        assert_eq!(Unit::classify(input), expected);
    }

    #[rstest]
    #[case("é")]
    #[case("€")]
    #[case("𝄞")]
    #[case("😀")]
    fn well_formed_sequences_are_verbatim(#[case] input: &str) {
        let unit = Unit::classify(input.as_bytes());
        assert_eq!(unit, Unit::Verbatim(input.len()));
        assert_eq!(unit.consumed(), unit.emitted());
    }

    #[rstest]
    #[case::truncated_two(b"\xC3")]
    #[case::truncated_three(b"\xE2\x82")]
    #[case::truncated_four(b"\xF0\x9D\x84")]
    #[case::bad_continuation(b"\xC3(")]
    #[case::bad_second_continuation(b"\xE2\x82(")]
    #[case::bad_third_continuation(b"\xF0\x9D\x84(")]
    #[case::stray_continuation(b"\x80abc")]
    #[case::five_byte_lead(b"\xF8\x88\x80\x80\x80")]
    #[case::invalid_ff(b"\xFF")]
    fn malformed_sequences_are_replaced(#[case] input: &[u8]) {
        let unit = Unit::classify(input);
        assert_eq!(unit, Unit::Replacement);
        assert_eq!(unit.consumed(), 1);
        assert_eq!(unit.emitted(), 3);
    }

    #[test]
    fn only_the_lead_pattern_is_checked() {
        // Overlong and surrogate encodings pass: validation is structural.
        assert_eq!(Unit::classify(b"\xC0\x80"), Unit::Verbatim(2));
        assert_eq!(Unit::classify(b"\xED\xA0\x80"), Unit::Verbatim(3));
    }

    #[test]
    fn escape_widths() {
        assert_eq!(Unit::Short(b'n').emitted(), 2);
        assert_eq!(Unit::Control(0x01).emitted(), 6);
    }
}
