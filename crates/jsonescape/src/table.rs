//! Byte classification table for JSON string escaping.
//!
//! A byte is flagged when it cannot be copied into a JSON string literal
//! without a closer look: control characters, `"`, `\`, DEL, and every byte
//! with the high bit set (the start or middle of a multi-byte UTF-8
//! sequence, which must be validated before it is copied).

/// `ESCAPE[b]` is `true` when byte `b` needs escaping or validation.
pub(crate) static ESCAPE: [bool; 256] = build();

const fn build() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = 0;
    while b < 256 {
        #[allow(clippy::cast_possible_truncation)]
        let c = b as u8;
        table[b] = c < 0x20 || c == b'"' || c == b'\\' || c >= 0x7F;
        b += 1;
    }
    table
}

/// Returns `true` when `byte` may not be copied verbatim into a JSON string
/// without further classification.
///
/// ```rust
/// use jsonescape::needs_escape;
///
/// assert!(needs_escape(b'"'));
/// assert!(needs_escape(b'\n'));
/// assert!(needs_escape(0xE2));
/// assert!(!needs_escape(b'a'));
/// assert!(!needs_escape(b'/'));
/// ```
#[inline]
#[must_use]
pub fn needs_escape(byte: u8) -> bool {
    ESCAPE[byte as usize]
}
