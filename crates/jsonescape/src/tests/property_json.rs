use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{SourceLen, Status, escape_json_to_vec};

/// Property: valid UTF-8 without NUL, escaped and quoted, is a JSON string
/// literal that decodes back to the original text.
#[test]
fn json_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let text = text.split('\0').next().unwrap_or_default();
        let mut out = Vec::new();
        let status = escape_json_to_vec(&mut out, Some(text.as_bytes()), SourceLen::NulTerminated, true);
        let decoded: Result<String, _> = serde_json::from_slice(&out);
        status == Status::Success && decoded.is_ok_and(|d| d == text)
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: unquoted valid UTF-8 is reported unchanged exactly when none of
/// its ASCII bytes need an escape.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn unchanged_iff_no_ascii_escape(text: String) -> bool {
    let text = text.split('\0').next().unwrap_or_default();
    let mut out = Vec::new();
    let status = escape_json_to_vec(&mut out, Some(text.as_bytes()), SourceLen::NulTerminated, false);
    let expect_change = text.bytes().any(|b| b < 0x20 || b == b'"' || b == b'\\');
    status.is_changed() == expect_change && (expect_change || out == text.as_bytes())
}

/// Property: bounded and NUL-terminated modes agree on input without NUL.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn length_modes_agree(bytes: Vec<u8>, quote: bool) -> bool {
    let bytes: Vec<u8> = bytes.into_iter().filter(|&b| b != 0).collect();
    let mut bounded = Vec::new();
    let mut terminated = Vec::new();
    let a = escape_json_to_vec(&mut bounded, Some(&bytes[..]), SourceLen::Bounded(bytes.len()), quote);
    let b = escape_json_to_vec(&mut terminated, Some(&bytes[..]), SourceLen::NulTerminated, quote);
    a == b && bounded == terminated
}
