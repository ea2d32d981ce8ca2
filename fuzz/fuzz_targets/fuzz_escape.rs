#![no_main]

use arbitrary::Arbitrary;
use jsonescape::{SourceLen, Status, escape_json, escape_json_owned, estimate, write};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    quote: bool,
    missing: bool,
    /// `None` selects NUL-terminated mode.
    bound: Option<u16>,
    data: &'a [u8],
}

fn escape(input: &Input<'_>) {
    let len = input
        .bound
        .map_or(SourceLen::NulTerminated, |n| SourceLen::Bounded(n.into()));
    let source = (!input.missing).then_some(input.data);

    // Both phases must agree on every byte count.
    let measured = estimate(source, len, input.quote);
    let mut buf = vec![0u8; measured.len];
    let written = write(&mut buf, source, len, input.quote).unwrap();
    assert_eq!(written, measured);
    assert_eq!(escape_json(None, source, len, input.quote), Ok(measured));

    if measured.len > 0 {
        assert_eq!(buf[measured.len - 1], 0);
        let mut short = vec![0u8; measured.len - 1];
        assert!(write(&mut short, source, len, input.quote).is_err());
    }

    if let Some(owned) = escape_json_owned(source, len, input.quote) {
        if measured.status.is_changed() || source.is_none() {
            let owned: &[u8] = &owned;
            assert_eq!(owned, &buf[..]);
        }
    }

    // Well-formed text must come back unchanged through a JSON parser.
    let Some(data) = source else { return };
    let Ok(text) = std::str::from_utf8(data) else { return };
    if !input.quote || input.bound.is_some() || text.contains('\0') {
        return;
    }
    assert_ne!(measured.status, Status::InvalidInput);
    let decoded: String = serde_json::from_slice(&buf[..measured.len - 1]).unwrap();
    assert_eq!(decoded, text);
}

fuzz_target!(|input: Input<'_>| escape(&input));
