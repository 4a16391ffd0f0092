#![no_main]

use libfuzzer_sys::fuzz_target;
use msgfmt::{find_closing_bracket, parse_cases, split_fields};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // Every closing index must point at a `}` after the opening one.
    for (open, _) in text.match_indices('{') {
        if let Some(close) = find_closing_bracket(text, open) {
            assert!(close > open);
            assert_eq!(text.as_bytes()[close], b'}');
        }
    }

    let fields = split_fields(text);
    assert!(fields.len() <= 3);

    // Case parsing must never panic; labels and bodies borrow from the input.
    if let Ok(set) = parse_cases(text) {
        for (label, body) in &set.cases {
            assert!(text.contains(label));
            assert!(text.contains(body));
        }
    }
});
