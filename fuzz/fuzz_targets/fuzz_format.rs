#![no_main]

use libfuzzer_sys::fuzz_target;
use msgfmt::{MessageFormatter, Values};

fuzz_target!(|data: &[u8]| {
    let Ok(message) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if message.len() > 1024 {
        return;
    }

    let formatter = MessageFormatter::builder("en")
        .handlers(msgfmt_handlers::default_handlers())
        .cache_capacity(0)
        .build();
    let values = Values::new()
        .with("n", 3)
        .with("name", "Sam")
        .with("flag", "yes");

    // Either an unbalanced-brace error or text identical to the flattened tree.
    match formatter.process(message, &values) {
        Ok(tree) => {
            let text = formatter.format(message, &values).expect("process succeeded");
            assert_eq!(text, tree.to_text());
        }
        Err(err) => assert!(err.is_unbalanced(), "unexpected error: {err}"),
    }
});
