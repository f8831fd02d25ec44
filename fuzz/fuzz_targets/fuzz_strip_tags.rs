#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(txt) = std::str::from_utf8(data) {
        // Tag stripping must never panic and never leave a delimiter behind
        let stripped = textkit::strip_tags(txt);
        assert!(!stripped.contains('<') && !stripped.contains('>'));
    }
});
