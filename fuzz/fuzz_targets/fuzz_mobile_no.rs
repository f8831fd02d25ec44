#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(no) = std::str::from_utf8(data) {
        // Slicing on arbitrary UTF-8 should never panic
        let _ = textkit::correct_mobile_no(no);
    }
});
