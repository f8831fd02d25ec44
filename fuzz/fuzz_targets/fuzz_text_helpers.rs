#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = textkit::convert_numbers_to_english(s);
        let _ = textkit::unescape(s);
        let _ = textkit::strip_enter(s);
        let _ = textkit::is_rtl(s);
        assert_eq!(textkit::reverse(&textkit::reverse(s)), s);
    }
});
