//! Persian and Arabic digit normalization
//!
//! Maps digit glyphs to ASCII `0`-`9`. Lookups go straight from codepoint
//! range to digit value; characters outside the handled ranges are copied
//! through untouched.

/// Persian (extended Arabic-Indic) digit zero, U+06F0
const PERSIAN_ZERO: u32 = 0x06F0;
/// Arabic-Indic digit zero, U+0660
const ARABIC_ZERO: u32 = 0x0660;

fn ascii_digit(offset: u32) -> char {
    debug_assert!(offset < 10);
    char::from(b'0' + offset as u8)
}

fn persian_digit(c: char) -> Option<char> {
    match c {
        '\u{06F0}'..='\u{06F9}' => Some(ascii_digit(c as u32 - PERSIAN_ZERO)),
        _ => None,
    }
}

// The Arabic table takes zero and one from the Persian block; U+0660 and
// U+0661 are not part of it.
fn arabic_digit(c: char) -> Option<char> {
    match c {
        '\u{06F0}' | '\u{06F1}' => Some(ascii_digit(c as u32 - PERSIAN_ZERO)),
        '\u{0662}'..='\u{0669}' => Some(ascii_digit(c as u32 - ARABIC_ZERO)),
        _ => None,
    }
}

fn replace_digits(input: &str, lookup: fn(char) -> Option<char>) -> String {
    input.chars().map(|c| lookup(c).unwrap_or(c)).collect()
}

/// Convert Persian digits (`۰`-`۹`) to ASCII digits.
pub fn convert_persian_numbers_to_english(input: &str) -> String {
    replace_digits(input, persian_digit)
}

/// Convert Arabic-Indic digits to ASCII digits.
///
/// Zero and one are matched by their Persian glyphs (`۰`, `۱`); two to nine
/// by the Arabic-Indic glyphs (`٢`-`٩`).
pub fn convert_arabic_numbers_to_english(input: &str) -> String {
    replace_digits(input, arabic_digit)
}

/// Convert both Persian and Arabic digits to ASCII digits.
///
/// Runs the Persian pass and then the Arabic pass. Applying it twice gives
/// the same result as applying it once.
pub fn convert_numbers_to_english(input: &str) -> String {
    convert_arabic_numbers_to_english(&convert_persian_numbers_to_english(input))
}
