//! textkit - string helpers for Persian/Arabic text
//!
//! Stateless helpers for secure random tokens, Persian/Arabic digit
//! normalization, HTML tag and entity stripping, Iranian mobile number
//! normalization, right-to-left detection and string reversal.

pub mod digits;
pub mod error;
pub mod greeting;
pub mod phone;
pub mod random;
pub mod reverse;
pub mod sanitize;
pub mod script;

// Re-exports for convenience
pub use digits::{
    convert_arabic_numbers_to_english, convert_numbers_to_english,
    convert_persian_numbers_to_english,
};
pub use error::{TextkitError, TextkitResult};
pub use greeting::{greeting, GREETING};
pub use phone::correct_mobile_no;
pub use random::{
    generate_random_number, generate_short_id, generate_strong_random, generate_with, Alphabet,
    OsRandom, RandomSource,
};
pub use reverse::reverse;
pub use sanitize::{strip_enter, strip_tags, unescape};
pub use script::{is_rtl, is_rtl_char};
