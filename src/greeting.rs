//! Persian "hello world"

/// "Hello world" in Persian, with a smiley
pub const GREETING: &str = "سلام دنیا:)";

/// The Persian greeting, [`GREETING`].
pub fn greeting() -> &'static str {
    GREETING
}
