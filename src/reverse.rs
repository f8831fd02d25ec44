//! Codepoint-wise string reversal

/// Reverse `s` by codepoint.
///
/// Combining marks and grapheme clusters are not kept together; each `char`
/// moves on its own.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
