//! Right-to-left script detection

/// First codepoint counted as right-to-left (Hebrew block start)
const RTL_START: u32 = 0x0590;
/// Last codepoint counted as right-to-left (end of Arabic Extended-A)
const RTL_END: u32 = 0x08FF;

/// Whether `c` falls in the Hebrew, Arabic or adjacent right-to-left blocks.
pub fn is_rtl_char(c: char) -> bool {
    (RTL_START..=RTL_END).contains(&(c as u32))
}

/// Whether more than half of the characters in `s` are right-to-left.
///
/// Uses floor division on the total, so an empty string is never RTL and an
/// odd-length string needs a strict majority.
pub fn is_rtl(s: &str) -> bool {
    let (rtl_count, total_count) = s.chars().fold((0usize, 0usize), |(rtl, total), c| {
        (rtl + usize::from(is_rtl_char(c)), total + 1)
    });
    rtl_count > total_count / 2
}
