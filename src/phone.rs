//! Iranian mobile number normalization
//!
//! Numbers are rewritten to the international form `98XXXXXXXXXX` without a
//! leading `+`. The input is not validated: non-digit input is rewritten by
//! the same rules and may come out in any shape.

const COUNTRY_CODE: &str = "98";
const LOCAL_LENGTH: usize = 10;

/// International prefixes, tried in order; only the first match is removed.
const DIAL_PREFIXES: [&str; 3] = ["+", "00", "0"];

fn strip_dial_prefix(no: &str) -> &str {
    DIAL_PREFIXES
        .iter()
        .find_map(|prefix| no.strip_prefix(*prefix))
        .unwrap_or(no)
}

/// The last `n` characters of `s`, or all of `s` when it is shorter.
fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}

/// Normalize an Iranian mobile number to `98XXXXXXXXXX`.
///
/// ```
/// use textkit::correct_mobile_no;
///
/// assert_eq!(correct_mobile_no("09123456789"), "989123456789");
/// assert_eq!(correct_mobile_no("+989123456789"), "989123456789");
/// assert_eq!(correct_mobile_no("00989123456789"), "989123456789");
/// ```
pub fn correct_mobile_no(no: &str) -> String {
    if no.is_empty() {
        return String::new();
    }

    let no = strip_dial_prefix(no.trim());

    let no = if !no.starts_with(COUNTRY_CODE) && no.chars().count() <= LOCAL_LENGTH {
        format!("{COUNTRY_CODE}{}", last_chars(no, LOCAL_LENGTH))
    } else {
        no.to_string()
    };

    match no.strip_prefix("980") {
        Some(rest) => format!("{COUNTRY_CODE}{rest}"),
        None => no,
    }
}
