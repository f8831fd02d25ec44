//! HTML entity decoding, tag stripping and line-break removal
//!
//! Not an HTML parser: only five named entities are
//! decoded and tags are removed by a two-state scanner.

/// Entities decoded by [`unescape`], matched left to right
const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// Scanner state for [`strip_tags`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagState {
    /// Characters are emitted
    Outside,
    /// Characters are suppressed until the next `>`
    InsideTag,
}

/// Decode `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&#39;`.
///
/// A single pass: decoded text is not scanned again, so `&amp;lt;` becomes
/// `&lt;`. Any other entity is left verbatim.
pub fn unescape(txt: &str) -> String {
    let mut out = String::with_capacity(txt.len());
    let mut rest = txt;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, decoded)) => {
                out.push(*decoded);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Remove HTML tags after decoding entities with [`unescape`].
///
/// Everything from `<` up to and including the next `>` is dropped. An
/// unterminated tag swallows the rest of the input, and a stray `>` outside
/// a tag is dropped as well.
pub fn strip_tags(txt: &str) -> String {
    let decoded = unescape(txt);
    let mut out = String::with_capacity(decoded.len());
    let mut state = TagState::Outside;

    for c in decoded.chars() {
        match c {
            '<' => state = TagState::InsideTag,
            '>' => state = TagState::Outside,
            _ if state == TagState::Outside => out.push(c),
            _ => {}
        }
    }

    out
}

/// Remove all line breaks (`\r\n`, `\r`, `\n`).
pub fn strip_enter(txt: &str) -> String {
    txt.replace("\r\n", "").replace('\r', "").replace('\n', "")
}
