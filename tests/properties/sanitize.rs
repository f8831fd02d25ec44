//! Property tests for HTML stripping and line-break removal.

use proptest::prelude::*;

use textkit::{strip_enter, strip_tags, unescape};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: stripped output never contains tag delimiters.
    #[test]
    fn property_strip_tags_removes_delimiters(input in "(?s).{0,256}") {
        let stripped = strip_tags(&input);
        prop_assert!(!stripped.contains('<'));
        prop_assert!(!stripped.contains('>'));
    }

    /// PROPERTY: text without `&`, `<` or `>` passes through untouched.
    #[test]
    fn property_plain_text_untouched(input in "[^&<>]{0,128}") {
        prop_assert_eq!(unescape(&input), input.clone());
        prop_assert_eq!(strip_tags(&input), input);
    }

    /// PROPERTY: unescape never grows the input.
    #[test]
    fn property_unescape_never_grows(input in "(&amp;|&lt;|&gt;|&quot;|&#39;|&|[a-z ])*") {
        prop_assert!(unescape(&input).len() <= input.len());
    }

    /// PROPERTY: no line breaks survive and nothing else is removed.
    #[test]
    fn property_strip_enter(input in "(?s).{0,256}") {
        let stripped = strip_enter(&input);
        prop_assert!(!stripped.contains('\r'));
        prop_assert!(!stripped.contains('\n'));

        let expected: String = input.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        prop_assert_eq!(stripped, expected);
    }
}
