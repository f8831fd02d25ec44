//! Property tests for RTL detection and reversal.

use proptest::prelude::*;

use textkit::{is_rtl, is_rtl_char, reverse};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: reversing twice gives back the input.
    #[test]
    fn property_reverse_round_trip(input in "(?s).{0,128}") {
        prop_assert_eq!(reverse(&reverse(&input)), input);
    }

    /// PROPERTY: reversal keeps the characters, only their order changes.
    #[test]
    fn property_reverse_is_permutation(input in "(?s).{0,128}") {
        let mut original: Vec<char> = input.chars().collect();
        let mut reversed: Vec<char> = reverse(&input).chars().collect();
        original.sort_unstable();
        reversed.sort_unstable();
        prop_assert_eq!(original, reversed);
    }

    /// PROPERTY: RTL classification ignores character order.
    #[test]
    fn property_is_rtl_order_independent(input in "[a-z\u{0627}-\u{064A}\u{05D0}-\u{05EA} ]{0,40}") {
        prop_assert_eq!(is_rtl(&input), is_rtl(&reverse(&input)));
    }

    /// PROPERTY: RTL iff strictly more than floor(total / 2) RTL characters.
    #[test]
    fn property_is_rtl_majority(input in "[a-z\u{0627}-\u{064A} ]{0,40}") {
        let total = input.chars().count();
        let rtl = input.chars().filter(|c| is_rtl_char(*c)).count();
        prop_assert_eq!(is_rtl(&input), rtl > total / 2);
    }
}
