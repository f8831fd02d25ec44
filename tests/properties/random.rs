//! Property tests for random token generation.

use proptest::prelude::*;

use textkit::{generate_strong_random, generate_with, Alphabet, RandomSource, TextkitResult};

/// Deterministic source that cycles through the values it was given.
struct Cycle {
    values: Vec<u32>,
    pos: usize,
}

impl RandomSource for Cycle {
    fn next_u32(&mut self) -> TextkitResult<u32> {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        Ok(value)
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: output has exactly `length` characters from the expected alphabet.
    #[test]
    fn property_strong_random_length_and_alphabet(
        length in 0usize..=64,
        include_alpha in any::<bool>(),
    ) {
        let token = generate_strong_random(length, include_alpha).unwrap();
        let alphabet = Alphabet::from_include_alpha(include_alpha);

        prop_assert_eq!(token.chars().count(), length);
        prop_assert!(token.chars().all(|c| alphabet.contains(c)), "unexpected symbol in {token}");
    }

    /// PROPERTY: `draw_below` always lands inside `[0, bound)`.
    #[test]
    fn property_draw_below_in_range(
        values in proptest::collection::vec(any::<u32>(), 1..=16),
        bound in 1u32..=1000,
    ) {
        let mut source = Cycle { values, pos: 0 };
        // Every value in the tail zone is rejected, so mix in one that is always accepted.
        source.values.push(0);
        let drawn = source.draw_below(bound).unwrap();
        prop_assert!(drawn < bound);
    }

    /// PROPERTY: any accepted source value yields a symbol of the alphabet.
    #[test]
    fn property_generate_with_uses_alphabet(
        values in proptest::collection::vec(0u32..1_000_000, 1..=16),
        length in 0usize..=32,
        include_alpha in any::<bool>(),
    ) {
        let alphabet = Alphabet::from_include_alpha(include_alpha);
        let mut source = Cycle { values, pos: 0 };
        let token = generate_with(&mut source, length, alphabet).unwrap();

        prop_assert_eq!(token.len(), length);
        prop_assert!(token.chars().all(|c| alphabet.contains(c)));
    }
}
