//! Cryptographically strong random strings
//!
//! Every character is drawn independently and uniformly from an [`Alphabet`]
//! using a [`RandomSource`]. The production source is the operating system
//! (`OsRng`); failures are surfaced to the caller as
//! [`TextkitError::RandomSource`] and never retried.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{TextkitError, TextkitResult};

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &[u8] = b"0123456789";

/// Length of identifiers produced by [`generate_short_id`]
pub const SHORT_ID_LENGTH: usize = 8;

/// Character set a random string is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// `A-Z`, `a-z`, `0-9` (62 symbols)
    Alphanumeric,
    /// `0-9` (10 symbols)
    Digits,
}

impl Alphabet {
    /// Map the `include_alpha` flag onto an alphabet.
    pub fn from_include_alpha(include_alpha: bool) -> Self {
        if include_alpha {
            Self::Alphanumeric
        } else {
            Self::Digits
        }
    }

    /// The ordered symbols of this alphabet.
    pub fn symbols(self) -> &'static [u8] {
        match self {
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Digits => DIGITS,
        }
    }

    /// Number of symbols in this alphabet.
    pub fn size(self) -> usize {
        self.symbols().len()
    }

    /// Whether `c` is one of this alphabet's symbols.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.symbols().contains(&(c as u8))
    }
}

/// A source of random 32-bit values that may fail
pub trait RandomSource {
    /// Draw the next uniformly distributed `u32`.
    fn next_u32(&mut self) -> TextkitResult<u32>;

    /// Draw a uniformly distributed integer in `[0, bound)`.
    ///
    /// Uses rejection sampling so every value is equally likely.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    fn draw_below(&mut self, bound: u32) -> TextkitResult<u32> {
        assert!(bound > 0, "bound must be non-zero");
        // Largest value such that [0, zone] holds a whole number of `bound`-sized buckets.
        let zone = u32::MAX - (u32::MAX - bound + 1) % bound;
        loop {
            let value = self.next_u32()?;
            if value <= zone {
                return Ok(value % bound);
            }
        }
    }
}

/// Operating-system backed secure random source
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> TextkitResult<u32> {
        OsRng.try_next_u32().map_err(TextkitError::random_source)
    }
}

/// Build a random string of `length` characters from `alphabet` using `source`.
pub fn generate_with<R>(source: &mut R, length: usize, alphabet: Alphabet) -> TextkitResult<String>
where
    R: RandomSource + ?Sized,
{
    let symbols = alphabet.symbols();
    let bound = symbols.len() as u32;

    let mut token = String::with_capacity(length);
    for _ in 0..length {
        let index = source.draw_below(bound)? as usize;
        token.push(symbols[index] as char);
    }
    Ok(token)
}

/// Generate a strong random string of `length` characters.
///
/// Letters and digits are used when `include_alpha` is true, digits only otherwise.
pub fn generate_strong_random(length: usize, include_alpha: bool) -> TextkitResult<String> {
    generate_with(
        &mut OsRandom,
        length,
        Alphabet::from_include_alpha(include_alpha),
    )
}

/// Generate a random string of `length` decimal digits.
pub fn generate_random_number(length: usize) -> TextkitResult<String> {
    generate_strong_random(length, false)
}

/// Generate an 8-character alphanumeric identifier.
///
/// No uniqueness registry is kept; collisions are the caller's concern.
pub fn generate_short_id() -> TextkitResult<String> {
    generate_strong_random(SHORT_ID_LENGTH, true)
}
