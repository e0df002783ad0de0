//! Seeded pseudo-random numbers
//!
//! A tiny linear congruential generator whose only job is to reproduce the
//! exact same stream of values for the same seed on every platform. It is not
//! suitable for anything security related.
//!
//! String seeds are folded into the initial state with the classic
//! `hash * 31 + code_unit` rolling hash over UTF-16 code units, wrapping at
//! signed 32 bits on every step. Changing any of the constants below changes
//! the avatar of every existing seed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// LCG multiplier
const MULTIPLIER: u64 = 9301;
/// LCG increment
const INCREMENT: u64 = 49297;
/// LCG modulus, also the divisor that maps the state into [0, 1)
const MODULUS: u64 = 233_280;

/// Input that selects one reproducible avatar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Arbitrary text, hashed into the initial state
    Text(String),
    /// A number used directly as the initial state
    Number(u32),
}

impl Seed {
    /// Initial generator state for this seed
    pub fn initial_state(&self) -> u32 {
        match self {
            Self::Text(text) => hash_str(text),
            Self::Number(n) => *n,
        }
    }

    /// Derive a new text seed by appending a suffix to this one
    pub fn with_suffix(&self, suffix: impl fmt::Display) -> Self {
        Self::Text(format!("{self}{suffix}"))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Seed {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

/// Fold a string into a 32-bit state
///
/// Each UTF-16 code unit is mixed in with `(hash << 5) - hash + unit`, wrapping
/// as a signed 32-bit integer. The magnitude of the final value is the state,
/// so `i32::MIN` maps to `2^31`.
pub fn hash_str(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| {
            (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Deterministic generator shared by one generation run
///
/// Every derived operation consumes exactly one base draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a generator from a seed
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            state: seed.into().initial_state(),
        }
    }

    /// Create a generator from a raw state value
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the generator and return a value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        let next = (u64::from(self.state) * MULTIPLIER + INCREMENT) % MODULUS;
        self.state = next as u32;
        next as f64 / MODULUS as f64
    }

    /// Integer in [min, max)
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        (self.next_f64() * (max - min) as f64).floor() as i64 + min
    }

    /// Uniform index into a collection of `len` items
    pub fn index(&mut self, len: usize) -> usize {
        self.range(0, len as i64) as usize
    }

    /// Pick one element uniformly
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Callers guarantee a non-empty list.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// Float in [min, max)
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// True with the given probability
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.chance(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash() {
        assert_eq!(hash_str(""), 0);
        assert_eq!(hash_str("a"), 97);
        assert_eq!(hash_str("test-seed"), 1_226_328_372);
        assert_eq!(hash_str("seed1"), 109_314_016);
        assert_eq!(hash_str("seed2"), 109_314_017);
    }

    #[test]
    fn test_hash_wraps_at_32_bits() {
        assert_eq!(
            hash_str("The quick brown fox jumps over the lazy dog"),
            609_428_141
        );
        assert_eq!(hash_str("zzzzzzzzzzzzzzzzzzzz"), 1_718_487_168);
    }

    #[test]
    fn test_negative_hash_uses_magnitude() {
        // Raw hashes are -2132311210 and -1662342752
        assert_eq!(hash_str("whiskers"), 2_132_311_210);
        assert_eq!(hash_str("meow-meow-meow"), 1_662_342_752);
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        assert_eq!(hash_str("Ω"), 937);
        // Surrogate pair, two code units
        assert_eq!(hash_str("\u{1F431}"), 1_772_436);
    }

    #[test]
    fn test_golden_sequence() {
        let mut rng = SeededRandom::new("test-seed");
        assert_eq!(rng.state(), 1_226_328_372);
        assert_eq!(rng.next_f64(), 0.8744384430727024);
        assert_eq!(rng.next_f64(), 0.36328017832647463);
        assert_eq!(rng.next_f64(), 0.08025977366255144);
    }

    #[test]
    fn test_numeric_seed() {
        let mut rng = SeededRandom::new(42u32);
        assert_eq!(rng.next_f64(), 0.8858839163237311);

        // The empty string hashes to zero
        assert_eq!(SeededRandom::new(0u32), SeededRandom::new(""));
        let mut zero = SeededRandom::new(0u32);
        let mut empty = SeededRandom::new("");
        assert_eq!(zero.next_f64(), 0.21132115912208504);
        assert_eq!(empty.next_f64(), 0.21132115912208504);
        assert_eq!(zero.next_f64(), empty.next_f64());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRandom::new("consistent-seed");
        let mut b = SeededRandom::new("consistent-seed");
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = SeededRandom::new("bounds");
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_derived_operations_consume_one_draw() {
        let mut reference = SeededRandom::new("derived");
        let mut rng = SeededRandom::new("derived");

        let r = reference.next_f64();
        assert_eq!(rng.range(3, 8), (r * 5.0).floor() as i64 + 3);

        let r = reference.next_f64();
        assert_eq!(rng.float(-2.0, 2.0), r * 4.0 - 2.0);

        let r = reference.next_f64();
        assert_eq!(rng.chance(0.7), r < 0.7);

        let items = ["a", "b", "c"];
        let r = reference.next_f64();
        assert_eq!(*rng.choose(&items), items[(r * 3.0).floor() as usize]);

        assert_eq!(rng.state(), reference.state());
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = SeededRandom::new("range");
        for _ in 0..500 {
            let v = rng.range(1, 3);
            assert!(v == 1 || v == 2);
        }
    }

    #[test]
    #[should_panic]
    fn test_choose_empty_panics() {
        let mut rng = SeededRandom::new("empty");
        let empty: [u8; 0] = [];
        rng.choose(&empty);
    }

    #[test]
    fn test_seed_suffix_and_display() {
        let seed = Seed::from("kitty");
        assert_eq!(seed.with_suffix("-attempt-2").to_string(), "kitty-attempt-2");
        assert_eq!(Seed::from(7u32).with_suffix("-x"), Seed::Text("7-x".into()));
    }

    #[test]
    fn test_seed_serde_untagged() {
        let text: Seed = serde_json::from_str("\"abc\"").unwrap();
        let number: Seed = serde_json::from_str("12").unwrap();
        assert_eq!(text, Seed::Text("abc".into()));
        assert_eq!(number, Seed::Number(12));
    }
}
