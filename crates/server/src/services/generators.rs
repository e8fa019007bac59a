//! Injected sources of nondeterminism.
//!
//! Id suffixes, timestamps, and mock prices all flow through one
//! [`Generator`] port so tests can supply deterministic values while the
//! running server uses the system clock and a thread-local RNG.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Alphabet for minted id suffixes.
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of id suffixes, timestamps, and unit randomness.
pub trait Generator: Send + Sync {
    /// A fresh alphanumeric suffix of the given length.
    fn suffix(&self, len: usize) -> String;

    /// The current time.
    fn now(&self) -> DateTime<Utc>;

    /// A value uniformly distributed in `[0, 1)`.
    fn unit(&self) -> f64;
}

/// Production generator: system clock + thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGenerator;

impl Generator for SystemGenerator {
    fn suffix(&self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| {
                let idx = rng.random_range(0..SUFFIX_CHARSET.len());
                // idx is always within bounds since random_range returns 0..len
                char::from(*SUFFIX_CHARSET.get(idx).unwrap_or(&b'0'))
            })
            .collect()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic generator for tests: repeats one suffix character, returns
/// a fixed instant and a fixed unit value.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    pub suffix_char: char,
    pub now: DateTime<Utc>,
    pub unit: f64,
}

#[cfg(test)]
impl Default for FixedGenerator {
    fn default() -> Self {
        Self {
            suffix_char: 'x',
            now: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
            unit: 0.5,
        }
    }
}

#[cfg(test)]
impl Generator for FixedGenerator {
    fn suffix(&self, len: usize) -> String {
        std::iter::repeat_n(self.suffix_char, len).collect()
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn unit(&self) -> f64 {
        self.unit
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_system_suffix_length_and_charset() {
        let generator = SystemGenerator;
        let suffix = generator.suffix(10);
        assert_eq!(suffix.len(), 10);
        assert!(suffix.bytes().all(|b| SUFFIX_CHARSET.contains(&b)));
    }

    #[test]
    fn test_system_unit_in_range() {
        let generator = SystemGenerator;
        for _ in 0..100 {
            let unit = generator.unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }

    #[test]
    fn test_fixed_generator_is_deterministic() {
        let generator = FixedGenerator::default();
        assert_eq!(generator.suffix(6), "xxxxxx");
        assert_eq!(generator.suffix(6), generator.suffix(6));
        assert_eq!(generator.now(), generator.now());
    }
}
