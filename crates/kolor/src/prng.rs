//! Xorshift64 generator used for random colors.
//!
//! Seeded explicitly for reproducible output (`Color::random_with`), or
//! through a per-thread instance seeded from `rand`'s thread RNG
//! (`Color::random`).

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Xorshift64 PRNG with shifts (13, 7, 17). Same seed, same sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

thread_local! {
    static THREAD_RNG: RefCell<Xorshift64> = RefCell::new(Xorshift64::new(rand::random::<u64>()));
}

impl Xorshift64 {
    /// Replaces a zero seed, which is a fixed point of xorshift.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator; a zero seed is replaced by a non-zero fallback.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1) from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Runs `f` with this thread's generator.
pub fn with_thread_rng<T>(f: impl FnOnce(&mut Xorshift64) -> T) -> T {
    THREAD_RNG.with(|rng| f(&mut *rng.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every seeded random color changes.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_stick_at_zero() {
        let mut rng = Xorshift64::new(0);
        for _ in 0..3 {
            assert_ne!(rng.next_u64(), 0);
        }
    }

    #[test]
    fn same_seed_produces_same_unit_floats() {
        let mut a = Xorshift64::new(7);
        let mut b = Xorshift64::new(7);
        for i in 0..100 {
            assert_eq!(
                a.next_f64().to_bits(),
                b.next_f64().to_bits(),
                "diverged at index {i}"
            );
        }
    }

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = Xorshift64::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "value {v} out of [0, 1)");
        }
    }

    #[test]
    fn thread_rngs_are_seeded_independently() {
        let here = with_thread_rng(|rng| rng.clone());
        let there = std::thread::spawn(|| with_thread_rng(|rng| rng.clone()))
            .join()
            .unwrap();
        assert_ne!(
            here.clone().next_u64(),
            there.clone().next_u64(),
            "two threads drew the same seed"
        );
    }

    #[test]
    fn thread_rng_advances_between_calls() {
        let first = with_thread_rng(Xorshift64::next_u64);
        let second = with_thread_rng(Xorshift64::next_u64);
        assert_ne!(first, second);
    }

    #[test]
    fn state_survives_serde_round_trip() {
        let mut rng = Xorshift64::new(99);
        rng.next_u64();
        let json = serde_json::to_string(&rng).unwrap();
        let mut revived: Xorshift64 = serde_json::from_str(&json).unwrap();
        assert_eq!(rng.next_u64(), revived.next_u64());
    }
}
