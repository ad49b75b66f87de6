//! xorshift64* random number generator
//!
//! A fast, high-quality PRNG that is deterministic and suitable for
//! simulation purposes.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact simulation)
//! - Testing (verify behavior)
//! - Replay identity (two runs with the same seed must match byte for byte)

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let wait = rng.exponential(5.0);      // mean-5 interarrival draw
/// let dur = rng.uniform(10.0, 25.0);    // [10, 25) screening duration
/// let flag = rng.bernoulli(0.1);        // 10% secondary screening
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed.
    ///
    /// A zero seed is mapped to 1 (xorshift requirement).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value, advancing the internal state.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random f64 in range [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random f64 in range [min, max).
    ///
    /// A degenerate range (`min == max`) always returns `min`, which is how
    /// scenario configurations pin service durations to a constant.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        assert!(min <= max, "min must not exceed max");
        min + self.next_f64() * (max - min)
    }

    /// Draw from an exponential distribution with the given mean.
    ///
    /// Uses inverse-transform sampling on `1 - u` so the argument to `ln`
    /// stays in (0, 1]. The draw is always finite and non-negative.
    ///
    /// # Panics
    /// Panics if `mean` is not positive.
    pub fn exponential(&mut self, mean: f64) -> f64 {
        assert!(mean > 0.0, "mean must be positive");
        let u = self.next_f64();
        -(1.0 - u).ln() * mean
    }

    /// Bernoulli trial: true with probability `p`.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Get current RNG state (for checkpointing/replay).
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
