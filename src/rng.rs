//! Seeded random sources for reproducible level setup.
//!
//! Agent placement is the only randomness in the crate; the controller is
//! fully deterministic. Two sources are provided: [`SeededLcg`], which
//! reproduces the small linear congruential generator the demo scenes used,
//! and [`DeterministicRng`], a ChaCha stream for everything else.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait UnitRandom {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Next value in `[low, high)`.
    fn between(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

/// `state = (state * 9301 + 49297) mod 233280`, yielding `state / 233280`.
///
/// # Examples
/// ```
/// use prowl::rng::{SeededLcg, UnitRandom};
/// let mut a = SeededLcg::new(1000);
/// let mut b = SeededLcg::new(1000);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededLcg {
    state: u64,
}

impl SeededLcg {
    /// Creates a generator from `seed`.
    ///
    /// The seed is reduced modulo the generator's modulus, which leaves the
    /// produced sequence unchanged.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    /// Current internal state.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl UnitRandom for SeededLcg {
    #[expect(
        clippy::cast_precision_loss,
        reason = "state is below the modulus and fits exactly in an f64"
    )]
    fn next_unit(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

/// ChaCha8-backed generator remembering its seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DeterministicRng {
    /// Creates a generator from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl UnitRandom for DeterministicRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lcg_matches_reference_sequence() {
        // (1000 * 9301 + 49297) % 233280 = 9350297 % 233280 = 19097
        let mut rng = SeededLcg::new(1000);
        assert_relative_eq!(rng.next_unit(), 19_097.0 / 233_280.0);
        assert_eq!(rng.state(), 19_097);
        let expected = (19_097_u64 * 9301 + 49_297) % 233_280;
        let _ = rng.next_unit();
        assert_eq!(rng.state(), expected);
    }

    #[test]
    fn large_seeds_reduce_without_changing_sequence() {
        let mut raw = SeededLcg::new(2000);
        let mut reduced = SeededLcg::new(2000 + 233_280 * 7);
        for _ in 0..32 {
            assert_eq!(raw.next_unit(), reduced.next_unit());
        }
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut lcg = SeededLcg::new(42);
        let mut chacha = DeterministicRng::new(42);
        for _ in 0..1000 {
            let a = lcg.next_unit();
            let b = chacha.next_unit();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
        }
    }

    #[test]
    fn chacha_is_reproducible() {
        let mut a = DeterministicRng::new(7);
        let mut b = DeterministicRng::new(7);
        assert_eq!(a.seed(), 7);
        for _ in 0..16 {
            assert_eq!(a.between(-5.0, 5.0), b.between(-5.0, 5.0));
        }
    }
}
