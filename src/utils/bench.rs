//! Shared benchmark utilities.
//!
//! Input generation and scheduling helpers used by the harness. Everything
//! here is driven by explicit configuration passed per call; there is no
//! process-wide seed or ambient default.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Value distribution of a synthetic input array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform over the full configured range.
    Uniform,
    /// Range clamped to strictly positive values.
    AllPositive,
    /// Range clamped to strictly negative values.
    AllNegative,
}

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Distribution::Uniform => "Random",
            Distribution::AllPositive => "AllPositive",
            Distribution::AllNegative => "AllNegative",
        }
    }
}

/// Description of one synthetic input: length, value range and distribution.
///
/// Generation is deterministic in the seed, so a benchmark run can be
/// reproduced exactly from its command line.
#[derive(Clone, Copy, Debug)]
pub struct InputSpec {
    pub len: usize,
    pub min: i32,
    pub max: i32,
    pub distribution: Distribution,
}

impl InputSpec {
    pub fn uniform(len: usize, min: i32, max: i32) -> Self {
        Self {
            len,
            min,
            max,
            distribution: Distribution::Uniform,
        }
    }

    pub fn with_distribution(self, distribution: Distribution) -> Self {
        Self {
            distribution,
            ..self
        }
    }

    /// Materialize the input array for `seed`.
    pub fn generate(&self, seed: u64) -> Vec<i32> {
        let (lo, hi) = match self.distribution {
            Distribution::Uniform => (self.min, self.max),
            Distribution::AllPositive => (self.min.max(1), self.max.max(1)),
            Distribution::AllNegative => (self.min.min(-1), self.max.min(-1)),
        };
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        let mut rng = StdRng::seed_from_u64(seed);
        (0..self.len).map(|_| rng.random_range(lo..=hi)).collect()
    }
}

/// Simple seeded PRNG for reproducible shuffles.
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

/// Fisher-Yates shuffle with a fresh seeded RNG.
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    shuffle_with_rng(slice, &mut rng);
}

/// Shuffle using an existing RNG (allows sequential shuffles with state preserved)
pub fn shuffle_with_rng<T>(slice: &mut [T], rng: &mut SeededRng) {
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let spec = InputSpec::uniform(256, -1000, 1000);
        assert_eq!(spec.generate(42), spec.generate(42));
        assert_ne!(spec.generate(42), spec.generate(43));
    }

    #[test]
    fn distributions_respect_sign() {
        let spec = InputSpec::uniform(512, -1000, 1000);

        let positive = spec.with_distribution(Distribution::AllPositive).generate(7);
        assert!(positive.iter().all(|&v| v > 0));

        let negative = spec.with_distribution(Distribution::AllNegative).generate(7);
        assert!(negative.iter().all(|&v| v < 0));
    }

    #[test]
    fn values_stay_in_range() {
        let spec = InputSpec::uniform(1024, -50, 50);
        assert!(spec.generate(1).iter().all(|&v| (-50..=50).contains(&v)));
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut data: Vec<usize> = (0..100).collect();
        shuffle(&mut data, 99);
        let mut sorted = data.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }
}
