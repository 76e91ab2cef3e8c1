//! Seeded pseudo-random draw source shared by every generation step.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Deterministic draw stream: two sources built from the same seed and
/// queried with the same call sequence produce identical results. This is
/// the reproducibility contract the whole generator rests on, so no other
/// component may read entropy directly.
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw in `[low, high)`. An empty or inverted range yields `low`.
    pub fn next_int(&mut self, low_inclusive: i32, high_exclusive: i32) -> i32 {
        let span = i64::from(high_exclusive) - i64::from(low_inclusive);
        if span <= 0 {
            return low_inclusive;
        }
        let draw = self.rng.next_u64() % span as u64;
        low_inclusive + draw as i32
    }

    /// True with the given probability; `0` never, `>= 100` always.
    pub fn next_bool(&mut self, probability_percent: u8) -> bool {
        if probability_percent >= 100 {
            return true;
        }
        self.next_int(0, 100) < i32::from(probability_percent)
    }

    /// Fisher–Yates shuffle driven by this source's stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let other = self.next_int(0, index as i32 + 1) as usize;
            items.swap(index, other);
        }
    }
}
