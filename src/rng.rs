//! Deterministic random number generation
//!
//! Every field generator owns one `WorldRng`. Seeded streams use `ChaCha8Rng`
//! expanded with `seed_from_u64`, so a given seed yields the same sequence on
//! every platform and run.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct WorldRng {
    inner: ChaCha8Rng,
}

impl WorldRng {
    /// Seeded stream when `seed` is given, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { inner }
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform integer in the closed range `[lo, hi]`.
    pub fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        self.inner.gen_range(lo..=hi)
    }

    /// Uniform offset in `[-scale / 2, scale / 2)`.
    pub fn perturbation(&mut self, scale: f64) -> f64 {
        (self.next_unit() - 0.5) * scale
    }
}

impl RngCore for WorldRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Derive a per-stream seed from a master seed and a stream index.
pub fn derive_seed(master_seed: u64, stream: u64) -> u64 {
    let mut seed = master_seed;
    seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    seed ^= stream.wrapping_mul(1103515245);
    seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    seed ^= stream.wrapping_mul(48271);
    seed
}
