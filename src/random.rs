//! Random sources for emoji selection.
//!
//! Production rants draw from one process-wide generator seeded from the clock
//! at first use. Tests inject a seeded [`StdRng`] instead.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

lazy_static! {
    static ref PROCESS_RNG: Mutex<StdRng> = Mutex::new(StdRng::seed_from_u64(time_seed()));
}

fn time_seed() -> u64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

fn process_rng() -> MutexGuard<'static, StdRng> {
    // a panic while holding the lock cannot leave a StdRng half-updated
    PROCESS_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the process-wide generator with one seeded from `seed`
pub fn reseed(seed: u64) {
    debug!("Reseeding process random source with {}", seed);
    *process_rng() = StdRng::seed_from_u64(seed);
}

/// Source of randomness for shuffling and sampling
pub trait RandomSource {
    /// Shuffle `indices` into a uniformly random permutation
    fn shuffle(&mut self, indices: &mut [usize]);

    /// Pick a uniformly random index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn shuffle(&mut self, indices: &mut [usize]) {
        indices.shuffle(self);
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn shuffle(&mut self, indices: &mut [usize]) {
        (**self).shuffle(indices);
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Handle to the process-wide generator.
///
/// Each operation holds the lock for its whole duration, so concurrent rants
/// never interleave inside a shuffle.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedRandom;

impl RandomSource for SharedRandom {
    fn shuffle(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut *process_rng());
    }

    fn pick(&mut self, len: usize) -> usize {
        process_rng().gen_range(0..len)
    }
}
