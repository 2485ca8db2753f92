//! Pseudo-random lowercase strings.
//!
//! # Design Decisions
//! - One generator per process, seeded from the wall clock on first use
//! - Generator is mutex-guarded so concurrent callers are safe
//! - Not suitable for secrets: `StdRng` seeded from time is predictable

use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alphabet used for generated strings.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A seeded source of random lowercase strings.
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    /// Seed from the current time in nanoseconds.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    /// Fixed seed, for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produce `length` characters drawn uniformly from [`LOWERCASE`].
    pub fn string(&self, length: usize) -> String {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..length)
            .map(|_| LOWERCASE[rng.gen_range(0..LOWERCASE.len())] as char)
            .collect()
    }
}

fn global() -> &'static RandomSource {
    static SOURCE: OnceLock<RandomSource> = OnceLock::new();
    SOURCE.get_or_init(RandomSource::from_time)
}

/// Random lowercase string of the given length from the process-wide source.
pub fn random_string(length: usize) -> String {
    global().string(length)
}
