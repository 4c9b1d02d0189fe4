use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Get the random number generator for a seed.
///
/// # Arguments
///
/// * `seed`: The seed number.
///
/// returns: `Box<dyn RngCore>`
pub fn get_rng(seed: u64) -> Box<dyn RngCore> {
    Box::new(ChaCha8Rng::seed_from_u64(seed))
}

/// Derive a seed from the wall clock. Used when the caller does not inject one; runs seeded this
/// way are not reproducible.
///
/// returns: `u64`
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
