use std::sync::Mutex;

use chrono::Utc;
use rand::{SeedableRng, rngs::StdRng};

/// `StdRng` seeded from the wall clock, or from `seed` when given.
pub fn seeded_or_clock(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        let now = Utc::now();
        now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()) as u64
    });
    StdRng::seed_from_u64(seed)
}

/// A `StdRng` that can be shared between tasks. The lock is never held across an await.
#[derive(Debug)]
pub struct SharedRng(Mutex<StdRng>);

impl SharedRng {
    pub fn new(rng: StdRng) -> Self {
        Self(Mutex::new(rng))
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while holding the lock cannot leave an RNG in a bad state.
        let mut guard = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::new(seeded_or_clock(None))
    }
}
