//! Randomness source for victim sampling and slot shuffling.
//!
//! The sampled-LRU policy needs two things from its generator: a uniform
//! slot index for the probe base, and a full permutation of the slot array
//! with a callback per transposition so the key→slot index map can be kept
//! in sync. Both are behind the [`SampleRng`] trait so tests can inject a
//! deterministic or scripted generator while production code uses
//! [`OsSeededRng`], a small PRNG seeded from the operating-system CSPRNG.
//!
//! Seeding from OS entropy keeps eviction patterns unpredictable to an
//! adversary who controls the key stream; seeding from time would not.
//! If OS entropy is unavailable, construction panics rather than falling
//! back to a weak seed — that is a process-environment failure, not a
//! cache-logic error.
//!
//! ## Example
//!
//! ```
//! use probelru::ds::{OsSeededRng, SampleRng};
//!
//! let mut rng = OsSeededRng::with_seed(42);
//! let idx = rng.next_index(10);
//! assert!(idx < 10);
//!
//! // Same seed, same stream.
//! let mut replay = OsSeededRng::with_seed(42);
//! assert_eq!(replay.next_index(10), idx);
//! ```

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform index generation and slot shuffling for the victim sampler.
///
/// Implementations must produce uniformly distributed indices; the sampled
/// eviction analysis assumes every occupied slot is equally likely to be
/// the probe base.
pub trait SampleRng {
    /// Returns a uniformly distributed index in `[0, bound)`.
    ///
    /// `bound` must be at least 1; callers guarantee this by never sampling
    /// an empty slot array.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Shuffles `len` elements with a Fisher–Yates pass, invoking `swap`
    /// for each transposition.
    ///
    /// The callback receives the two positions being exchanged so the
    /// caller can mirror the swap in any side structure (the cache uses it
    /// to keep the index map bijective). Self-swaps are skipped.
    fn shuffle(&mut self, len: usize, swap: &mut dyn FnMut(usize, usize)) {
        for i in (1..len).rev() {
            let j = self.next_index(i + 1);
            if j != i {
                swap(i, j);
            }
        }
    }
}

/// A small PRNG seeded from the operating-system CSPRNG.
///
/// The per-instance generator itself is not cryptographic; only the seed
/// is, which is all the unpredictability argument needs. Use
/// [`with_seed`](Self::with_seed) for reproducible streams in tests.
///
/// # Panics
///
/// [`from_entropy`](Self::from_entropy) panics if the operating system
/// cannot supply entropy.
pub struct OsSeededRng {
    rng: SmallRng,
}

impl OsSeededRng {
    /// Creates a generator seeded from the operating-system CSPRNG.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed, for deterministic streams.
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for OsSeededRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SampleRng for OsSeededRng {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index called with zero bound");
        self.rng.random_range(0..bound)
    }
}

impl fmt::Debug for OsSeededRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsSeededRng").finish_non_exhaustive()
    }
}
