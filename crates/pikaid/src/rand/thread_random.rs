use crate::{RANDOMNESS_BYTES, RandSource};
use ::rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is cryptographically secure (ChaCha-based), seeded from the OS
/// and reseeded periodically.
///
/// The type stores nothing; it reaches for the calling thread's generator on
/// every call, so it is freely shareable across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<[u8; RANDOMNESS_BYTES]> for ThreadRandom {
    fn rand(&self) -> [u8; RANDOMNESS_BYTES] {
        let mut bytes = [0_u8; RANDOMNESS_BYTES];
        rng().fill(&mut bytes);
        bytes
    }
}
