// src/generators/test_rngs.rs
use std::io;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore};

pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// RNG whose entropy source is always down.
pub struct BrokenRng;

impl RngCore for BrokenRng {
    fn next_u32(&mut self) -> u32 {
        panic!("BrokenRng must only be used through try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("BrokenRng must only be used through try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("BrokenRng must only be used through try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new(io::Error::new(io::ErrorKind::Other, "entropy source offline")))
    }
}

impl CryptoRng for BrokenRng {}

/// Wraps a seeded RNG and counts how often it is asked for bytes.
pub struct CountingRng {
    inner: ChaCha20Rng,
    pub draws: usize,
}

impl CountingRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: seeded(seed), draws: 0 }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for CountingRng {}
