// src/generators/random.rs
use rand_core::{CryptoRng, RngCore};

use super::GenerateError;

/// Draws from a cryptographic RNG through `try_fill_bytes`, so an entropy
/// failure surfaces as an error instead of a panic.
pub struct SecureSampler<'a, R: RngCore + CryptoRng> {
    rng: &'a mut R,
}

impl<'a, R: RngCore + CryptoRng> SecureSampler<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Uniform index in `[0, bound)`, rejection-sampled so that no value is
    /// favoured when `bound` does not divide 2^64.
    pub fn index(&mut self, bound: usize) -> Result<usize, GenerateError> {
        if bound == 0 {
            return Err(GenerateError::EmptyPool);
        }
        let bound = bound as u64;
        // 2^64 mod bound; draws above u64::MAX - excess would wrap unevenly
        let excess = (u64::MAX % bound + 1) % bound;
        loop {
            let value = self.next_u64()?;
            if value <= u64::MAX - excess {
                return Ok((value % bound) as usize);
            }
        }
    }

    pub fn choose<'b, T>(&mut self, items: &'b [T]) -> Result<&'b T, GenerateError> {
        let idx = self.index(items.len())?;
        Ok(&items[idx])
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> Result<bool, GenerateError> {
        let mut byte = [0u8; 1];
        self.rng.try_fill_bytes(&mut byte)?;
        Ok(byte[0] & 1 == 1)
    }

    fn next_u64(&mut self) -> Result<u64, GenerateError> {
        let mut buf = [0u8; 8];
        self.rng.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}
