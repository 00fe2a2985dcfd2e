// src/generators/mod.rs
pub mod combination;
pub mod engine;
pub mod error;
pub mod password;
pub mod random;

#[cfg(test)]
mod test_rngs;

pub use engine::{EngineOptions, GenerationResult, PasswordEngine};
pub use error::{ErrorKind, GenerateError};
pub use password::PasswordGenerator;
