// src/generators/engine.rs
use std::sync::{Mutex, PoisonError};

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use super::combination::LengthGroups;
use super::random::SecureSampler;
use super::GenerateError;
use crate::dictionary::Dictionary;
use crate::models::{CasePolicy, GenerationRequest};

pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub type GenerationResult = Result<String, GenerateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Honour the mixed case policy in character mode by sampling from both
    /// letter cases. When off, mixed behaves like lowercase there; word mode
    /// always honours it.
    pub mixed_case_characters: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { mixed_case_characters: true }
    }
}

pub struct PasswordEngine {
    options: EngineOptions,
    last_error: Mutex<Option<String>>,
}

impl PasswordEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            last_error: Mutex::new(None),
        }
    }

    /// Generate a password using the operating system's CSPRNG.
    pub fn generate(&self, request: &GenerationRequest, dictionary: Option<&Dictionary>) -> GenerationResult {
        self.generate_with(request, dictionary, &mut OsRng)
    }

    pub fn generate_with<R: RngCore + CryptoRng>(
        &self,
        request: &GenerationRequest,
        dictionary: Option<&Dictionary>,
        rng: &mut R,
    ) -> GenerationResult {
        if !request.length_in_bounds() {
            log::warn!("Rejected password length {}", request.length);
            let err = GenerateError::InvalidLength(request.length);
            self.record_error(Some(err.to_string()));
            return Err(err);
        }

        self.record_error(None);

        let mut sampler = SecureSampler::new(rng);
        let outcome = if request.include_words {
            self.word_password(request, dictionary, &mut sampler)
        } else {
            self.character_password(request, &mut sampler)
        };

        if let Err(e) = &outcome {
            log::warn!("Password generation failed ({:?}): {}", e.kind(), e);
            self.record_error(Some(e.to_string()));
        }
        outcome
    }

    /// Message of the most recent failed request, if the latest one failed.
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Candidate characters for character mode, in a fixed order.
    pub fn character_alphabet(&self, request: &GenerationRequest) -> Vec<u8> {
        let mut chars = Vec::with_capacity(LOWERCASE.len() + UPPERCASE.len() + SYMBOLS.len());
        match request.case_policy {
            CasePolicy::Uppercase => chars.extend_from_slice(UPPERCASE),
            CasePolicy::Mixed if self.options.mixed_case_characters => {
                chars.extend_from_slice(LOWERCASE);
                chars.extend_from_slice(UPPERCASE);
            }
            _ => chars.extend_from_slice(LOWERCASE),
        }
        if request.include_symbols {
            chars.extend_from_slice(SYMBOLS);
        }
        chars
    }

    fn character_password<R: RngCore + CryptoRng>(
        &self,
        request: &GenerationRequest,
        sampler: &mut SecureSampler<'_, R>,
    ) -> GenerationResult {
        let alphabet = self.character_alphabet(request);
        if alphabet.is_empty() {
            return Err(GenerateError::EmptyPool);
        }

        let mut password = String::with_capacity(request.length);
        for _ in 0..request.length {
            password.push(char::from(*sampler.choose(&alphabet)?));
        }
        Ok(password)
    }

    fn word_password<R: RngCore + CryptoRng>(
        &self,
        request: &GenerationRequest,
        dictionary: Option<&Dictionary>,
        sampler: &mut SecureSampler<'_, R>,
    ) -> GenerationResult {
        let dictionary = dictionary
            .filter(|d| !d.is_empty())
            .ok_or(GenerateError::DictionaryUnavailable)?;

        let groups = LengthGroups::new(dictionary, request.length);
        if groups.is_empty() {
            return Err(GenerateError::EmptyPool);
        }

        let combination = groups.find_combination(request.length).ok_or_else(|| {
            log::debug!("No word lengths {:?} sum to {}", groups.lengths(), request.length);
            GenerateError::NoCombination(request.length)
        })?;

        let mut body = Vec::with_capacity(request.length);
        for word in pick_words(&groups, &combination, sampler)? {
            body.extend_from_slice(word.as_bytes());
        }

        apply_case(&mut body, request.case_policy, sampler)?;
        if request.include_symbols {
            inject_symbols(&mut body, sampler)?;
        }

        Ok(body.into_iter().map(char::from).collect())
    }

    fn record_error(&self, message: Option<String>) {
        *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) = message;
    }
}

impl Default for PasswordEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

fn pick_words<'a, R: RngCore + CryptoRng>(
    groups: &LengthGroups<'a>,
    combination: &[usize],
    sampler: &mut SecureSampler<'_, R>,
) -> Result<Vec<&'a str>, GenerateError> {
    combination
        .iter()
        .map(|&length| sampler.choose(groups.words_of(length)).copied())
        .collect()
}

fn apply_case<R: RngCore + CryptoRng>(
    body: &mut [u8],
    policy: CasePolicy,
    sampler: &mut SecureSampler<'_, R>,
) -> Result<(), GenerateError> {
    match policy {
        CasePolicy::Lowercase => {}
        CasePolicy::Uppercase => body.make_ascii_uppercase(),
        CasePolicy::Mixed => {
            for c in body.iter_mut() {
                if sampler.coin()? {
                    c.make_ascii_uppercase();
                }
            }
        }
    }
    Ok(())
}

// First, middle and last characters become symbols; shorter bodies are left alone.
fn inject_symbols<R: RngCore + CryptoRng>(
    body: &mut [u8],
    sampler: &mut SecureSampler<'_, R>,
) -> Result<(), GenerateError> {
    let len = body.len();
    if len < 3 {
        return Ok(());
    }
    for pos in [0, len / 2, len - 1] {
        body[pos] = *sampler.choose(SYMBOLS)?;
    }
    Ok(())
}
