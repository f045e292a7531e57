// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Identifiers scoping one embedded viewer instance in a page.

use rand::rngs::ThreadRng;
use rand::Rng;

pub const TOKEN_LENGTH: usize = 8;
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Source of element identifiers.
pub trait TokenSource {
    fn next_token(&mut self) -> String;
}

/// Draws `TOKEN_LENGTH` characters uniformly from lowercase letters and
/// digits. Tokens are not checked for collisions.
#[derive(Debug, Clone)]
pub struct RandomTokens<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomTokens<R> {
    pub fn new(rng: R) -> Self {
        RandomTokens { rng }
    }
}

impl RandomTokens<ThreadRng> {
    pub fn from_entropy() -> Self {
        RandomTokens::new(rand::rng())
    }
}

impl<R: Rng> TokenSource for RandomTokens<R> {
    fn next_token(&mut self) -> String {
        (0..TOKEN_LENGTH)
            .map(|_| char::from(ALPHABET[self.rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

/// Always hands out the same token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedToken(pub String);

impl TokenSource for FixedToken {
    fn next_token(&mut self) -> String {
        self.0.clone()
    }
}
