use crate::crypto::errors::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::round_function::RoundFunction;
use crate::crypto::utils::xor_blocks;
use std::sync::Arc;

/// Drives a (key-expander, round-function) pair for a fixed round count.
///
/// The halves are concatenated swapped after the last round; running the
/// same loop with the round keys reversed is then its own inverse.
pub struct FeistelNetwork {
    rounds: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_function: Arc<dyn RoundFunction + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        rounds: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        round_function: Arc<dyn RoundFunction + Send + Sync>,
    ) -> Self {
        Self {
            rounds,
            key_expansion,
            round_function,
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn expand_key(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        self.key_expansion.expand_key_for_rounds(key, self.rounds)
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        self.run(block, round_keys, false)
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        self.run(block, round_keys, true)
    }

    fn run(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
        reverse: bool,
    ) -> Result<Vec<u8>, CipherError> {
        if block.len() % 2 != 0 {
            return Err(CipherError::InvalidData(
                "Feistel block must split into equal halves",
            ));
        }
        if round_keys.len() < self.rounds {
            return Err(CipherError::InvalidArgument(
                "not enough round keys for the configured round count",
            ));
        }

        let (high, low) = block.split_at(block.len() / 2);
        let mut left = high.to_vec();
        let mut right = low.to_vec();

        for index in 0..self.rounds {
            let key_index = if reverse { self.rounds - 1 - index } else { index };
            let mixed = self.round_function.transform(&right, &round_keys[key_index]);
            let new_right = xor_blocks(&left, &mixed);
            left = right;
            right = new_right;
        }

        Ok([right, left].concat())
    }
}
