use crate::crypto::cipher_traits::{
    process_blocks_parallel, BlockCipher, CipherAlgorithm, SymmetricCipher,
};
use crate::crypto::deal_key_expansion::{deal_rounds_for_key, DealKeyExpansion};
use crate::crypto::des_adapter::DesAdapter;
use crate::crypto::errors::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;
use zeroize::Zeroize;

pub const DEAL_BLOCK_SIZE: usize = 16;

/// DEAL: a 128-bit Feistel cipher whose round function is DES keyed by the
/// expanded round keys.
pub struct Deal {
    key_expansion: DealKeyExpansion,
    feistel: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl Deal {
    pub fn new() -> Self {
        Deal {
            key_expansion: DealKeyExpansion,
            feistel: Self::network(6),
            round_keys: Vec::new(),
        }
    }

    fn network(rounds: usize) -> FeistelNetwork {
        FeistelNetwork::new(rounds, Arc::new(DealKeyExpansion), Arc::new(DesAdapter::new()))
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::NotInitialized);
        }
        if block.len() != DEAL_BLOCK_SIZE {
            return Err(CipherError::InvalidData("DEAL block must be 16 bytes"));
        }
        Ok(())
    }
}

impl Default for Deal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Deal {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl CipherAlgorithm for Deal {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_parallel(self, data, true)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_parallel(self, data, false)
    }
}

impl SymmetricCipher for Deal {
    fn initialize(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let rounds = deal_rounds_for_key(key.len()).ok_or(CipherError::InvalidArgument(
            "DEAL key must be 16, 24 or 32 bytes",
        ))?;
        if rounds != self.feistel.rounds() {
            self.feistel = Self::network(rounds);
        }
        self.round_keys = self.key_expansion.expand_key(key)?;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        !self.round_keys.is_empty()
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        self.key_expansion.supported_key_sizes()
    }
}

impl BlockCipher for Deal {
    fn block_size(&self) -> usize {
        DEAL_BLOCK_SIZE
    }

    fn rounds_count(&self) -> usize {
        self.feistel.rounds()
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        self.feistel.encrypt_with_round_keys(block, &self.round_keys)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        self.feistel.decrypt_with_round_keys(block, &self.round_keys)
    }

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        self.key_expansion.expand_key(key)
    }
}
