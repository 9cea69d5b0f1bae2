use crate::crypto::cipher_traits::{
    process_blocks_serial, BlockCipher, CipherAlgorithm, SymmetricCipher,
};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_round_function::DesRoundFunction;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::errors::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute_bits;
use std::sync::Arc;
use zeroize::Zeroize;

pub const DES_BLOCK_SIZE: usize = 8;
pub const DES_ROUNDS: usize = 16;

pub struct Des {
    feistel: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl Des {
    pub fn new() -> Self {
        Des {
            feistel: FeistelNetwork::new(
                DES_ROUNDS,
                Arc::new(DesKeyExpansion),
                Arc::new(DesRoundFunction),
            ),
            round_keys: Vec::new(),
        }
    }

    /// Single-block core shared by the trait surface and Triple-DES.
    pub(crate) fn encrypt_raw(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let permuted = permute_bits(block, &IP);
        let mixed = self.feistel.encrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(&mixed, &FP))
    }

    pub(crate) fn decrypt_raw(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let permuted = permute_bits(block, &IP);
        let mixed = self.feistel.decrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(&mixed, &FP))
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::NotInitialized);
        }
        if block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::InvalidData("DES block must be 8 bytes"));
        }
        Ok(())
    }
}

impl Default for Des {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Des {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl CipherAlgorithm for Des {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_serial(self, data, true)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_serial(self, data, false)
    }
}

impl SymmetricCipher for Des {
    fn initialize(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.round_keys = DesKeyExpansion.expand_key(key)?;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        !self.round_keys.is_empty()
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        DesKeyExpansion.supported_key_sizes()
    }
}

impl BlockCipher for Des {
    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn rounds_count(&self) -> usize {
        DES_ROUNDS
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        self.encrypt_raw(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        self.decrypt_raw(block)
    }

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        DesKeyExpansion.expand_key(key)
    }
}
