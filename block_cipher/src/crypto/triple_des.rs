use crate::crypto::cipher_traits::{
    process_blocks_parallel, BlockCipher, CipherAlgorithm, SymmetricCipher,
};
use crate::crypto::des::{Des, DES_BLOCK_SIZE, DES_ROUNDS};
use crate::crypto::errors::CipherError;

/// EDE Triple-DES. The key splits into three equal thirds K1, K2, K3;
/// encryption is E_K3(D_K2(E_K1(block))).
pub struct TripleDes {
    first: Des,
    second: Des,
    third: Des,
    initialized: bool,
}

impl TripleDes {
    pub fn new() -> Self {
        TripleDes {
            first: Des::new(),
            second: Des::new(),
            third: Des::new(),
            initialized: false,
        }
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if !self.initialized {
            return Err(CipherError::NotInitialized);
        }
        if block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::InvalidData("Triple-DES block must be 8 bytes"));
        }
        Ok(())
    }
}

impl Default for TripleDes {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherAlgorithm for TripleDes {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_parallel(self, data, true)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_parallel(self, data, false)
    }
}

impl SymmetricCipher for TripleDes {
    fn initialize(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let third_len = match key.len() {
            21 => 7,
            24 => 8,
            _ => {
                return Err(CipherError::InvalidArgument(
                    "Triple-DES key must be 21 or 24 bytes",
                ))
            }
        };

        self.first.initialize(&key[..third_len])?;
        self.second.initialize(&key[third_len..2 * third_len])?;
        self.third.initialize(&key[2 * third_len..])?;
        self.initialized = true;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        vec![21, 24]
    }
}

impl BlockCipher for TripleDes {
    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn rounds_count(&self) -> usize {
        3 * DES_ROUNDS
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let stage1 = self.first.encrypt_raw(block)?;
        let stage2 = self.second.decrypt_raw(&stage1)?;
        self.third.encrypt_raw(&stage2)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let stage1 = self.third.decrypt_raw(block)?;
        let stage2 = self.second.encrypt_raw(&stage1)?;
        self.first.decrypt_raw(&stage2)
    }

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let third_len = match key.len() {
            21 => 7,
            24 => 8,
            _ => {
                return Err(CipherError::InvalidArgument(
                    "Triple-DES key must be 21 or 24 bytes",
                ))
            }
        };

        let mut keys = Vec::with_capacity(3 * DES_ROUNDS);
        for part in key.chunks(third_len) {
            keys.extend(self.first.generate_round_keys(part)?);
        }
        Ok(keys)
    }
}
