use crate::crypto::cipher_traits::{
    process_blocks_serial, BlockCipher, CipherAlgorithm, SymmetricCipher,
};
use crate::crypto::errors::CipherError;
use zeroize::Zeroize;

pub const FROG_BLOCK_SIZE: usize = 16;
pub const FROG_ROUNDS: usize = 8;
pub const FROG_MIN_KEY: usize = 5;
pub const FROG_MAX_KEY: usize = 125;

const KEY_BUFFER_LEN: usize = 2304;

struct FrogRound {
    xor_key: [u8; FROG_BLOCK_SIZE],
    subst: [u8; 256],
    inv_subst: [u8; 256],
}

impl Zeroize for FrogRound {
    fn zeroize(&mut self) {
        self.xor_key.zeroize();
        self.subst.zeroize();
        self.inv_subst.zeroize();
    }
}

/// FROG with the byte-oriented key schedule: the user key is repeated into a
/// 2304-byte buffer, XOR-chained, and the chained bytes feed both the round
/// XOR keys and the Fisher-Yates shuffles of the round substitutions.
pub struct Frog {
    rounds: Vec<FrogRound>,
}

impl Frog {
    pub fn new() -> Self {
        Frog { rounds: Vec::new() }
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.rounds.is_empty() {
            return Err(CipherError::NotInitialized);
        }
        if block.len() != FROG_BLOCK_SIZE {
            return Err(CipherError::InvalidData("FROG block must be 16 bytes"));
        }
        Ok(())
    }

    fn build_rounds(key: &[u8]) -> Vec<FrogRound> {
        let mut buffer = vec![0u8; KEY_BUFFER_LEN];
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = key[i % key.len()];
        }

        let mut last = 0u8;
        for slot in buffer.iter_mut() {
            *slot ^= last;
            last = *slot;
        }

        let mut cursor = 0usize;
        let mut draw = |buffer: &[u8]| {
            let byte = buffer[cursor % KEY_BUFFER_LEN];
            cursor += 1;
            byte
        };

        let mut rounds = Vec::with_capacity(FROG_ROUNDS);
        for _ in 0..FROG_ROUNDS {
            let mut xor_key = [0u8; FROG_BLOCK_SIZE];
            for slot in xor_key.iter_mut() {
                *slot = draw(&buffer);
            }

            let mut subst = [0u8; 256];
            for (i, slot) in subst.iter_mut().enumerate() {
                *slot = i as u8;
            }
            for i in (1..256usize).rev() {
                let j = draw(&buffer) as usize % (i + 1);
                subst.swap(i, j);
            }

            let mut inv_subst = [0u8; 256];
            for (i, &mapped) in subst.iter().enumerate() {
                inv_subst[mapped as usize] = i as u8;
            }

            rounds.push(FrogRound {
                xor_key,
                subst,
                inv_subst,
            });
        }

        buffer.zeroize();
        rounds
    }
}

impl Default for Frog {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Frog {
    fn drop(&mut self) {
        for round in self.rounds.iter_mut() {
            round.zeroize();
        }
    }
}

impl CipherAlgorithm for Frog {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_serial(self, data, true)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_serial(self, data, false)
    }
}

impl SymmetricCipher for Frog {
    fn initialize(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() < FROG_MIN_KEY || key.len() > FROG_MAX_KEY {
            return Err(CipherError::InvalidArgument(
                "FROG key must be between 5 and 125 bytes",
            ));
        }
        self.rounds = Self::build_rounds(key);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        !self.rounds.is_empty()
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        (FROG_MIN_KEY..=FROG_MAX_KEY).collect()
    }
}

impl BlockCipher for Frog {
    fn block_size(&self) -> usize {
        FROG_BLOCK_SIZE
    }

    fn rounds_count(&self) -> usize {
        FROG_ROUNDS
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;

        let mut state: [u8; FROG_BLOCK_SIZE] = block.try_into().unwrap();
        for round in &self.rounds {
            for (b, k) in state.iter_mut().zip(round.xor_key.iter()) {
                *b ^= k;
            }
            for b in state.iter_mut() {
                *b = round.subst[*b as usize];
            }
            for i in 0..FROG_BLOCK_SIZE - 1 {
                state[i + 1] ^= state[i];
            }
            state[0] ^= state[FROG_BLOCK_SIZE - 1];
        }
        Ok(state.to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;

        let mut state: [u8; FROG_BLOCK_SIZE] = block.try_into().unwrap();
        for round in self.rounds.iter().rev() {
            state[0] ^= state[FROG_BLOCK_SIZE - 1];
            for i in (0..FROG_BLOCK_SIZE - 1).rev() {
                state[i + 1] ^= state[i];
            }
            for b in state.iter_mut() {
                *b = round.inv_subst[*b as usize];
            }
            for (b, k) in state.iter_mut().zip(round.xor_key.iter()) {
                *b ^= k;
            }
        }
        Ok(state.to_vec())
    }

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        if key.len() < FROG_MIN_KEY || key.len() > FROG_MAX_KEY {
            return Err(CipherError::InvalidArgument(
                "FROG key must be between 5 and 125 bytes",
            ));
        }
        Ok(Self::build_rounds(key)
            .into_iter()
            .map(|round| {
                let mut material =
                    Vec::with_capacity(FROG_BLOCK_SIZE + round.subst.len());
                material.extend_from_slice(&round.xor_key);
                material.extend_from_slice(&round.subst);
                material
            })
            .collect())
    }
}
