use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::des::Des;
use crate::crypto::des_tables::DEAL_BASE_KEY;
use crate::crypto::errors::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::xor_in_place;

/// DEAL round count by key size: 128/192-bit keys run 6 rounds, 256-bit
/// keys run 8.
pub fn deal_rounds_for_key(key_len: usize) -> Option<usize> {
    match key_len {
        16 | 24 => Some(6),
        32 => Some(8),
        _ => None,
    }
}

/// XOR-feedback chain over the 8-byte key segments. Each accumulator is
/// encrypted by DES under the fixed base key; once the segment cycle wraps,
/// a single-bit constant rotating right per wrap is folded in.
pub struct DealKeyExpansion;

impl KeyExpansion for DealKeyExpansion {
    fn expand_key(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let rounds = deal_rounds_for_key(key.len()).ok_or(CipherError::InvalidArgument(
            "DEAL key must be 16, 24 or 32 bytes",
        ))?;
        self.expand_key_for_rounds(key, rounds)
    }

    fn expand_key_for_rounds(
        &self,
        key: &[u8],
        rounds: usize,
    ) -> Result<Vec<Vec<u8>>, CipherError> {
        if deal_rounds_for_key(key.len()).is_none() {
            return Err(CipherError::InvalidArgument(
                "DEAL key must be 16, 24 or 32 bytes",
            ));
        }

        let mut base = Des::new();
        base.initialize(&DEAL_BASE_KEY)?;

        let segments: Vec<&[u8]> = key.chunks(8).collect();
        let cycle = segments.len();

        let mut round_keys: Vec<Vec<u8>> = Vec::with_capacity(rounds);
        for i in 0..rounds {
            let mut acc = segments[i % cycle].to_vec();
            if let Some(prev) = round_keys.last() {
                xor_in_place(&mut acc, prev);
            }
            if i >= cycle {
                let wrap = i / cycle;
                acc[0] ^= 0x80u8 >> ((wrap - 1) % 8);
            }
            round_keys.push(base.encrypt_raw(&acc)?);
        }

        Ok(round_keys)
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        vec![16, 24, 32]
    }

    fn round_key_size(&self) -> usize {
        8
    }
}
