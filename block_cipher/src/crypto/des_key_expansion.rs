use crate::crypto::des_tables::{PC1, PC2, SHIFT_SCHEDULE};
use crate::crypto::errors::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, permute_bits};
use bitvec::prelude::BitVec;

/// Widens a 7-byte raw key to the 8-byte wire form: seven key bits per byte,
/// low bit set so every byte has odd parity.
pub fn widen_raw_key(key: &[u8]) -> Vec<u8> {
    debug_assert_eq!(key.len(), 7);
    let bits = bytes_to_bits(key);
    let mut out = Vec::with_capacity(8);
    for group in bits.chunks(7) {
        let mut byte = 0u8;
        for (i, bit) in group.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        out.push(with_odd_parity(byte));
    }
    out
}

/// Regenerates the parity bit of each byte: clear the low bit, then set it
/// so the byte has an odd number of ones.
pub fn regenerate_parity(key: &[u8]) -> Vec<u8> {
    key.iter().map(|&b| with_odd_parity(b & 0xFE)).collect()
}

fn with_odd_parity(byte: u8) -> u8 {
    if byte.count_ones() % 2 == 0 {
        byte | 1
    } else {
        byte
    }
}

/// PC-1 into two 28-bit halves, the published rotation schedule, PC-2 down
/// to sixteen 48-bit round keys.
pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn expand_key(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let key = match key.len() {
            7 => widen_raw_key(key),
            8 => regenerate_parity(key),
            _ => {
                return Err(CipherError::InvalidArgument(
                    "DES key must be 7 or 8 bytes",
                ))
            }
        };

        let permuted = permute_bits(&key, &PC1);
        let bits = bytes_to_bits(&permuted);

        let mut c: BitVec = bits.iter().by_vals().take(28).collect();
        let mut d: BitVec = bits.iter().by_vals().skip(28).take(28).collect();

        let mut round_keys = Vec::with_capacity(SHIFT_SCHEDULE.len());
        for &shift in &SHIFT_SCHEDULE {
            c.rotate_left(shift);
            d.rotate_left(shift);

            let mut cd = BitVec::with_capacity(56);
            cd.extend(c.iter().by_vals());
            cd.extend(d.iter().by_vals());

            round_keys.push(permute_bits(&bits_to_bytes(&cd), &PC2));
        }

        Ok(round_keys)
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        vec![7, 8]
    }

    fn round_key_size(&self) -> usize {
        6
    }
}
