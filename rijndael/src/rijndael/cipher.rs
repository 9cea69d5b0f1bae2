use crate::gf::arithmetic::{gf_mul, modulus_from_byte, Poly};
use crate::gf::irreducible::is_irreducible;
use crate::rijndael::key_schedule::{expand_key, SUPPORTED_KEY_SIZES};
use crate::rijndael::sbox::build_tables;
use block_cipher::crypto::cipher_traits::{
    process_blocks_parallel, BlockCipher, CipherAlgorithm, SymmetricCipher,
};
use block_cipher::crypto::errors::CipherError;
use zeroize::Zeroize;

pub const SUPPORTED_BLOCK_SIZES: [usize; 3] = [16, 24, 32];

/// The state is a vector of Nb four-byte columns.
type State = Vec<[u8; 4]>;

fn block_to_state(block: &[u8], nb: usize) -> State {
    let mut s = vec![[0u8; 4]; nb];
    for c in 0..nb {
        for r in 0..4 {
            s[c][r] = block[c * 4 + r];
        }
    }
    s
}

fn state_to_block(s: &State) -> Vec<u8> {
    let nb = s.len();
    let mut out = vec![0u8; 4 * nb];
    for c in 0..nb {
        for r in 0..4 {
            out[c * 4 + r] = s[c][r];
        }
    }
    out
}

/// Row offsets for ShiftRows; wide states shift rows 2 and 3 one further.
fn shift_offsets(nb: usize) -> [usize; 4] {
    if nb < 8 {
        [0, 1, 2, 3]
    } else {
        [0, 1, 3, 4]
    }
}

/// Multiplication tables for the MixColumns coefficients, indexed by
/// coefficient byte then operand.
struct MulTables {
    by: [[u8; 256]; 6],
}

const MIX_COEFFS: [u8; 6] = [0x02, 0x03, 0x09, 0x0B, 0x0D, 0x0E];

impl MulTables {
    fn build(poly: &Poly) -> Self {
        let mut by = [[0u8; 256]; 6];
        for (t, &coeff) in MIX_COEFFS.iter().enumerate() {
            for x in 0..=255u8 {
                by[t][x as usize] = gf_mul(coeff, x, poly);
            }
        }
        Self { by }
    }

    fn mul(&self, coeff: u8, x: u8) -> u8 {
        match coeff {
            0x01 => x,
            0x02 => self.by[0][x as usize],
            0x03 => self.by[1][x as usize],
            0x09 => self.by[2][x as usize],
            0x0B => self.by[3][x as usize],
            0x0D => self.by[4][x as usize],
            0x0E => self.by[5][x as usize],
            _ => unreachable!("coefficient outside the MixColumns set"),
        }
    }
}

pub struct Rijndael {
    poly: Poly,
    block_size: usize,
    sbox: [u8; 256],
    inv_sbox: [u8; 256],
    mul: MulTables,
    round_keys: Vec<Vec<u8>>,
    rounds: usize,
}

impl Rijndael {
    /// `block_size` in bytes, `poly_byte` the low byte of the reduction
    /// polynomial (x^8 implicit); 0x1B yields AES proper.
    pub fn new(block_size: usize, poly_byte: u8) -> Result<Self, CipherError> {
        if !SUPPORTED_BLOCK_SIZES.contains(&block_size) {
            return Err(CipherError::InvalidArgument(
                "Rijndael block size must be 16, 24 or 32 bytes",
            ));
        }
        let poly = modulus_from_byte(poly_byte);
        if !is_irreducible(&poly) {
            return Err(CipherError::InvalidArgument(
                "reduction polynomial is not irreducible",
            ));
        }

        let (sbox, inv_sbox) = build_tables(&poly);
        let mul = MulTables::build(&poly);

        Ok(Self {
            poly,
            block_size,
            sbox,
            inv_sbox,
            mul,
            round_keys: Vec::new(),
            rounds: block_size / 4 + 6,
        })
    }

    pub fn aes128() -> Result<Self, CipherError> {
        Self::new(16, 0x1B)
    }

    fn nb(&self) -> usize {
        self.block_size / 4
    }

    fn add_round_key(state: &mut State, round_key: &[u8]) {
        for (c, col) in state.iter_mut().enumerate() {
            for r in 0..4 {
                col[r] ^= round_key[c * 4 + r];
            }
        }
    }

    fn sub_bytes(&self, state: &mut State) {
        for col in state.iter_mut() {
            for byte in col.iter_mut() {
                *byte = self.sbox[*byte as usize];
            }
        }
    }

    fn inv_sub_bytes(&self, state: &mut State) {
        for col in state.iter_mut() {
            for byte in col.iter_mut() {
                *byte = self.inv_sbox[*byte as usize];
            }
        }
    }

    fn shift_rows(state: &mut State) {
        let nb = state.len();
        let offsets = shift_offsets(nb);
        for r in 1..4 {
            let shift = offsets[r];
            let mut tmp = vec![0u8; nb];
            for c in 0..nb {
                tmp[c] = state[(c + shift) % nb][r];
            }
            for c in 0..nb {
                state[c][r] = tmp[c];
            }
        }
    }

    fn inv_shift_rows(state: &mut State) {
        let nb = state.len();
        let offsets = shift_offsets(nb);
        for r in 1..4 {
            let shift = offsets[r];
            let mut tmp = vec![0u8; nb];
            for c in 0..nb {
                tmp[c] = state[(c + nb - shift % nb) % nb][r];
            }
            for c in 0..nb {
                state[c][r] = tmp[c];
            }
        }
    }

    fn mix_columns(&self, state: &mut State) {
        for col in state.iter_mut() {
            let a = *col;
            col[0] = self.mul.mul(0x02, a[0]) ^ self.mul.mul(0x03, a[1]) ^ a[2] ^ a[3];
            col[1] = a[0] ^ self.mul.mul(0x02, a[1]) ^ self.mul.mul(0x03, a[2]) ^ a[3];
            col[2] = a[0] ^ a[1] ^ self.mul.mul(0x02, a[2]) ^ self.mul.mul(0x03, a[3]);
            col[3] = self.mul.mul(0x03, a[0]) ^ a[1] ^ a[2] ^ self.mul.mul(0x02, a[3]);
        }
    }

    fn inv_mix_columns(&self, state: &mut State) {
        for col in state.iter_mut() {
            let a = *col;
            col[0] = self.mul.mul(0x0E, a[0])
                ^ self.mul.mul(0x0B, a[1])
                ^ self.mul.mul(0x0D, a[2])
                ^ self.mul.mul(0x09, a[3]);
            col[1] = self.mul.mul(0x09, a[0])
                ^ self.mul.mul(0x0E, a[1])
                ^ self.mul.mul(0x0B, a[2])
                ^ self.mul.mul(0x0D, a[3]);
            col[2] = self.mul.mul(0x0D, a[0])
                ^ self.mul.mul(0x09, a[1])
                ^ self.mul.mul(0x0E, a[2])
                ^ self.mul.mul(0x0B, a[3]);
            col[3] = self.mul.mul(0x0B, a[0])
                ^ self.mul.mul(0x0D, a[1])
                ^ self.mul.mul(0x09, a[2])
                ^ self.mul.mul(0x0E, a[3]);
        }
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::NotInitialized);
        }
        if block.len() != self.block_size {
            return Err(CipherError::InvalidData(
                "block length must equal the configured block size",
            ));
        }
        Ok(())
    }
}

impl Drop for Rijndael {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl CipherAlgorithm for Rijndael {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_parallel(self, data, true)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        process_blocks_parallel(self, data, false)
    }
}

impl SymmetricCipher for Rijndael {
    fn initialize(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let round_keys = expand_key(key, &self.poly, self.block_size)?;
        self.rounds = round_keys.len() - 1;
        self.round_keys = round_keys;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        !self.round_keys.is_empty()
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        SUPPORTED_KEY_SIZES.to_vec()
    }
}

impl BlockCipher for Rijndael {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn rounds_count(&self) -> usize {
        self.rounds
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;

        let mut state = block_to_state(block, self.nb());
        Self::add_round_key(&mut state, &self.round_keys[0]);

        for round in 1..self.rounds {
            self.sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            self.mix_columns(&mut state);
            Self::add_round_key(&mut state, &self.round_keys[round]);
        }
        self.sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, &self.round_keys[self.rounds]);

        Ok(state_to_block(&state))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;

        let mut state = block_to_state(block, self.nb());
        Self::add_round_key(&mut state, &self.round_keys[self.rounds]);
        Self::inv_shift_rows(&mut state);
        self.inv_sub_bytes(&mut state);

        for round in (1..self.rounds).rev() {
            Self::add_round_key(&mut state, &self.round_keys[round]);
            self.inv_mix_columns(&mut state);
            Self::inv_shift_rows(&mut state);
            self.inv_sub_bytes(&mut state);
        }
        Self::add_round_key(&mut state, &self.round_keys[0]);

        Ok(state_to_block(&state))
    }

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        expand_key(key, &self.poly, self.block_size)
    }
}
