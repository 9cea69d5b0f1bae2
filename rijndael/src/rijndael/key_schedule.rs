use crate::gf::arithmetic::{gf_mul, Poly};
use crate::rijndael::sbox::sbox;
use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::key_expansion::KeyExpansion;

pub const SUPPORTED_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Expands the key into `Nb * (Nr + 1)` four-byte words and regroups them
/// into per-round keys. `block_size` is in bytes.
pub fn expand_key(
    key: &[u8],
    poly: &Poly,
    block_size: usize,
) -> Result<Vec<Vec<u8>>, CipherError> {
    if !SUPPORTED_KEY_SIZES.contains(&key.len()) {
        return Err(CipherError::InvalidArgument(
            "Rijndael key must be 16, 24 or 32 bytes",
        ));
    }

    let nk = key.len() / 4;
    let nb = block_size / 4;
    let nr = nk.max(nb) + 6;
    let total_words = nb * (nr + 1);

    let rot_word = |w: [u8; 4]| [w[1], w[2], w[3], w[0]];
    let sub_word =
        |w: [u8; 4]| [sbox(w[0], poly), sbox(w[1], poly), sbox(w[2], poly), sbox(w[3], poly)];

    // Round constants by repeated doubling in the field.
    let rcon_len = total_words / nk + 2;
    let mut rcon = vec![0u8; rcon_len];
    rcon[1] = 1;
    for i in 2..rcon_len {
        rcon[i] = gf_mul(rcon[i - 1], 2, poly);
    }

    let mut words: Vec<[u8; 4]> = Vec::with_capacity(total_words);
    for i in 0..nk {
        words.push([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
    }

    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= rcon[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        let prev = words[i - nk];
        words.push([
            prev[0] ^ temp[0],
            prev[1] ^ temp[1],
            prev[2] ^ temp[2],
            prev[3] ^ temp[3],
        ]);
    }

    let mut round_keys = Vec::with_capacity(nr + 1);
    for round in 0..=nr {
        let mut rk = Vec::with_capacity(4 * nb);
        for word in &words[round * nb..(round + 1) * nb] {
            rk.extend_from_slice(word);
        }
        round_keys.push(rk);
    }

    Ok(round_keys)
}

pub struct RijndaelKeyExpansion {
    poly: Poly,
    block_size: usize,
}

impl RijndaelKeyExpansion {
    pub fn new(poly: Poly, block_size: usize) -> Self {
        Self { poly, block_size }
    }

    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl KeyExpansion for RijndaelKeyExpansion {
    fn expand_key(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        expand_key(key, &self.poly, self.block_size)
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        SUPPORTED_KEY_SIZES.to_vec()
    }

    fn round_key_size(&self) -> usize {
        self.block_size
    }
}
