use crate::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use crate::crypto::errors::CipherError;
use std::sync::Mutex;
use zeroize::Zeroize;

pub const RC4_MIN_KEY: usize = 5;
pub const RC4_MAX_KEY: usize = 256;

struct Rc4State {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4State {
    fn next(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[self.i as usize]);
        self.s.swap(self.i as usize, self.j as usize);
        let index = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
        self.s[index as usize]
    }
}

/// RC4 keystream cipher. Reports a block size of zero: it has no block
/// structure and the mode engine refuses it. Encryption and decryption are
/// the same XOR; `reset` rewinds the permutation to its post-KSA snapshot.
pub struct Rc4 {
    snapshot: Option<[u8; 256]>,
    state: Mutex<Rc4State>,
}

impl Rc4 {
    pub fn new() -> Self {
        Rc4 {
            snapshot: None,
            state: Mutex::new(Rc4State {
                s: [0u8; 256],
                i: 0,
                j: 0,
            }),
        }
    }

    /// Restores the permutation to the value it had right after key setup.
    pub fn reset(&self) -> Result<(), CipherError> {
        let snapshot = self.snapshot.ok_or(CipherError::NotInitialized)?;
        let mut state = self.state.lock().expect("RC4 state lock poisoned");
        state.s = snapshot;
        state.i = 0;
        state.j = 0;
        Ok(())
    }

    fn apply_keystream(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if self.snapshot.is_none() {
            return Err(CipherError::NotInitialized);
        }
        let mut state = self.state.lock().expect("RC4 state lock poisoned");
        Ok(data.iter().map(|&b| b ^ state.next()).collect())
    }
}

impl Default for Rc4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Rc4 {
    fn drop(&mut self) {
        if let Some(mut snapshot) = self.snapshot.take() {
            snapshot.zeroize();
        }
        if let Ok(mut state) = self.state.lock() {
            state.s.zeroize();
            state.i = 0;
            state.j = 0;
        }
    }
}

impl CipherAlgorithm for Rc4 {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply_keystream(data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply_keystream(data)
    }
}

impl SymmetricCipher for Rc4 {
    fn initialize(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() < RC4_MIN_KEY || key.len() > RC4_MAX_KEY {
            return Err(CipherError::InvalidArgument(
                "RC4 key must be between 5 and 256 bytes",
            ));
        }

        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0u8;
        for i in 0..256usize {
            j = j
                .wrapping_add(s[i])
                .wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }

        self.snapshot = Some(s);
        let mut state = self.state.lock().expect("RC4 state lock poisoned");
        state.s = s;
        state.i = 0;
        state.j = 0;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.snapshot.is_some()
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        (RC4_MIN_KEY..=RC4_MAX_KEY).collect()
    }
}

impl BlockCipher for Rc4 {
    /// A keystream generator has no block structure.
    fn block_size(&self) -> usize {
        0
    }

    fn rounds_count(&self) -> usize {
        1
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply_keystream(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply_keystream(block)
    }

    /// The post-KSA permutation is the only key material RC4 expands.
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let mut probe = Rc4::new();
        probe.initialize(key)?;
        let snapshot = probe.snapshot.expect("snapshot set by initialize");
        Ok(vec![snapshot.to_vec()])
    }
}
