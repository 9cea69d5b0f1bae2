use crate::crypto::des::Des;
use crate::crypto::round_function::RoundFunction;
use crate::crypto::cipher_traits::SymmetricCipher;
use std::cell::RefCell;

thread_local! {
    static TL_DES: RefCell<Des> = RefCell::new(Des::new());
}

/// Full DES used as a Feistel round function over an 8-byte half-block,
/// re-keyed per round. A thread-local instance keeps the round function
/// callable from parallel workers without locking.
pub struct DesAdapter;

impl DesAdapter {
    pub fn new() -> Self {
        DesAdapter
    }
}

impl Default for DesAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundFunction for DesAdapter {
    fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Vec<u8> {
        TL_DES.with(|cell| {
            let mut des = cell.borrow_mut();
            des.initialize(round_key)
                .expect("DEAL round key is always a valid DES key");
            des.encrypt_raw(half_block)
                .expect("DEAL half-block is always a valid DES block")
        })
    }

    fn block_size(&self) -> usize {
        8
    }

    fn is_valid_key_size(&self, size: usize) -> bool {
        size == 8
    }
}
