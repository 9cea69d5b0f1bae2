pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
pub use crypto::cipher_types::{CipherMode, ModeState, PaddingMode};
pub use crypto::errors::CipherError;
