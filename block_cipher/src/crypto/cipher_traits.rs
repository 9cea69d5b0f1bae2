use crate::crypto::errors::CipherError;
use rayon::prelude::*;

pub trait CipherAlgorithm {
    /// Whole-buffer convenience; `data` must be a multiple of the block size.
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn initialize(&mut self, key: &[u8]) -> Result<(), CipherError>;
    fn is_initialized(&self) -> bool;
    fn supported_key_sizes(&self) -> Vec<usize>;
}

/// The capability the mode engine consumes. Implementations carry only the
/// expanded round keys after `initialize`, so block operations are safe to
/// call from multiple workers.
pub trait BlockCipher: SymmetricCipher {
    fn block_size(&self) -> usize;
    fn rounds_count(&self) -> usize;
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError>;
}

/// Per-block parallel drive for the whole-buffer convenience methods of the
/// heavier ciphers. Output blocks keep the input index order.
pub fn process_blocks_parallel<C>(
    cipher: &C,
    data: &[u8],
    encrypt: bool,
) -> Result<Vec<u8>, CipherError>
where
    C: BlockCipher + Sync + ?Sized,
{
    let block_size = cipher.block_size();
    if block_size == 0 || data.len() % block_size != 0 {
        return Err(CipherError::InvalidData(
            "buffer length is not a multiple of the block size",
        ));
    }

    let blocks: Vec<Vec<u8>> = data
        .par_chunks(block_size)
        .map(|block| {
            if encrypt {
                cipher.encrypt_block(block)
            } else {
                cipher.decrypt_block(block)
            }
        })
        .collect::<Result<_, _>>()?;

    Ok(blocks.concat())
}

/// Sequential counterpart for the lighter ciphers.
pub fn process_blocks_serial<C>(
    cipher: &C,
    data: &[u8],
    encrypt: bool,
) -> Result<Vec<u8>, CipherError>
where
    C: BlockCipher + ?Sized,
{
    let block_size = cipher.block_size();
    if block_size == 0 || data.len() % block_size != 0 {
        return Err(CipherError::InvalidData(
            "buffer length is not a multiple of the block size",
        ));
    }

    let mut out = Vec::with_capacity(data.len());
    for block in data.chunks(block_size) {
        let processed = if encrypt {
            cipher.encrypt_block(block)?
        } else {
            cipher.decrypt_block(block)?
        };
        out.extend_from_slice(&processed);
    }
    Ok(out)
}
