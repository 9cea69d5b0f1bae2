use crate::crypto::cipher_io::read_up_to;
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::{CipherMode, ModeState, PaddingMode};
use crate::crypto::errors::CipherError;
use crate::crypto::utils::{counter_add_scalar, counter_add_vector, xor_blocks, xor_in_place};
use log::debug;
use rand::rngs::OsRng;
use rand::TryRngCore;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zeroize::Zeroize;

/// The mode engine: borrows a block cipher, owns the padding policy, an IV
/// copy and a freshly drawn `random_data` block (CTR nonce / RandomDelta
/// seed), and evaluates the cipher under the configured confidentiality
/// mode over buffers or files.
///
/// The context itself is stateless across calls; per-stream continuation
/// lives in an explicit [`ModeState`] value threaded through the chunk
/// functions, so a single context may serve any number of independent
/// encrypt/decrypt calls.
#[derive(Clone)]
pub struct CipherContext {
    cipher: Option<Arc<dyn BlockCipher + Send + Sync>>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
    random_data: Vec<u8>,
}

impl CipherContext {
    /// Builds a context. Non-ECB modes require an IV of exactly one block;
    /// ECB must not get one. The random-data block is drawn from the OS
    /// entropy source here, once per context.
    pub fn new(
        cipher: Box<dyn BlockCipher + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, CipherError> {
        let block_size = cipher.block_size();
        if block_size == 0 {
            return Err(CipherError::InvalidArgument(
                "cipher reports no block structure",
            ));
        }

        match (&iv, mode) {
            (Some(_), CipherMode::ECB) => {
                return Err(CipherError::InvalidArgument("ECB mode takes no IV"))
            }
            (None, m) if m != CipherMode::ECB => {
                return Err(CipherError::InvalidArgument(
                    "an IV is required for every non-ECB mode",
                ))
            }
            (Some(iv), _) if iv.len() != block_size => {
                return Err(CipherError::InvalidArgument(
                    "IV length must equal the cipher block size",
                ))
            }
            _ => {}
        }

        let mut random_data = vec![0u8; block_size];
        OsRng
            .try_fill_bytes(&mut random_data)
            .expect("OS entropy source failed");

        Ok(Self {
            cipher: Some(Arc::from(cipher)),
            mode,
            padding,
            iv,
            random_data,
        })
    }

    /// Keys the borrowed cipher. Fails once the context has been cloned,
    /// since the cipher is then shared.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let cipher = self.cipher.as_mut().ok_or(CipherError::UseAfterClose)?;
        let alg = Arc::get_mut(cipher).ok_or(CipherError::InvalidArgument(
            "cannot re-key a cipher shared between contexts",
        ))?;
        alg.initialize(key)
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn block_size(&self) -> Result<usize, CipherError> {
        Ok(self.cipher()?.block_size())
    }

    pub fn is_closed(&self) -> bool {
        self.cipher.is_none()
    }

    /// Releases the cipher handle and zeroes the key-adjacent buffers. Every
    /// later call fails with `UseAfterClose`.
    pub fn close(&mut self) {
        if let Some(iv) = self.iv.as_mut() {
            iv.zeroize();
        }
        self.iv = None;
        self.random_data.zeroize();
        self.cipher = None;
    }

    fn cipher(&self) -> Result<&Arc<dyn BlockCipher + Send + Sync>, CipherError> {
        self.cipher.as_ref().ok_or(CipherError::UseAfterClose)
    }

    /// Mode state for the start of a stream: the IV for the chained modes,
    /// the random-data block for CTR and RandomDelta, nothing for ECB.
    pub fn initial_mode_state(&self) -> Result<ModeState, CipherError> {
        let cipher = self.cipher()?;
        let block_size = cipher.block_size();

        let mut state = match self.mode {
            CipherMode::ECB => ModeState::new(Vec::new()),
            CipherMode::CBC | CipherMode::PCBC | CipherMode::CFB | CipherMode::OFB => {
                let iv = self
                    .iv
                    .as_ref()
                    .ok_or(CipherError::InvalidArgument("mode requires an IV"))?;
                ModeState::new(iv.clone())
            }
            CipherMode::CTR | CipherMode::RandomDelta => {
                ModeState::new(self.random_data.clone())
            }
        };

        if self.mode == CipherMode::RandomDelta {
            state.delta = state.initial[block_size / 2..].to_vec();
        }

        Ok(state)
    }

    // ---- buffer operations -------------------------------------------------

    pub async fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt_buffer(data)
    }

    pub async fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.decrypt_buffer(data)
    }

    /// Runs `encrypt` into a caller-provided buffer. Returns `-1` without
    /// copying when the buffer is too small, else the byte count written.
    pub async fn encrypt_into(&self, data: &[u8], out: &mut [u8]) -> Result<isize, CipherError> {
        let produced = self.encrypt_buffer(data)?;
        if produced.len() > out.len() {
            return Ok(-1);
        }
        out[..produced.len()].copy_from_slice(&produced);
        Ok(produced.len() as isize)
    }

    pub async fn decrypt_into(&self, data: &[u8], out: &mut [u8]) -> Result<isize, CipherError> {
        let produced = self.decrypt_buffer(data)?;
        if produced.len() > out.len() {
            return Ok(-1);
        }
        out[..produced.len()].copy_from_slice(&produced);
        Ok(produced.len() as isize)
    }

    fn encrypt_buffer(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let cipher = self.cipher()?;
        if data.is_empty() {
            return Err(CipherError::InvalidArgument("plaintext must not be empty"));
        }

        let mut state = self.initial_mode_state()?;
        state.is_end = true;

        let block_size = cipher.block_size();
        let mut out = Vec::with_capacity(data.len() + 2 * block_size);
        if self.mode.has_prefix_block() {
            out.extend_from_slice(&cipher.encrypt_block(&state.initial)?);
        }
        out.extend_from_slice(&self.encrypt_chunk(data, &mut state)?);
        Ok(out)
    }

    fn decrypt_buffer(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let cipher = self.cipher()?;
        let block_size = cipher.block_size();
        if data.is_empty() || data.len() % block_size != 0 {
            return Err(CipherError::InvalidData(
                "ciphertext length must be a positive multiple of the block size",
            ));
        }

        let mut state = self.initial_mode_state()?;
        state.is_end = true;

        let payload = if self.mode.has_prefix_block() {
            let initial = cipher.decrypt_block(&data[..block_size])?;
            if self.mode == CipherMode::RandomDelta {
                state.delta = initial[block_size / 2..].to_vec();
            }
            state.initial = initial;
            &data[block_size..]
        } else {
            data
        };

        self.decrypt_chunk(payload, &mut state)
    }

    // ---- chunk operations --------------------------------------------------

    /// Encrypts one chunk of a stream, carrying the mode state forward.
    /// Padding is applied only when `state.is_end` is set; intermediate
    /// chunks must already be block-aligned.
    pub fn encrypt_chunk(
        &self,
        data: &[u8],
        state: &mut ModeState,
    ) -> Result<Vec<u8>, CipherError> {
        let cipher = self.cipher()?;
        let block_size = cipher.block_size();

        let padded;
        let input: &[u8] = if state.is_end {
            padded = self.padding.add_padding(data, block_size);
            &padded
        } else {
            if data.len() % block_size != 0 {
                return Err(CipherError::InvalidData(
                    "intermediate chunk is not block-aligned",
                ));
            }
            data
        };

        self.run_blocks(cipher, input, state, true)
    }

    /// Decrypts one chunk; depadding happens only on the final chunk.
    pub fn decrypt_chunk(
        &self,
        data: &[u8],
        state: &mut ModeState,
    ) -> Result<Vec<u8>, CipherError> {
        let cipher = self.cipher()?;
        let block_size = cipher.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::InvalidData(
                "ciphertext chunk is not block-aligned",
            ));
        }

        let output = self.run_blocks(cipher, data, state, false)?;
        if state.is_end {
            self.padding.remove_padding(&output, block_size)
        } else {
            Ok(output)
        }
    }

    fn run_blocks(
        &self,
        cipher: &Arc<dyn BlockCipher + Send + Sync>,
        data: &[u8],
        state: &mut ModeState,
        encrypt: bool,
    ) -> Result<Vec<u8>, CipherError> {
        let block_size = cipher.block_size();
        let mut out = Vec::with_capacity(data.len());

        match self.mode {
            CipherMode::ECB => {
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
                out = blocks.concat();
            }

            CipherMode::CTR => {
                // Keystream blocks are independent once the counter base is
                // known, so both directions dispatch across workers.
                let counter_base = state.initial.clone();
                let blocks: Vec<Vec<u8>> = data
                    .par_chunks(block_size)
                    .enumerate()
                    .map(|(index, block)| {
                        let mut counter = counter_base.clone();
                        counter_add_scalar(&mut counter, index);
                        let keystream = cipher.encrypt_block(&counter)?;
                        Ok(xor_blocks(block, &keystream))
                    })
                    .collect::<Result<_, CipherError>>()?;
                out = blocks.concat();
                counter_add_scalar(&mut state.initial, data.len() / block_size);
            }

            CipherMode::CBC => {
                let mut prev = state.initial.clone();
                for block in data.chunks(block_size) {
                    if encrypt {
                        let mixed = xor_blocks(block, &prev);
                        let encrypted = cipher.encrypt_block(&mixed)?;
                        prev.copy_from_slice(&encrypted);
                        out.extend_from_slice(&encrypted);
                    } else {
                        let decrypted = cipher.decrypt_block(block)?;
                        out.extend_from_slice(&xor_blocks(&decrypted, &prev));
                        prev.copy_from_slice(block);
                    }
                }
                state.initial = prev;
            }

            CipherMode::PCBC => {
                let mut prev = state.initial.clone();
                for block in data.chunks(block_size) {
                    if encrypt {
                        let mixed = xor_blocks(block, &prev);
                        let encrypted = cipher.encrypt_block(&mixed)?;
                        prev = xor_blocks(block, &encrypted);
                        out.extend_from_slice(&encrypted);
                    } else {
                        let decrypted = cipher.decrypt_block(block)?;
                        let plain = xor_blocks(&decrypted, &prev);
                        prev = xor_blocks(&plain, block);
                        out.extend_from_slice(&plain);
                    }
                }
                state.initial = prev;
            }

            CipherMode::CFB => {
                let mut shift = state.initial.clone();
                for block in data.chunks(block_size) {
                    let keystream = cipher.encrypt_block(&shift)?;
                    let mixed = xor_blocks(block, &keystream);
                    if encrypt {
                        shift.copy_from_slice(&mixed);
                        out.extend_from_slice(&mixed);
                    } else {
                        shift.copy_from_slice(block);
                        out.extend_from_slice(&mixed);
                    }
                }
                state.initial = shift;
            }

            CipherMode::OFB => {
                let mut feedback = state.initial.clone();
                for block in data.chunks(block_size) {
                    feedback = cipher.encrypt_block(&feedback)?;
                    out.extend_from_slice(&xor_blocks(block, &feedback));
                }
                state.initial = feedback;
            }

            CipherMode::RandomDelta => {
                // The running block masks only the leading half of each
                // block; the delta advances the numerically low half with
                // carry into the leading one.
                let half = block_size / 2;
                let mut running = state.initial.clone();
                for block in data.chunks(block_size) {
                    if encrypt {
                        let mut mixed = block.to_vec();
                        xor_in_place(&mut mixed[..half], &running[..half]);
                        out.extend_from_slice(&cipher.encrypt_block(&mixed)?);
                    } else {
                        let mut plain = cipher.decrypt_block(block)?;
                        xor_in_place(&mut plain[..half], &running[..half]);
                        out.extend_from_slice(&plain);
                    }
                    counter_add_vector(&mut running, &state.delta);
                }
                state.initial = running;
            }
        }

        Ok(out)
    }

    // ---- file streaming ----------------------------------------------------

    pub async fn encrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        chunk_size: usize,
    ) -> Result<(), CipherError> {
        self.run_file_task(input.as_ref(), output.as_ref(), chunk_size, true)
            .await
    }

    pub async fn decrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        chunk_size: usize,
    ) -> Result<(), CipherError> {
        self.run_file_task(input.as_ref(), output.as_ref(), chunk_size, false)
            .await
    }

    async fn run_file_task(
        &self,
        input: &Path,
        output: &Path,
        chunk_size: usize,
        encrypt: bool,
    ) -> Result<(), CipherError> {
        let this = self.clone();
        let input: PathBuf = input.to_path_buf();
        let output: PathBuf = output.to_path_buf();
        tokio::task::spawn_blocking(move || {
            this.stream_process(&input, &output, chunk_size, encrypt)
        })
        .await
        .map_err(|e| CipherError::Io(io::Error::other(e)))?
    }

    /// Drives fixed-size chunks through the chunk functions, reading one
    /// chunk ahead so the final chunk is known before it is processed.
    fn stream_process(
        &self,
        input: &Path,
        output: &Path,
        chunk_size: usize,
        encrypt: bool,
    ) -> Result<(), CipherError> {
        let cipher = self.cipher()?;
        let block_size = cipher.block_size();
        if chunk_size == 0 || chunk_size % block_size != 0 {
            return Err(CipherError::InvalidArgument(
                "chunk size must be a positive multiple of the block size",
            ));
        }

        debug!(
            "streaming {} {:?} -> {:?}, mode {:?}, chunk {}",
            if encrypt { "encrypt" } else { "decrypt" },
            input,
            output,
            self.mode,
            chunk_size
        );

        let mut reader = BufReader::new(File::open(input)?);
        let mut writer = BufWriter::new(File::create(output)?);
        let mut state = self.initial_mode_state()?;

        if self.mode.has_prefix_block() {
            if encrypt {
                writer.write_all(&cipher.encrypt_block(&state.initial)?)?;
            } else {
                let mut first = vec![0u8; block_size];
                if read_up_to(&mut reader, &mut first)? < block_size {
                    return Err(CipherError::InputTooShort);
                }
                let initial = cipher.decrypt_block(&first)?;
                if self.mode == CipherMode::RandomDelta {
                    state.delta = initial[block_size / 2..].to_vec();
                }
                state.initial = initial;
            }
        }

        let mut pending = vec![0u8; chunk_size];
        let mut pending_len = read_up_to(&mut reader, &mut pending)?;
        loop {
            let mut next = vec![0u8; chunk_size];
            let next_len = if pending_len < chunk_size {
                0
            } else {
                read_up_to(&mut reader, &mut next)?
            };
            state.is_end = next_len == 0;

            let processed = if encrypt {
                self.encrypt_chunk(&pending[..pending_len], &mut state)?
            } else {
                self.decrypt_chunk(&pending[..pending_len], &mut state)?
            };
            writer.write_all(&processed)?;

            if state.is_end {
                break;
            }
            pending = next;
            pending_len = next_len;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Drop for CipherContext {
    fn drop(&mut self) {
        if let Some(iv) = self.iv.as_mut() {
            iv.zeroize();
        }
        self.random_data.zeroize();
    }
}
