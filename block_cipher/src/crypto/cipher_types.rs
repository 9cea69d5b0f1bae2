use zeroize::Zeroize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    RandomDelta,
}

impl CipherMode {
    /// Modes that run their own per-block state forward and therefore
    /// cannot be dispatched across workers.
    pub fn is_chained(self) -> bool {
        matches!(
            self,
            CipherMode::CBC
                | CipherMode::PCBC
                | CipherMode::CFB
                | CipherMode::OFB
                | CipherMode::RandomDelta
        )
    }

    /// Modes that prepend an encrypted state block to the ciphertext.
    pub fn has_prefix_block(self) -> bool {
        matches!(self, CipherMode::CTR | CipherMode::RandomDelta)
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

/// Per-stream continuation threaded through chunked processing.
///
/// `initial` carries whatever the mode chains between blocks: the previous
/// ciphertext block for CBC, the PCBC accumulator, the CFB shift register,
/// the OFB feedback, the CTR counter or the RandomDelta running block.
/// `delta` is only populated for RandomDelta (half a block). `is_end` marks
/// the final chunk of a stream; depadding is applied only then.
#[derive(Debug, Clone)]
pub struct ModeState {
    pub initial: Vec<u8>,
    pub delta: Vec<u8>,
    pub is_end: bool,
}

impl ModeState {
    pub fn new(initial: Vec<u8>) -> Self {
        Self {
            initial,
            delta: Vec::new(),
            is_end: false,
        }
    }
}

impl Drop for ModeState {
    fn drop(&mut self) {
        self.initial.zeroize();
        self.delta.zeroize();
    }
}
