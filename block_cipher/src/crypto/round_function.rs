/// Round-function capability consumed by the Feistel scaffold. Operates on
/// half-blocks; the scaffold owns the swap bookkeeping.
pub trait RoundFunction {
    fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Vec<u8>;

    /// Half-block size in bytes this function accepts.
    fn block_size(&self) -> usize;

    fn is_valid_block_size(&self, size: usize) -> bool {
        size == self.block_size()
    }

    fn is_valid_key_size(&self, size: usize) -> bool;
}
