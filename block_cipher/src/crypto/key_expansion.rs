use crate::crypto::errors::CipherError;

/// Key-expander capability consumed by the Feistel scaffold.
pub trait KeyExpansion {
    fn expand_key(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError>;

    /// Expansion with an explicit round count where the schedule supports it;
    /// the default truncates or rejects the plain expansion.
    fn expand_key_for_rounds(
        &self,
        key: &[u8],
        rounds: usize,
    ) -> Result<Vec<Vec<u8>>, CipherError> {
        let keys = self.expand_key(key)?;
        if keys.len() < rounds {
            return Err(CipherError::InvalidArgument(
                "key schedule cannot supply the requested round count",
            ));
        }
        Ok(keys.into_iter().take(rounds).collect())
    }

    fn is_valid_key_size(&self, size: usize) -> bool {
        self.supported_key_sizes().contains(&size)
    }

    fn supported_key_sizes(&self) -> Vec<usize>;

    /// Size in bytes of a single round key this expander produces.
    fn round_key_size(&self) -> usize;
}
