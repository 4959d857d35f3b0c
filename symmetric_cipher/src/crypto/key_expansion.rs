use crate::crypto::error::CipherError;

/// Derives the ordered round-key sequences from one master key.
///
/// The reverse sequence must contain exactly the forward keys in reverse
/// order. Schedules that can derive it independently (DES does, by rotating
/// right instead of left) override the default.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError>;

    fn generate_round_keys_reverse(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let mut round_keys = self.generate_round_keys(key)?;
        round_keys.reverse();
        Ok(round_keys)
    }
}
