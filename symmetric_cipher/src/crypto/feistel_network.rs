use std::sync::Arc;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::utils::xor_bytes;

/// Drives N rounds of a keyed round function over a block split into two
/// halves. Halves swap after every round except the last one; without that
/// exception the same network could not undo itself with a reversed key
/// sequence.
pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    /// `round_keys` in encryption order.
    pub fn encrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        self.run_rounds(block, round_keys)
    }

    /// `round_keys` in decryption order, i.e. the reverse-direction
    /// sequence of the key schedule.
    pub fn decrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        self.run_rounds(block, round_keys)
    }

    fn run_rounds(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Result<Vec<u8>, CipherError> {
        if block.len() % 2 != 0 {
            return Err(CipherError::Config(format!(
                "block of {} bytes cannot split into equal halves",
                block.len()
            )));
        }
        if round_keys.len() != self.num_round {
            return Err(CipherError::Config(format!(
                "expected {} round keys, got {}",
                self.num_round,
                round_keys.len()
            )));
        }

        let (first, second) = block.split_at(block.len() / 2);
        let mut left = first.to_vec();
        let mut right = second.to_vec();

        for (index, round_key) in round_keys.iter().enumerate() {
            log::trace!("feistel round {index}");
            let feistel_out = self.transformation.transform(&right, round_key)?;
            let mixed = xor_bytes(&left, &feistel_out);
            if index + 1 == self.num_round {
                left = mixed;
            } else {
                left = right;
                right = mixed;
            }
        }

        Ok([left, right].concat())
    }
}
