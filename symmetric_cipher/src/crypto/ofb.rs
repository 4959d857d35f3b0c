use std::sync::Arc;

use crate::crypto::cipher_traits::SymmetricCipherWithRounds;
use crate::crypto::error::CipherError;

/// Output Feedback mode: a self-feeding register turns the block cipher
/// into a synchronous stream cipher. The keystream depends only on the key
/// and the IV, so encryption and decryption are the same XOR and the
/// keystream can be produced ahead of the data. A register that falls out
/// of step with the peer cannot resynchronize itself.
pub struct OfbStream {
    algorithm: Arc<dyn SymmetricCipherWithRounds + Send + Sync>,
    register: Vec<u8>,
}

impl OfbStream {
    pub fn new(
        algorithm: Arc<dyn SymmetricCipherWithRounds + Send + Sync>,
        iv: &[u8],
    ) -> Result<Self, CipherError> {
        let block_size = algorithm.block_size();
        if iv.len() != block_size {
            return Err(CipherError::Length {
                expected: block_size,
                actual: iv.len(),
            });
        }
        log::debug!("ofb session opened, register width {block_size} bytes");
        Ok(Self {
            algorithm,
            register: iv.to_vec(),
        })
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// Advances the register once and returns the fresh keystream block.
    pub fn keystream_block(&mut self) -> Result<Vec<u8>, CipherError> {
        self.register = self.algorithm.encrypt_block(&self.register)?;
        Ok(self.register.clone())
    }

    /// XORs the keystream over `data`, one register step per block. Used
    /// for both directions. A final partial block consumes a full register
    /// step but only the leading bytes of its keystream block.
    pub fn apply(&mut self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.algorithm.block_size();
        let mut output = Vec::with_capacity(data.len());
        for chunk in data.chunks(block_size) {
            let keystream = self.keystream_block()?;
            output.extend(chunk.iter().zip(keystream.iter()).map(|(d, k)| d ^ k));
        }
        Ok(output)
    }
}
