use std::sync::Arc;

use crate::crypto::cipher_traits::SymmetricCipherWithRounds;
use crate::crypto::error::CipherError;
use crate::crypto::ofb::OfbStream;

/// An immutable bundle of a keyed cipher. Construction runs the key
/// schedule exactly once; afterwards the context is read-only and can be
/// shared across sessions, each of which owns its own OFB register.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn SymmetricCipherWithRounds + Send + Sync>,
}

impl CipherContext {
    pub fn new(
        mut algorithm: Box<dyn SymmetricCipherWithRounds + Send + Sync>,
        key: &[u8],
    ) -> Result<Self, CipherError> {
        algorithm.set_key(key)?;
        log::debug!(
            "cipher context constructed, block size {} bytes",
            algorithm.block_size()
        );
        Ok(Self {
            algorithm: Arc::from(algorithm),
        })
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_width(block)?;
        self.algorithm.encrypt_block(block)
    }

    pub fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_width(block)?;
        self.algorithm.decrypt_block(block)
    }

    /// Opens an OFB streaming session seeded with `iv`, which must be
    /// exactly one block wide.
    pub fn ofb_stream(&self, iv: &[u8]) -> Result<OfbStream, CipherError> {
        OfbStream::new(self.algorithm.clone(), iv)
    }

    /// Checks `decrypt(encrypt(block)) == block` for one block. Meant for
    /// test suites; a failure means the cipher pair is algebraically
    /// broken, not that the input was bad.
    pub fn verify_round_trip(&self, block: &[u8]) -> Result<(), CipherError> {
        let decrypted = self.decrypt_block(&self.encrypt_block(block)?)?;
        if decrypted != block {
            return Err(CipherError::InvariantViolation(
                "decrypt(encrypt(x)) did not return x",
            ));
        }
        Ok(())
    }

    fn check_width(&self, block: &[u8]) -> Result<(), CipherError> {
        let expected = self.algorithm.block_size();
        if block.len() != expected {
            return Err(CipherError::Length {
                expected,
                actual: block.len(),
            });
        }
        Ok(())
    }
}
