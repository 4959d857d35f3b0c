use std::sync::Arc;

use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::permutation::{Duplicates, PermutationTable};

pub const DES_BLOCK_SIZE: usize = 8;
pub const DES_KEY_SIZE: usize = 8;
const DES_ROUNDS: usize = 16;

/// DES over 64-bit blocks: initial permutation, 16 Feistel rounds, final
/// permutation. The round-key sequences for both directions are computed
/// once in `set_key` and are read-only afterwards.
pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    initial_permutation: PermutationTable,
    final_permutation: PermutationTable,
    round_keys: Vec<Vec<u8>>,
    reverse_round_keys: Vec<Vec<u8>>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Result<Self, CipherError> {
        let initial_permutation = PermutationTable::new(&IP, 64, Duplicates::Forbidden)?;
        let final_permutation = PermutationTable::new(&FP, 64, Duplicates::Forbidden)?;
        if !initial_permutation.is_bijection() || !final_permutation.is_bijection() {
            return Err(CipherError::Config(
                "initial and final permutations must be bijections".into(),
            ));
        }

        Ok(DES {
            feistel_network: FeistelNetwork::new(DES_ROUNDS, transformation),
            key_expansion,
            initial_permutation,
            final_permutation,
            round_keys: Vec::new(),
            reverse_round_keys: Vec::new(),
        })
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::Length {
                expected: DES_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        if self.round_keys.is_empty() {
            return Err(CipherError::Config("key has not been set".into()));
        }
        Ok(())
    }

    fn encrypt_one(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let permuted = self.initial_permutation.apply(block)?;
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys)?;
        self.final_permutation.apply(&result)
    }

    fn decrypt_one(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let permuted = self.initial_permutation.apply(block)?;
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.reverse_round_keys)?;
        self.final_permutation.apply(&result)
    }
}

impl CipherAlgorithm for DES {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.len() % DES_BLOCK_SIZE != 0 {
            return Err(CipherError::Length {
                expected: data.len().next_multiple_of(DES_BLOCK_SIZE),
                actual: data.len(),
            });
        }
        let mut output = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(DES_BLOCK_SIZE) {
            output.extend(self.encrypt_one(chunk)?);
        }
        Ok(output)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.len() % DES_BLOCK_SIZE != 0 {
            return Err(CipherError::Length {
                expected: data.len().next_multiple_of(DES_BLOCK_SIZE),
                actual: data.len(),
            });
        }
        let mut output = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(DES_BLOCK_SIZE) {
            output.extend(self.decrypt_one(chunk)?);
        }
        Ok(output)
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != DES_KEY_SIZE {
            return Err(CipherError::Config(format!(
                "DES key must be {DES_KEY_SIZE} bytes, got {}",
                key.len()
            )));
        }

        let forward = self.key_expansion.generate_round_keys(key)?;
        let reverse = self.key_expansion.generate_round_keys_reverse(key)?;

        // The two derivations must describe the same key set or one of
        // them is wrong.
        let mut reversed_forward = forward.clone();
        reversed_forward.reverse();
        if reversed_forward != reverse {
            return Err(CipherError::InvariantViolation(
                "forward and reverse key schedules disagree",
            ));
        }

        self.round_keys = forward;
        self.reverse_round_keys = reverse;
        log::debug!("DES round keys derived for both directions");
        Ok(())
    }
}

impl SymmetricCipherWithRounds for DES {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt_one(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.decrypt_one(block)
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}
