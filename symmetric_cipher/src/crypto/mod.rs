pub mod cipher_context;
pub mod cipher_traits;
pub mod des;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod ofb;
pub mod permutation;
pub mod utils;

use std::sync::Arc;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;

impl KeyExpansion for Arc<dyn KeyExpansion> {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        (**self).generate_round_keys(key)
    }

    fn generate_round_keys_reverse(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        (**self).generate_round_keys_reverse(key)
    }
}

impl EncryptionTransformation for Arc<dyn EncryptionTransformation> {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).transform(input_block, round_key)
    }
}
