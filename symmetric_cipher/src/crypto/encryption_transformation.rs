use crate::crypto::error::CipherError;

pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError>;
}
