use crate::crypto::error::CipherError;

pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

pub trait SymmetricCipherWithRounds: SymmetricCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn block_size(&self) -> usize;
}
