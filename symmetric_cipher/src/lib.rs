//! Generic symmetric block cipher building blocks (Feistel network,
//! key expansion, permutation tables) plus the DES cipher and the
//! OFB mode of operation.

pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds};
pub use crypto::error::CipherError;
pub use crypto::ofb::OfbStream;
