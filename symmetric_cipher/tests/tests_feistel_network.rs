use std::sync::Arc;

use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::feistel_network::FeistelNetwork;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

struct MockKeyExpansion;
impl KeyExpansion for MockKeyExpansion {
    fn generate_round_keys(&self, _key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        Ok(vec![vec![0x11; 4], vec![0x22; 4], vec![0x33; 4]])
    }
}

struct MockTransformation;
impl EncryptionTransformation for MockTransformation {
    fn transform(&self, block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(block
            .iter()
            .zip(round_key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect())
    }
}

#[test]
fn test_feistel_encrypt_decrypt_roundtrip() {
    let network = FeistelNetwork::new(3, Arc::new(MockTransformation));

    let round_keys = MockKeyExpansion.generate_round_keys(b"dummykey").unwrap();
    let reverse_keys = MockKeyExpansion
        .generate_round_keys_reverse(b"dummykey")
        .unwrap();

    let block = b"\x12\x34\x56\x78\x9A\xBC\xDE\xF0";
    let encrypted = network.encrypt_with_round_keys(block, &round_keys).unwrap();
    let decrypted = network
        .decrypt_with_round_keys(&encrypted, &reverse_keys)
        .unwrap();

    assert_ne!(encrypted, block);
    assert_eq!(decrypted, block);
}

#[test]
fn test_feistel_preserves_block_size() {
    let network = FeistelNetwork::new(3, Arc::new(MockTransformation));
    let round_keys = MockKeyExpansion.generate_round_keys(b"dummykey").unwrap();

    let block = b"\x00\x11\x22\x33\x44\x55\x66\x77";
    let encrypted = network.encrypt_with_round_keys(block, &round_keys).unwrap();
    assert_eq!(encrypted.len(), block.len());
}

#[test]
fn test_feistel_rejects_odd_block() {
    let network = FeistelNetwork::new(3, Arc::new(MockTransformation));
    let round_keys = MockKeyExpansion.generate_round_keys(b"dummykey").unwrap();

    let result = network.encrypt_with_round_keys(&[0u8; 7], &round_keys);
    assert!(matches!(result, Err(CipherError::Config(_))));
}

#[test]
fn test_feistel_rejects_wrong_round_key_count() {
    let network = FeistelNetwork::new(4, Arc::new(MockTransformation));
    let round_keys = MockKeyExpansion.generate_round_keys(b"dummykey").unwrap();

    let result = network.encrypt_with_round_keys(&[0u8; 8], &round_keys);
    assert!(matches!(result, Err(CipherError::Config(_))));
}

#[test]
fn test_default_reverse_is_reversed_forward() {
    let forward = MockKeyExpansion.generate_round_keys(b"k").unwrap();
    let reverse = MockKeyExpansion.generate_round_keys_reverse(b"k").unwrap();

    let mut reversed = forward.clone();
    reversed.reverse();
    assert_eq!(reversed, reverse);
}
