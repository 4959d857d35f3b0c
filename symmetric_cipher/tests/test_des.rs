use std::sync::Arc;

use rand::RngCore;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::des_key_expansion::DesKeyExpansion;
use symmetric_cipher::crypto::des_transformation::DesTransformation;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

fn make_des() -> DES {
    DES::new(
        Arc::new(DesKeyExpansion::new().unwrap()),
        Arc::new(DesTransformation::new().unwrap()),
    )
    .unwrap()
}

#[test]
fn test_des_published_vector() {
    let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
    let plaintext = hex_literal::hex!("01 23 45 67 89 AB CD EF");
    let expected_ciphertext = hex_literal::hex!("85 E8 13 54 0F 0A B4 05");

    let mut des = make_des();
    des.set_key(&key).unwrap();

    let ciphertext = des.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext, expected_ciphertext);

    let decrypted = des.decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_des_first_round_key() {
    // The classic walkthrough value for K1 under key 133457799BBCDFF1.
    let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
    let expansion = DesKeyExpansion::new().unwrap();
    let round_keys = expansion.generate_round_keys(&key).unwrap();

    assert_eq!(round_keys.len(), 16);
    assert_eq!(round_keys[0], hex_literal::hex!("1B 02 EF FC 70 72"));
    assert!(round_keys.iter().all(|k| k.len() == 6));
}

#[test]
fn test_des_key_schedule_directions_agree() {
    let expansion = DesKeyExpansion::new().unwrap();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let mut key = [0u8; 8];
        rng.fill_bytes(&mut key);

        let forward = expansion.generate_round_keys(&key).unwrap();
        let reverse = expansion.generate_round_keys_reverse(&key).unwrap();

        let mut reversed_forward = forward.clone();
        reversed_forward.reverse();
        assert_eq!(reversed_forward, reverse);
    }
}

#[test]
fn test_des_round_trip_random_blocks() {
    let mut rng = rand::rng();

    for _ in 0..10 {
        let mut key = [0u8; 8];
        rng.fill_bytes(&mut key);

        let mut des = make_des();
        des.set_key(&key).unwrap();

        for _ in 0..100 {
            let mut block = [0u8; 8];
            rng.fill_bytes(&mut block);
            let decrypted = des.decrypt(&des.encrypt(&block).unwrap()).unwrap();
            assert_eq!(decrypted, block);
        }
    }
}

#[test]
fn test_des_rejects_bad_key_length() {
    let mut des = make_des();
    let result = des.set_key(b"short");
    assert!(matches!(result, Err(CipherError::Config(_))));
}

#[test]
fn test_des_rejects_bad_block_length() {
    let key = hex_literal::hex!("01 23 45 67 89 AB CD EF");
    let ctx = CipherContext::new(Box::new(make_des()), &key).unwrap();

    let result = ctx.encrypt_block(&[0u8; 7]);
    assert_eq!(
        result,
        Err(CipherError::Length {
            expected: 8,
            actual: 7
        })
    );
}

#[test]
fn test_des_requires_key_before_use() {
    let des = make_des();
    assert!(matches!(
        des.encrypt(&[0u8; 8]),
        Err(CipherError::Config(_))
    ));
}

#[test]
fn test_des_context_round_trip_check() {
    let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
    let ctx = CipherContext::new(Box::new(make_des()), &key).unwrap();

    let mut rng = rand::rng();
    for _ in 0..1000 {
        let mut block = [0u8; 8];
        rng.fill_bytes(&mut block);
        ctx.verify_round_trip(&block).unwrap();
    }
}
