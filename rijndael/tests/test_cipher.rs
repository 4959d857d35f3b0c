use rand::RngCore;
use rijndael::Rijndael;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::error::CipherError;

fn keyed(key: &[u8]) -> Rijndael {
    let mut cipher = Rijndael::new().unwrap();
    cipher.set_key(key).unwrap();
    cipher
}

const PLAINTEXT: [u8; 16] = hex_literal::hex!("00112233445566778899aabbccddeeff");

#[test]
fn test_fips_vector_128() {
    let cipher = keyed(&hex_literal::hex!("000102030405060708090a0b0c0d0e0f"));
    let ciphertext = cipher.encrypt(&PLAINTEXT).unwrap();
    assert_eq!(
        ciphertext,
        hex_literal::hex!("69c4e0d86a7b0430d8cdb78070b4c55a")
    );
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), PLAINTEXT);
}

#[test]
fn test_fips_vector_192() {
    let cipher = keyed(&hex_literal::hex!(
        "000102030405060708090a0b0c0d0e0f1011121314151617"
    ));
    let ciphertext = cipher.encrypt(&PLAINTEXT).unwrap();
    assert_eq!(
        ciphertext,
        hex_literal::hex!("dda97ca4864cdfe06eaf70a0ec0d7191")
    );
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), PLAINTEXT);
}

#[test]
fn test_fips_vector_256() {
    let cipher = keyed(&hex_literal::hex!(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
    ));
    let ciphertext = cipher.encrypt(&PLAINTEXT).unwrap();
    assert_eq!(
        ciphertext,
        hex_literal::hex!("8ea2b7ca516745bfeafc49904b496089")
    );
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), PLAINTEXT);
}

#[test]
fn test_round_trip_random_blocks_all_key_widths() {
    let mut rng = rand::rng();

    for key_len in [16usize, 24, 32] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        let ctx = CipherContext::new(Box::new(Rijndael::new().unwrap()), &key).unwrap();

        for _ in 0..1000 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            ctx.verify_round_trip(&block).unwrap();
        }
    }
}

#[test]
fn test_rejects_bad_key_width_at_construction() {
    let result = CipherContext::new(Box::new(Rijndael::new().unwrap()), &[0u8; 15]);
    assert!(matches!(result, Err(CipherError::Config(_))));
}

#[test]
fn test_rejects_bad_block_width_per_call() {
    let ctx = CipherContext::new(Box::new(Rijndael::new().unwrap()), &[0u8; 16]).unwrap();
    assert_eq!(
        ctx.encrypt_block(&[0u8; 8]),
        Err(CipherError::Length {
            expected: 16,
            actual: 8
        })
    );
}

#[test]
fn test_ofb_known_answer() {
    // key schedule and OFB chained: S1 = E(IV), ct = S1 xor pt
    let key = hex_literal::hex!("000102030405060708090a0b0c0d0e0f");
    let iv = hex_literal::hex!("0123456789abcdef0123456789abcdef");
    let ctx = CipherContext::new(Box::new(Rijndael::new().unwrap()), &key).unwrap();

    let ciphertext = ctx.ofb_stream(&iv).unwrap().apply(&PLAINTEXT).unwrap();
    assert_eq!(
        ciphertext,
        hex_literal::hex!("306052bcb971745513bfdd0193c1bc2d")
    );
}

#[test]
fn test_ofb_text_round_trip() {
    let key = hex_literal::hex!("000102030405060708090a0b0c0d0e0f");
    let iv = hex_literal::hex!("0123456789abcdef0123456789abcdef");
    let ctx = CipherContext::new(Box::new(Rijndael::new().unwrap()), &key).unwrap();

    let plaintext = b"Vos, tenro e novo ramo florescente".as_slice();
    let ciphertext = ctx.ofb_stream(&iv).unwrap().apply(plaintext).unwrap();
    assert_eq!(ciphertext.len(), plaintext.len());

    let decrypted = ctx.ofb_stream(&iv).unwrap().apply(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_ofb_deterministic_per_iv() {
    let key = hex_literal::hex!("000102030405060708090a0b0c0d0e0f");
    let iv_a = [0x11u8; 16];
    let iv_b = [0x22u8; 16];
    let ctx = CipherContext::new(Box::new(Rijndael::new().unwrap()), &key).unwrap();

    let first = ctx.ofb_stream(&iv_a).unwrap().apply(&PLAINTEXT).unwrap();
    let second = ctx.ofb_stream(&iv_a).unwrap().apply(&PLAINTEXT).unwrap();
    let other = ctx.ofb_stream(&iv_b).unwrap().apply(&PLAINTEXT).unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
}
