use std::sync::Arc;

use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::des_key_expansion::DesKeyExpansion;
use symmetric_cipher::crypto::des_transformation::DesTransformation;
use symmetric_cipher::crypto::error::CipherError;

fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> Result<(), CipherError> {
    env_logger::init();

    let key = b"\x13\x34\x57\x79\x9B\xBC\xDF\xF1";
    let iv = b"\x01\x23\x45\x67\x89\xAB\xCD\xEF";
    let plaintext = "As armas e os baroes assinalados";

    let des = DES::new(
        Arc::new(DesKeyExpansion::new()?),
        Arc::new(DesTransformation::new()?),
    )?;
    let ctx = CipherContext::new(Box::new(des), key)?;

    let ciphertext = ctx.ofb_stream(iv)?.apply(plaintext.as_bytes())?;
    println!("plaintext:  {plaintext}");
    println!("ciphertext: {}", to_hex(&ciphertext));

    let decrypted = ctx.ofb_stream(iv)?.apply(&ciphertext)?;
    println!("decrypted:  {}", String::from_utf8_lossy(&decrypted));

    Ok(())
}
