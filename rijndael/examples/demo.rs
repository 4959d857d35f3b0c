use rijndael::Rijndael;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::error::CipherError;

fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> Result<(), CipherError> {
    env_logger::init();

    let plaintext = "Que da ocidental praia Lusitana";
    let iv = [0x01u8, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
              0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

    for key_len in [16usize, 24, 32] {
        let key: Vec<u8> = (0..key_len as u8).collect();
        let ctx = CipherContext::new(Box::new(Rijndael::new()?), &key)?;

        let ciphertext = ctx.ofb_stream(&iv)?.apply(plaintext.as_bytes())?;
        let decrypted = ctx.ofb_stream(&iv)?.apply(&ciphertext)?;

        println!("AES-{} OFB", key_len * 8);
        println!("  ciphertext: {}", to_hex(&ciphertext));
        println!("  decrypted:  {}", String::from_utf8_lossy(&decrypted));
    }

    Ok(())
}
