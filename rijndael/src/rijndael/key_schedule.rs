use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

use crate::rijndael::sbox::sbox;

/// Round constants for the first byte of every Nk-th word. Only the first
/// few are reached for the longer key widths.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Columns in the state; fixed at four for the 128-bit block.
pub const NB: usize = 4;

pub fn rounds_for_key_len(len: usize) -> Result<usize, CipherError> {
    match len {
        16 => Ok(10),
        24 => Ok(12),
        32 => Ok(14),
        other => Err(CipherError::Config(format!(
            "AES key must be 16, 24 or 32 bytes, got {other}"
        ))),
    }
}

/// Word-based key expansion: every Nk-th word is rotated, substituted and
/// folded with a round constant; words in between XOR the word Nk back
/// with the previous one. Returns the rounds + 1 sixteen-byte round keys.
pub fn expand_key(key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
    let rounds = rounds_for_key_len(key.len())?;
    let nk = key.len() / 4;

    let mut words: Vec<[u8; 4]> = key
        .chunks_exact(4)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect();
    words.reserve(NB * (rounds + 1) - nk);

    for i in nk..NB * (rounds + 1) {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = sbox(*byte);
            }
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            // 256-bit keys substitute one extra time mid-stride
            for byte in temp.iter_mut() {
                *byte = sbox(*byte);
            }
        }
        let prev = words[i - nk];
        words.push([
            prev[0] ^ temp[0],
            prev[1] ^ temp[1],
            prev[2] ^ temp[2],
            prev[3] ^ temp[3],
        ]);
    }

    Ok(words.chunks_exact(NB).map(|quad| quad.concat()).collect())
}

/// Adapter onto the shared key-expansion trait; the reverse direction is
/// the same keys read backwards.
pub struct AesKeyExpansion;

impl KeyExpansion for AesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        expand_key(key)
    }
}
