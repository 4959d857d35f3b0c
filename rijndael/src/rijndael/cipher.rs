use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};
use symmetric_cipher::crypto::error::CipherError;

use crate::gf::arithmetic::{gf_mul_table, xtime};
use crate::rijndael::key_schedule::expand_key;
use crate::rijndael::sbox::{inv_sbox, sbox, validate_inverse_boxes};

pub const AES_BLOCK_SIZE: usize = 16;

/// Column-major state: state[c][r] holds row r of column c.
type State = [[u8; 4]; 4];

fn block_to_state(block: &[u8]) -> State {
    let mut state = [[0u8; 4]; 4];
    for c in 0..4 {
        for r in 0..4 {
            state[c][r] = block[c * 4 + r];
        }
    }
    state
}

fn state_to_block(state: &State) -> Vec<u8> {
    let mut out = vec![0u8; AES_BLOCK_SIZE];
    for c in 0..4 {
        for r in 0..4 {
            out[c * 4 + r] = state[c][r];
        }
    }
    out
}

fn add_round_key(state: &mut State, round_key: &[u8]) {
    for c in 0..4 {
        for r in 0..4 {
            state[c][r] ^= round_key[c * 4 + r];
        }
    }
}

fn sub_bytes(state: &mut State) {
    for col in state.iter_mut() {
        for byte in col.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

fn inv_sub_bytes(state: &mut State) {
    for col in state.iter_mut() {
        for byte in col.iter_mut() {
            *byte = inv_sbox(*byte);
        }
    }
}

/// Row r rotates left by r positions.
fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut tmp = [0u8; 4];
        for c in 0..4 {
            tmp[c] = state[(c + r) % 4][r];
        }
        for c in 0..4 {
            state[c][r] = tmp[c];
        }
    }
}

fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut tmp = [0u8; 4];
        for c in 0..4 {
            tmp[c] = state[(c + 4 - r) % 4][r];
        }
        for c in 0..4 {
            state[c][r] = tmp[c];
        }
    }
}

/// Forward matrix {2,3,1,1} per column. The constants are small enough
/// that doubling plus XOR covers them without a field multiplication.
fn mix_columns(state: &mut State) {
    for col in state.iter_mut() {
        let a = *col;
        let xa = [xtime(a[0]), xtime(a[1]), xtime(a[2]), xtime(a[3])];
        col[0] = xa[0] ^ a[1] ^ xa[1] ^ a[2] ^ a[3];
        col[1] = a[0] ^ xa[1] ^ a[2] ^ xa[2] ^ a[3];
        col[2] = a[0] ^ a[1] ^ xa[2] ^ a[3] ^ xa[3];
        col[3] = a[0] ^ xa[0] ^ a[1] ^ a[2] ^ xa[3];
    }
}

/// Same layer through the generic field multiplication; must agree with
/// the doubling shortcut on every state.
fn mix_columns_generic(state: &mut State) {
    const MATRIX: [[u8; 4]; 4] = [
        [0x02, 0x03, 0x01, 0x01],
        [0x01, 0x02, 0x03, 0x01],
        [0x01, 0x01, 0x02, 0x03],
        [0x03, 0x01, 0x01, 0x02],
    ];
    for col in state.iter_mut() {
        let a = *col;
        for r in 0..4 {
            col[r] = gf_mul_table(a[0], MATRIX[r][0])
                ^ gf_mul_table(a[1], MATRIX[r][1])
                ^ gf_mul_table(a[2], MATRIX[r][2])
                ^ gf_mul_table(a[3], MATRIX[r][3]);
        }
    }
}

/// The inverse matrix constants {0e,0b,0d,09} need the full multiplication.
fn inv_mix_columns(state: &mut State) {
    for col in state.iter_mut() {
        let a = *col;
        col[0] = gf_mul_table(a[0], 0x0e)
            ^ gf_mul_table(a[1], 0x0b)
            ^ gf_mul_table(a[2], 0x0d)
            ^ gf_mul_table(a[3], 0x09);
        col[1] = gf_mul_table(a[0], 0x09)
            ^ gf_mul_table(a[1], 0x0e)
            ^ gf_mul_table(a[2], 0x0b)
            ^ gf_mul_table(a[3], 0x0d);
        col[2] = gf_mul_table(a[0], 0x0d)
            ^ gf_mul_table(a[1], 0x09)
            ^ gf_mul_table(a[2], 0x0e)
            ^ gf_mul_table(a[3], 0x0b);
        col[3] = gf_mul_table(a[0], 0x0b)
            ^ gf_mul_table(a[1], 0x0d)
            ^ gf_mul_table(a[2], 0x09)
            ^ gf_mul_table(a[3], 0x0e);
    }
}

fn encrypt_block_internal(block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
    let mut state = block_to_state(block);
    let rounds = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);
    for round in 1..rounds {
        log::trace!("spn round {round}");
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[round]);
    }
    // final round skips the column mix
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds]);

    state_to_block(&state)
}

fn decrypt_block_internal(block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
    let mut state = block_to_state(block);
    let rounds = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[rounds]);
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    for round in (1..rounds).rev() {
        add_round_key(&mut state, &round_keys[round]);
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }
    add_round_key(&mut state, &round_keys[0]);

    state_to_block(&state)
}

/// The SPN cipher over a fixed 128-bit block. Construction validates the
/// substitution tables once; `set_key` runs the word expansion once and
/// the instance is read-only afterwards.
pub struct Rijndael {
    round_keys: Vec<Vec<u8>>,
}

impl Rijndael {
    pub fn new() -> Result<Self, CipherError> {
        validate_inverse_boxes()?;
        Ok(Self {
            round_keys: Vec::new(),
        })
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if block.len() != AES_BLOCK_SIZE {
            return Err(CipherError::Length {
                expected: AES_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        if self.round_keys.is_empty() {
            return Err(CipherError::Config("key has not been set".into()));
        }
        Ok(())
    }
}

impl CipherAlgorithm for Rijndael {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.len() % AES_BLOCK_SIZE != 0 {
            return Err(CipherError::Length {
                expected: data.len().next_multiple_of(AES_BLOCK_SIZE),
                actual: data.len(),
            });
        }
        let mut output = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(AES_BLOCK_SIZE) {
            output.extend(self.encrypt_block(chunk)?);
        }
        Ok(output)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.len() % AES_BLOCK_SIZE != 0 {
            return Err(CipherError::Length {
                expected: data.len().next_multiple_of(AES_BLOCK_SIZE),
                actual: data.len(),
            });
        }
        let mut output = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(AES_BLOCK_SIZE) {
            output.extend(self.decrypt_block(chunk)?);
        }
        Ok(output)
    }
}

impl SymmetricCipher for Rijndael {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.round_keys = expand_key(key)?;
        log::debug!("rijndael expanded {} round keys", self.round_keys.len());
        Ok(())
    }
}

impl SymmetricCipherWithRounds for Rijndael {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        Ok(encrypt_block_internal(block, &self.round_keys))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        Ok(decrypt_block_internal(block, &self.round_keys))
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }
}
