use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::permutation::{Duplicates, PermutationTable};
use crate::crypto::utils::{append, bit, bytes_to_value, value_to_bytes, xor_bytes};

/// The DES f-function: expand the 32-bit half to 48 bits, mix in the round
/// key, reduce back to 32 bits through the eight S-boxes, then diffuse with
/// the P permutation.
pub struct DesTransformation {
    expansion: PermutationTable,
    diffusion: PermutationTable,
}

impl DesTransformation {
    pub fn new() -> Result<Self, CipherError> {
        let expansion = PermutationTable::new(&E, 32, Duplicates::Allowed)?;
        let diffusion = PermutationTable::new(&P, 32, Duplicates::Forbidden)?;
        if !diffusion.is_bijection() {
            return Err(CipherError::Config(
                "P permutation must be a bijection".into(),
            ));
        }
        Ok(Self {
            expansion,
            diffusion,
        })
    }

    /// Eight 6-bit groups in, eight 4-bit S-box entries out. The outer two
    /// bits of a group pick the row, the inner four the column.
    fn substitute(keyed: u64) -> u64 {
        let mut acc = 0u64;
        for (box_index, sbox) in S_BOXES.iter().enumerate() {
            let group = (keyed >> (48 - 6 * (box_index + 1))) & 0x3f;
            let row = append(bit(group, 0, 6), bit(group, 5, 6), 1) as usize;
            let col = ((group >> 1) & 0xf) as usize;
            acc = append(acc, sbox[row][col] as u64, 4);
        }
        acc
    }
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        let expanded = self.expansion.apply(input_block)?;
        if round_key.len() != expanded.len() {
            return Err(CipherError::Length {
                expected: expanded.len(),
                actual: round_key.len(),
            });
        }

        let keyed = bytes_to_value(&xor_bytes(&expanded, round_key));
        let substituted = Self::substitute(keyed);
        Ok(value_to_bytes(self.diffusion.apply_value(substituted), 32))
    }
}
