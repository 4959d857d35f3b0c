use bitvec::prelude::BitVec;

use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::permutation::{Duplicates, PermutationTable};
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits};

/// Per-round rotation amounts. Rounds 1, 2, 9 and 16 rotate by a single
/// bit, the rest by two; the total comes to 28, a full turn of each half.
const SHIFT_BITS: [usize; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

pub struct DesKeyExpansion {
    pc1: PermutationTable,
    pc2: PermutationTable,
}

impl DesKeyExpansion {
    pub fn new() -> Result<Self, CipherError> {
        Ok(Self {
            // PC-1 отбрасывает биты чётности: 64 бита -> 56
            pc1: PermutationTable::new(&PC1, 64, Duplicates::Forbidden)?,
            // PC-2 выбирает 48 из 56 бит
            pc2: PermutationTable::new(&PC2, 56, Duplicates::Forbidden)?,
        })
    }

    /// PC-1, then split into the C and D halves of 28 bits each.
    fn halves(&self, key: &[u8]) -> Result<(BitVec, BitVec), CipherError> {
        if key.len() != 8 {
            return Err(CipherError::Config(format!(
                "DES key must be 8 bytes, got {}",
                key.len()
            )));
        }
        let stripped = self.pc1.apply(key)?;
        let bits = bytes_to_bits(&stripped);
        let c = bits.iter().by_vals().take(28).collect::<BitVec>();
        let d = bits.iter().by_vals().skip(28).take(28).collect::<BitVec>();
        Ok((c, d))
    }

    /// Merge the halves and run PC-2 to get one 48-bit round key.
    fn round_key(&self, c: &BitVec, d: &BitVec) -> Result<Vec<u8>, CipherError> {
        let mut cd = BitVec::with_capacity(56);
        cd.extend(c.iter().by_vals());
        cd.extend(d.iter().by_vals());
        self.pc2.apply(&bits_to_bytes(&cd))
    }
}

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let (mut c, mut d) = self.halves(key)?;

        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            c.rotate_left(shift);
            d.rotate_left(shift);
            round_keys.push(self.round_key(&c, &d)?);
        }
        Ok(round_keys)
    }

    /// Independent derivation of the decryption sequence: the first round
    /// leaves the halves unrotated, afterwards the same shift table applies
    /// as right rotations. The result must equal the forward sequence read
    /// backwards.
    fn generate_round_keys_reverse(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let (mut c, mut d) = self.halves(key)?;

        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for (index, &shift) in SHIFT_BITS.iter().enumerate() {
            if index > 0 {
                c.rotate_right(shift);
                d.rotate_right(shift);
            }
            round_keys.push(self.round_key(&c, &d)?);
        }
        Ok(round_keys)
    }
}
