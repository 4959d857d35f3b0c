use bitvec::prelude::BitVec;

use crate::crypto::error::CipherError;
use crate::crypto::utils::{append, bit, bits_to_bytes, bytes_to_bits};

/// Whether a table may reference the same source bit more than once.
/// Expansion and key-selection tables do this on purpose; straight
/// permutations must not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplicates {
    Allowed,
    Forbidden,
}

/// A fixed bit-reordering table in the classical 1-indexed convention:
/// `output[i] = input[table[i] - 1]`. Validated once at construction and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    entries: Vec<usize>,
    input_width: usize,
}

impl PermutationTable {
    pub fn new(
        entries: &[usize],
        input_width: usize,
        duplicates: Duplicates,
    ) -> Result<Self, CipherError> {
        if entries.is_empty() {
            return Err(CipherError::Config("permutation table is empty".into()));
        }
        for &pos in entries {
            if pos == 0 || pos > input_width {
                return Err(CipherError::Config(format!(
                    "permutation entry {pos} outside [1, {input_width}]"
                )));
            }
        }
        if duplicates == Duplicates::Forbidden {
            let mut seen = vec![false; input_width];
            for &pos in entries {
                if seen[pos - 1] {
                    return Err(CipherError::Config(format!(
                        "duplicate entry {pos} in a duplicate-free table"
                    )));
                }
                seen[pos - 1] = true;
            }
        }
        Ok(Self {
            entries: entries.to_vec(),
            input_width,
        })
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.entries.len()
    }

    /// True when every source position is used exactly once, so the table
    /// merely reorders bits and is invertible.
    pub fn is_bijection(&self) -> bool {
        if self.entries.len() != self.input_width {
            return false;
        }
        let mut seen = vec![false; self.input_width];
        for &pos in &self.entries {
            if seen[pos - 1] {
                return false;
            }
            seen[pos - 1] = true;
        }
        true
    }

    /// Applies the table to an MSB-first bit view of `data`.
    pub fn apply(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.len() * 8 != self.input_width {
            return Err(CipherError::Length {
                expected: self.input_width / 8,
                actual: data.len(),
            });
        }
        let bits = bytes_to_bits(data);
        let mut permuted = BitVec::with_capacity(self.entries.len());
        for &pos in &self.entries {
            permuted.push(bits[pos - 1]);
        }
        Ok(bits_to_bytes(&permuted))
    }

    /// Fast path for values that fit in a machine word.
    pub fn apply_value(&self, value: u64) -> u64 {
        debug_assert!(self.input_width <= 64);
        self.entries.iter().fold(0u64, |acc, &pos| {
            append(acc, bit(value, pos - 1, self.input_width), 1)
        })
    }
}
