use bitvec::prelude::BitVec;

/// Bit and word primitives for fixed-width values. A value never knows its
/// own width, so every operation takes the width explicitly; bit 0 is the
/// most significant bit of the declared width.
pub fn bit(value: u64, n: usize, width: usize) -> u64 {
    debug_assert!(n < width && width <= 64);
    (value >> (width - n - 1)) & 1
}

/// Сдвигаем аккумулятор влево и дописываем поле справа.
pub fn append(acc: u64, field: u64, field_width: usize) -> u64 {
    (acc << field_width) | field
}

/// Splits an even-width value into its high and low halves.
pub fn split(value: u64, width: usize) -> (u64, u64) {
    debug_assert!(width % 2 == 0 && width <= 64);
    let half = width / 2;
    ((value >> half) & mask(half), value & mask(half))
}

pub fn concat(high: u64, low: u64, low_width: usize) -> u64 {
    (high << low_width) | low
}

pub fn mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Cyclic left rotation inside the low `width` bits of the value.
pub fn rotate_left_width(value: u64, width: usize, shift: usize) -> u64 {
    let shift = shift % width;
    if shift == 0 {
        return value & mask(width);
    }
    ((value << shift) | (value >> (width - shift))) & mask(width)
}

pub fn rotate_right_width(value: u64, width: usize, shift: usize) -> u64 {
    let shift = shift % width;
    if shift == 0 {
        return value & mask(width);
    }
    ((value >> shift) | (value << (width - shift))) & mask(width)
}

/// Big-endian byte slice to value, for slices of at most 8 bytes.
pub fn bytes_to_value(data: &[u8]) -> u64 {
    debug_assert!(data.len() <= 8);
    data.iter().fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}

/// Value back to big-endian bytes; `width` must be a whole number of bytes.
pub fn value_to_bytes(value: u64, width: usize) -> Vec<u8> {
    debug_assert!(width % 8 == 0 && width <= 64);
    (0..width / 8)
        .rev()
        .map(|i| (value >> (i * 8)) as u8)
        .collect()
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}
