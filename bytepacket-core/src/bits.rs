//! Bit-level read and write.
//!
//! Bits are numbered MSB-first: bit 0 of a byte is mask `0x80`, bit 7 is
//! mask `0x01`. A global bit index `b` into a slice addresses byte `b / 8`,
//! bit `b % 8`. The slice functions also take a byte offset that is added
//! before the global index is resolved.
//!
//! ```
//! use bytepacket_core::bits;
//!
//! let byte = 0b1100_1001;
//! assert!(bits::read_bit(byte, 1));
//! assert!(!bits::read_bit(byte, 3));
//! assert_eq!(bits::write_bit(byte, 3, true), 0b1101_1001);
//! ```

use crate::{FromBytes, Result, ToBytes, error::UnimplementedSnafu};

/// Byte with every bit set.
pub const FULL_BYTE: u8 = 0xFF;
/// Byte with only the most significant bit set.
pub const LAST_BIT_ON: u8 = 1 << 7;
/// Byte with only the least significant bit set.
pub const FIRST_BIT_ON: u8 = 1;
/// Bits per byte.
pub const BYTE_BITS: usize = 8;

#[inline]
fn mask(bit: usize) -> u8 {
    LAST_BIT_ON >> bit
}

#[inline]
fn apply(byte: u8, bit: usize, value: bool) -> u8 {
    if value { byte | mask(bit) } else { byte & !mask(bit) }
}

/// Test bit `bit` (0..8) of a single byte.
///
/// No modulo is applied: `bit` must already be an in-byte index.
#[inline]
pub fn read_bit(byte: u8, bit: usize) -> bool {
    byte & mask(bit) != 0
}

/// Return `byte` with bit `bit` (0..8) set or cleared. Other bits are kept.
#[inline]
#[must_use]
pub fn write_bit(byte: u8, bit: usize, value: bool) -> u8 {
    apply(byte, bit, value)
}

/// Test global bit `bit_index`, counted from byte `byte_offset` of `buf`.
///
/// # Panics
///
/// Panics if the addressed byte is outside `buf`.
#[inline]
pub fn read_bit_in(buf: &[u8], byte_offset: usize, bit_index: usize) -> bool {
    read_bit(buf[byte_offset + bit_index / BYTE_BITS], bit_index % BYTE_BITS)
}

/// Set or clear global bit `bit_index`, counted from byte `byte_offset`.
///
/// # Panics
///
/// Panics if the addressed byte is outside `buf`.
#[inline]
pub fn write_bit_in(buf: &mut [u8], byte_offset: usize, bit_index: usize, value: bool) {
    let index = byte_offset + bit_index / BYTE_BITS;
    buf[index] = apply(buf[index], bit_index % BYTE_BITS, value);
}

/// Read `len` consecutive bits starting at global bit `bit_start` (counted
/// from byte `byte_offset`) into `out[out_start..out_start + len]`.
///
/// ```
/// use bytepacket_core::bits::read_bits;
///
/// let buf = [0b0000_0011, 0b1000_0000];
/// let mut out = [false; 3];
/// read_bits(&buf, 0, 6, 3, &mut out, 0);
/// assert_eq!(out, [true, true, true]);
/// ```
pub fn read_bits(
    buf: &[u8],
    byte_offset: usize,
    bit_start: usize,
    len: usize,
    out: &mut [bool],
    out_start: usize,
) {
    let mut index = byte_offset + bit_start / BYTE_BITS;
    let mut bit = bit_start % BYTE_BITS;
    for slot in &mut out[out_start..out_start + len] {
        if bit == BYTE_BITS {
            bit = 0;
            index += 1;
        }
        *slot = read_bit(buf[index], bit);
        bit += 1;
    }
}

/// Write `input[input_start..input_start + len]` into `len` consecutive
/// bits starting at global bit `bit_start` (counted from byte
/// `byte_offset`). Bits outside the range are left untouched.
pub fn write_bits(
    buf: &mut [u8],
    byte_offset: usize,
    bit_start: usize,
    len: usize,
    input: &[bool],
    input_start: usize,
) {
    let mut index = byte_offset + bit_start / BYTE_BITS;
    let mut bit = bit_start % BYTE_BITS;
    for &value in &input[input_start..input_start + len] {
        if bit == BYTE_BITS {
            bit = 0;
            index += 1;
        }
        buf[index] = apply(buf[index], bit, value);
        bit += 1;
    }
}

/// Read bits `bit_start..bit_start + len` of a single byte into
/// `out[out_start..]`. The range must stay within the byte.
pub fn read_bits_in_byte(
    byte: u8,
    bit_start: usize,
    len: usize,
    out: &mut [bool],
    out_start: usize,
) {
    for (i, slot) in out[out_start..out_start + len].iter_mut().enumerate() {
        *slot = read_bit(byte, bit_start + i);
    }
}

/// Return `byte` with bits `bit_start..bit_start + len` replaced by
/// `input[input_start..]`. The range must stay within the byte.
#[must_use]
pub fn write_bits_in_byte(
    byte: u8,
    bit_start: usize,
    len: usize,
    input: &[bool],
    input_start: usize,
) -> u8 {
    input[input_start..input_start + len]
        .iter()
        .enumerate()
        .fold(byte, |acc, (i, &value)| apply(acc, bit_start + i, value))
}

/// Expand a value into one `bool` per bit.
///
/// Not implemented; always returns [`CodecError::Unimplemented`](crate::CodecError::Unimplemented).
pub fn transform_to_bits<T: ToBytes>(_value: &T, _out: &mut [bool]) -> Result<usize> {
    UnimplementedSnafu {
        operation: "transform_to_bits",
    }
    .fail()
}

/// Collapse one `bool` per bit back into a value.
///
/// Not implemented; always returns [`CodecError::Unimplemented`](crate::CodecError::Unimplemented).
pub fn transform_from_bits<T: FromBytes>(_bits: &[bool]) -> Result<T> {
    UnimplementedSnafu {
        operation: "transform_from_bits",
    }
    .fail()
}
