mod macros;

use crate::{FromBytes, ToBytes};

// u8 implementation (special case - no endianness)
impl ToBytes for u8 {
    const SIZE: usize = 1;

    #[inline]
    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        buf[offset] = *self;
    }
}

impl FromBytes for u8 {
    const SIZE: usize = 1;

    #[inline]
    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        buf[offset]
    }
}

// i8 implementation (bit reinterpretation of u8)
impl ToBytes for i8 {
    const SIZE: usize = 1;

    #[inline]
    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        buf[offset] = *self as u8;
    }
}

impl FromBytes for i8 {
    const SIZE: usize = 1;

    #[inline]
    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        buf[offset] as i8
    }
}

impl ToBytes for bool {
    const SIZE: usize = 1;

    #[inline]
    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        buf[offset] = u8::from(*self);
    }
}

impl FromBytes for bool {
    const SIZE: usize = 1;

    /// Only a stored `1` is `true`; every other byte value reads as `false`.
    #[inline]
    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        buf[offset] == 1
    }
}

// char is a single UTF-16 code unit on the wire.
impl ToBytes for char {
    const SIZE: usize = 2;

    #[inline]
    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        let unit = u16::try_from(u32::from(*self)).unwrap_or(char::REPLACEMENT_CHARACTER as u16);
        unit.write_bytes(buf, offset);
    }
}

impl FromBytes for char {
    const SIZE: usize = 2;

    #[inline]
    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        let unit = u16::read_bytes(buf, offset);
        char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
