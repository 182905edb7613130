//! Free functions over [`ToBytes`] / [`FromBytes`].

use snafu::ensure;

use crate::{
    FromBytes, Result, ToBytes,
    error::{BufferTooSmallSnafu, UnexpectedEofSnafu},
};

/// Write `value` at `buf[offset..]`, returning the number of bytes written.
///
/// # Panics
///
/// Panics if the value does not fit between `offset` and the end of `buf`.
#[inline]
pub fn write<T: ToBytes>(buf: &mut [u8], offset: usize, value: T) -> usize {
    value.write_bytes(buf, offset);
    T::SIZE
}

/// Read a `T` from `buf[offset..]`.
///
/// # Panics
///
/// Panics if `buf` holds fewer than `T::SIZE` bytes after `offset`.
#[inline]
pub fn read<T: FromBytes>(buf: &[u8], offset: usize) -> T {
    T::read_bytes(buf, offset)
}

/// Checked [`write`]: fails instead of panicking when the value does not fit.
///
/// ```
/// use bytepacket_core::{CodecError, try_write};
///
/// let mut buf = [0u8; 6];
/// assert_eq!(try_write(&mut buf, 0, 1u32), Ok(4));
/// assert_eq!(
///     try_write(&mut buf, 4, 1u32),
///     Err(CodecError::BufferTooSmall { needed: 4, available: 2 }),
/// );
/// ```
pub fn try_write<T: ToBytes>(buf: &mut [u8], offset: usize, value: T) -> Result<usize> {
    let available = buf.len().saturating_sub(offset);
    ensure!(
        T::SIZE <= available,
        BufferTooSmallSnafu {
            needed: T::SIZE,
            available,
        }
    );
    Ok(write(buf, offset, value))
}

/// Checked [`read`]: fails instead of panicking when `buf` is too short.
pub fn try_read<T: FromBytes>(buf: &[u8], offset: usize) -> Result<T> {
    let available = buf.len().saturating_sub(offset);
    ensure!(
        T::SIZE <= available,
        UnexpectedEofSnafu {
            needed: T::SIZE,
            available,
        }
    );
    Ok(read(buf, offset))
}

macro_rules! typed_readers {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Read a little-endian `", stringify!($ty), "` at `buf[offset..]`.")]
            #[inline]
            pub fn $name(buf: &[u8], offset: usize) -> $ty {
                read::<$ty>(buf, offset)
            }
        )+
    };
}

typed_readers! {
    read_u8 => u8,
    read_i8 => i8,
    read_u16 => u16,
    read_i16 => i16,
    read_char => char,
    read_u32 => u32,
    read_i32 => i32,
    read_u64 => u64,
    read_i64 => i64,
    read_f32 => f32,
    read_f64 => f64,
}

/// Read a boolean at `buf[offset]`.
///
/// Only a stored `1` reads as `true`. Any other byte, not just `0`, is
/// `false`.
#[inline]
pub fn read_bool(buf: &[u8], offset: usize) -> bool {
    read::<bool>(buf, offset)
}
