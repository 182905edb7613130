//! Length-prefixed text.
//!
//! Text is stored as an `i32` little-endian byte count followed by that
//! many encoded bytes. The count is whatever the [`TextEncoding`] produced,
//! never a character count.
//!
//! ```
//! use bytepacket_core::text::{Utf16Le, read_string, write_str};
//!
//! let mut buf = [0u8; 16];
//! assert_eq!(write_str(&mut buf, 2, "hé", &Utf16Le), 8);
//! assert_eq!(&buf[2..6], &[4, 0, 0, 0]);
//! assert_eq!(read_string(&buf, 2, &Utf16Le), ("hé".into(), 8));
//! ```

mod encoding;

use alloc::string::String;

pub use encoding::{Ascii, TextEncoding, Utf8, Utf16Le};

use crate::{read_i32, write};

/// Width of the byte-count prefix.
pub const PREFIX_LEN: usize = core::mem::size_of::<i32>();

/// Stored byte count at `offset`. A negative count maps to `usize::MAX` so
/// the slice that follows fails its bounds check.
#[inline]
fn stored_len(buf: &[u8], offset: usize) -> usize {
    usize::try_from(read_i32(buf, offset)).unwrap_or(usize::MAX)
}

/// Prefix value for `n` encoded bytes.
///
/// # Panics
///
/// Panics if `n` does not fit the `i32` prefix.
#[inline]
pub(crate) fn prefix_for(n: usize) -> i32 {
    match i32::try_from(n) {
        Ok(n) => n,
        Err(_) => panic!("{n} encoded bytes overflow the i32 length prefix"),
    }
}

/// Encode `text` at `offset`, returning `PREFIX_LEN + encoded bytes`.
///
/// # Panics
///
/// Panics if the prefix or the encoded bytes do not fit in `buf`, or if
/// the encoded length exceeds `i32::MAX`.
pub fn write_str<E>(buf: &mut [u8], offset: usize, text: &str, encoding: &E) -> usize
where
    E: TextEncoding + ?Sized,
{
    let n = encoding.encode(text, &mut buf[offset + PREFIX_LEN..]);
    write(buf, offset, prefix_for(n));
    PREFIX_LEN + n
}

/// Encode a character slice at `offset`, returning `PREFIX_LEN + encoded
/// bytes`.
///
/// # Panics
///
/// Panics if the prefix or the encoded bytes do not fit in `buf`, or if
/// the encoded length exceeds `i32::MAX`.
pub fn write_chars<E>(buf: &mut [u8], offset: usize, chars: &[char], encoding: &E) -> usize
where
    E: TextEncoding + ?Sized,
{
    let n = encoding.encode_chars(chars, &mut buf[offset + PREFIX_LEN..]);
    write(buf, offset, prefix_for(n));
    PREFIX_LEN + n
}

/// Decode the text stored at `offset`.
///
/// Returns the text and the bytes consumed, prefix included.
///
/// # Panics
///
/// Panics if the stored count is negative or runs past the end of `buf`.
pub fn read_string<E>(buf: &[u8], offset: usize, encoding: &E) -> (String, usize)
where
    E: TextEncoding + ?Sized,
{
    let n = stored_len(buf, offset);
    let text = encoding.decode(&buf[offset + PREFIX_LEN..][..n]);
    (text, PREFIX_LEN + n)
}

/// Decode the text stored at `offset` into `out[out_offset..]`.
///
/// Returns `(bytes consumed, characters produced)`.
///
/// # Panics
///
/// Panics if the stored count is out of range or `out` is too short.
pub fn read_chars<E>(
    buf: &[u8],
    offset: usize,
    out: &mut [char],
    out_offset: usize,
    encoding: &E,
) -> (usize, usize)
where
    E: TextEncoding + ?Sized,
{
    let n = stored_len(buf, offset);
    let chars = encoding.decode_into(&buf[offset + PREFIX_LEN..][..n], &mut out[out_offset..]);
    (PREFIX_LEN + n, chars)
}
