//! Cursor-based read/write stream over a fixed-capacity byte buffer.

use alloc::{boxed::Box, string::String, vec, vec::Vec};

use bytepacket_core::{self as codec, FromBytes, Result, TextEncoding, ToBytes, copy, text};
use log::trace;

/// A fixed-capacity byte buffer with a movable cursor.
///
/// Every write encodes at [`seek`](Self::seek) and advances both the seek
/// and the logical length [`len`](Self::len) by the encoded width. Every
/// read decodes at the seek and advances only the seek. The `_at`
/// variants move the seek to the given offset first.
///
/// The length is caller bookkeeping: it is never compared with the seek or
/// the capacity, and reads never consult it.
///
/// Operations do not check capacity. Writing or reading past the end of the
/// buffer panics; use [`try_write`](Self::try_write) and
/// [`try_read`](Self::try_read) for a checked path.
///
/// # Example
///
/// ```
/// use bytepacket::Packet;
///
/// let mut packet = Packet::new(16);
/// packet.write(-2_500_000i32);
/// packet.write(3.14f32);
/// assert_eq!((packet.seek(), packet.len()), (8, 8));
///
/// packet.set_seek(0);
/// assert_eq!(packet.read_i32(), -2_500_000);
/// assert!((packet.read_f32() - 3.14).abs() < 0.0001);
/// assert_eq!(packet.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    data: Box<[u8]>,
    seek: usize,
    len: usize,
}

macro_rules! typed_reads {
    ($($name:ident, $name_at:ident => $ty:ty;)+) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "` at the seek.")]
            #[inline]
            pub fn $name(&mut self) -> $ty {
                self.read::<$ty>()
            }

            #[doc = concat!("Seek to `offset`, then read a `", stringify!($ty), "`.")]
            #[inline]
            pub fn $name_at(&mut self, offset: usize) -> $ty {
                self.read_at::<$ty>(offset)
            }
        )+
    };
}

impl Packet {
    /// Create a packet over a new zero-filled buffer of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            seek: 0,
            len: 0,
        }
    }

    /// Wrap an existing buffer.
    ///
    /// A `Box<[u8]>` is taken as is. A `Vec<u8>` with spare capacity is
    /// shrunk first, which may reallocate.
    ///
    /// The capacity is the buffer's length; seek and length start at zero.
    pub fn from_buffer(buf: impl Into<Box<[u8]>>) -> Self {
        let data = buf.into();
        trace!("wrapping {} byte buffer", data.len());
        Self {
            data,
            seek: 0,
            len: 0,
        }
    }

    /// Current read/write offset.
    #[inline]
    pub fn seek(&self) -> usize {
        self.seek
    }

    /// Move the cursor to `offset`.
    #[inline]
    pub fn set_seek(&mut self, offset: usize) {
        self.seek = offset;
    }

    /// Logical length: the total width of every write so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Overwrite the logical length.
    #[inline]
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// True when the logical length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the underlying buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes between the seek and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.seek)
    }

    /// Bytes between the seek and the logical length.
    #[inline]
    pub fn unread(&self) -> usize {
        self.len.saturating_sub(self.seek)
    }

    /// The whole buffer, regardless of seek or length.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The whole buffer, mutably. Seek and length are not touched.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give the buffer back.
    pub fn into_inner(self) -> Box<[u8]> {
        self.data
    }

    /// Zero the seek and the length. The buffer contents are kept.
    pub fn reset(&mut self) {
        trace!("reset packet at seek {} len {}", self.seek, self.len);
        self.seek = 0;
        self.len = 0;
    }

    #[inline]
    fn advance_written(&mut self, n: usize) {
        self.seek += n;
        self.len += n;
    }

    /// Write `value` at the seek.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit before the end of the buffer.
    #[inline]
    pub fn write<T: ToBytes>(&mut self, value: T) {
        value.write_bytes(&mut self.data, self.seek);
        self.advance_written(T::SIZE);
    }

    /// Seek to `offset`, then write `value`.
    #[inline]
    pub fn write_at<T: ToBytes>(&mut self, offset: usize, value: T) {
        self.seek = offset;
        self.write(value);
    }

    /// Read a `T` at the seek.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `T::SIZE` bytes remain in the buffer.
    #[inline]
    pub fn read<T: FromBytes>(&mut self) -> T {
        let value = T::read_bytes(&self.data, self.seek);
        self.seek += T::SIZE;
        value
    }

    /// Seek to `offset`, then read a `T`.
    #[inline]
    pub fn read_at<T: FromBytes>(&mut self, offset: usize) -> T {
        self.seek = offset;
        self.read()
    }

    /// Write `value` at the seek if it fits. On failure nothing changes.
    pub fn try_write<T: ToBytes>(&mut self, value: T) -> Result<()> {
        let n = codec::try_write(&mut self.data, self.seek, value)?;
        self.advance_written(n);
        Ok(())
    }

    /// Read a `T` at the seek if the buffer holds one. On failure nothing
    /// changes.
    ///
    /// Only the capacity is checked, not the logical length.
    pub fn try_read<T: FromBytes>(&mut self) -> Result<T> {
        let value = codec::try_read(&self.data, self.seek)?;
        self.seek += T::SIZE;
        Ok(value)
    }

    typed_reads! {
        read_u8, read_u8_at => u8;
        read_i8, read_i8_at => i8;
        read_bool, read_bool_at => bool;
        read_u16, read_u16_at => u16;
        read_i16, read_i16_at => i16;
        read_char, read_char_at => char;
        read_u32, read_u32_at => u32;
        read_i32, read_i32_at => i32;
        read_u64, read_u64_at => u64;
        read_i64, read_i64_at => i64;
        read_f32, read_f32_at => f32;
        read_f64, read_f64_at => f64;
    }

    /// Write length-prefixed text at the seek.
    pub fn write_str<E>(&mut self, value: &str, encoding: &E)
    where
        E: TextEncoding + ?Sized,
    {
        let n = text::write_str(&mut self.data, self.seek, value, encoding);
        self.advance_written(n);
    }

    /// Seek to `offset`, then write length-prefixed text.
    pub fn write_str_at<E>(&mut self, offset: usize, value: &str, encoding: &E)
    where
        E: TextEncoding + ?Sized,
    {
        self.seek = offset;
        self.write_str(value, encoding);
    }

    /// Write a length-prefixed character slice at the seek.
    pub fn write_chars<E>(&mut self, chars: &[char], encoding: &E)
    where
        E: TextEncoding + ?Sized,
    {
        let n = text::write_chars(&mut self.data, self.seek, chars, encoding);
        self.advance_written(n);
    }

    /// Seek to `offset`, then write a length-prefixed character slice.
    pub fn write_chars_at<E>(&mut self, offset: usize, chars: &[char], encoding: &E)
    where
        E: TextEncoding + ?Sized,
    {
        self.seek = offset;
        self.write_chars(chars, encoding);
    }

    /// Read length-prefixed text at the seek.
    pub fn read_string<E>(&mut self, encoding: &E) -> String
    where
        E: TextEncoding + ?Sized,
    {
        let (value, n) = text::read_string(&self.data, self.seek, encoding);
        self.seek += n;
        value
    }

    /// Seek to `offset`, then read length-prefixed text.
    pub fn read_string_at<E>(&mut self, offset: usize, encoding: &E) -> String
    where
        E: TextEncoding + ?Sized,
    {
        self.seek = offset;
        self.read_string(encoding)
    }

    /// Decode length-prefixed text at the seek into `out[out_offset..]`.
    ///
    /// Returns the number of characters produced. The seek advances by the
    /// bytes consumed.
    pub fn read_chars<E>(&mut self, out: &mut [char], out_offset: usize, encoding: &E) -> usize
    where
        E: TextEncoding + ?Sized,
    {
        let (bytes, chars) = text::read_chars(&self.data, self.seek, out, out_offset, encoding);
        self.seek += bytes;
        chars
    }

    /// Seek to `offset`, then decode length-prefixed text into
    /// `out[out_offset..]`.
    pub fn read_chars_at<E>(
        &mut self,
        offset: usize,
        out: &mut [char],
        out_offset: usize,
        encoding: &E,
    ) -> usize
    where
        E: TextEncoding + ?Sized,
    {
        self.seek = offset;
        self.read_chars(out, out_offset, encoding)
    }

    /// Copy `count` raw bytes from `src[src_offset..]` in at the seek.
    pub fn write_slice(&mut self, src: &[u8], src_offset: usize, count: usize) {
        copy(src, src_offset, &mut self.data[..], self.seek, count);
        self.advance_written(count);
    }

    /// Seek to `offset`, then copy raw bytes in.
    pub fn write_slice_at(&mut self, offset: usize, src: &[u8], src_offset: usize, count: usize) {
        self.seek = offset;
        self.write_slice(src, src_offset, count);
    }

    /// Copy `count` raw bytes from the seek out to `dst[dst_offset..]`.
    pub fn read_slice(&mut self, dst: &mut [u8], dst_offset: usize, count: usize) {
        copy(&self.data[..], self.seek, dst, dst_offset, count);
        self.seek += count;
    }

    /// Seek to `offset`, then copy raw bytes out.
    pub fn read_slice_at(
        &mut self,
        offset: usize,
        dst: &mut [u8],
        dst_offset: usize,
        count: usize,
    ) {
        self.seek = offset;
        self.read_slice(dst, dst_offset, count);
    }

    /// Copy `count` bytes from `other` at its seek into this packet at the
    /// seek.
    ///
    /// This packet's seek and length advance; `other`'s seek advances.
    pub fn write_from(&mut self, other: &mut Packet, count: usize) {
        self.write_slice(&other.data, other.seek, count);
        other.seek += count;
    }

    /// Position both packets, then [`write_from`](Self::write_from).
    pub fn write_from_at(
        &mut self,
        offset: usize,
        other: &mut Packet,
        other_offset: usize,
        count: usize,
    ) {
        self.seek = offset;
        other.seek = other_offset;
        self.write_from(other, count);
    }

    /// Copy `count` bytes from this packet at the seek into `other` at its
    /// seek.
    ///
    /// This packet's seek advances; `other`'s seek and length advance.
    pub fn read_into(&mut self, other: &mut Packet, count: usize) {
        self.read_slice(&mut other.data, other.seek, count);
        other.advance_written(count);
    }

    /// Position both packets, then [`read_into`](Self::read_into).
    pub fn read_into_at(
        &mut self,
        offset: usize,
        other: &mut Packet,
        other_offset: usize,
        count: usize,
    ) {
        self.seek = offset;
        other.seek = other_offset;
        self.read_into(other, count);
    }

    /// Move as many of `other`'s unread bytes as both packets allow.
    ///
    /// The count is the smallest of this packet's remaining capacity,
    /// `other`'s unread length and `other`'s remaining capacity. Returns
    /// the number of bytes copied. Either seek sitting past its capacity
    /// copies nothing.
    pub fn copy_from(&mut self, other: &mut Packet) -> usize {
        let count = self.remaining().min(other.unread()).min(other.remaining());
        if count == 0 {
            return 0;
        }
        trace!(
            "copying {count} bytes (dst seek {}, src seek {} len {})",
            self.seek, other.seek, other.len
        );
        self.write_from(other, count);
        count
    }
}

impl From<Vec<u8>> for Packet {
    fn from(buf: Vec<u8>) -> Self {
        Self::from_buffer(buf)
    }
}

impl From<Box<[u8]>> for Packet {
    fn from(buf: Box<[u8]>) -> Self {
        Self::from_buffer(buf)
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
