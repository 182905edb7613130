//! Fixed-width encoding traits.

/// Encode a value into a fixed number of little-endian bytes.
///
/// # Example
///
/// ```
/// use bytepacket_core::ToBytes;
///
/// let mut buf = [0u8; 6];
/// 0x0102_0304u32.write_bytes(&mut buf, 2);
/// assert_eq!(buf, [0, 0, 4, 3, 2, 1]);
/// ```
pub trait ToBytes {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Write exactly [`SIZE`](Self::SIZE) bytes at `buf[offset..]`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + SIZE` exceeds `buf.len()`.
    fn write_bytes(&self, buf: &mut [u8], offset: usize);
}

/// Decode a value from a fixed number of little-endian bytes.
///
/// # Example
///
/// ```
/// use bytepacket_core::FromBytes;
///
/// let buf = [0, 0, 4, 3, 2, 1];
/// assert_eq!(u32::read_bytes(&buf, 2), 0x0102_0304);
/// ```
pub trait FromBytes: Sized {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Read exactly [`SIZE`](Self::SIZE) bytes at `buf[offset..]`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + SIZE` exceeds `buf.len()`.
    fn read_bytes(buf: &[u8], offset: usize) -> Self;
}
