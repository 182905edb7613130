//! Bulk element copy, including copy into and out of a cyclic buffer.
//!
//! All functions are generic over the element type. A "cyclic" slice is
//! treated as a ring: a run that passes its end continues at index 0.
//! Copying more elements than the ring holds is not supported: depending on
//! the offsets it either panics or overwrites earlier output.

/// Copy `count` elements from `src[src_offset..]` to `dst[dst_offset..]`.
///
/// # Panics
///
/// Panics if either range falls outside its slice.
#[inline]
pub fn copy<T: Copy>(
    src: &[T],
    src_offset: usize,
    dst: &mut [T],
    dst_offset: usize,
    count: usize,
) {
    dst[dst_offset..dst_offset + count].copy_from_slice(&src[src_offset..src_offset + count]);
}

/// Copy `count` elements from a linear `src` into the ring `cyclic`,
/// starting at `cyclic_offset`.
///
/// Returns the ring offset just past the last element written. When the
/// run wraps, that is the length of the wrapped tail. When it does not,
/// it is `cyclic_offset + count`, which may equal `cyclic.len()`.
///
/// # Example
///
/// ```
/// use bytepacket_core::write_to_cycle;
///
/// let src = [1u8, 2, 3, 4];
/// let mut ring = [0u8; 5];
/// let next = write_to_cycle(&src, 0, &mut ring, 3, 4);
/// assert_eq!(ring, [3, 4, 0, 1, 2]);
/// assert_eq!(next, 2);
/// ```
pub fn write_to_cycle<T: Copy>(
    src: &[T],
    src_offset: usize,
    cyclic: &mut [T],
    cyclic_offset: usize,
    count: usize,
) -> usize {
    let head = cyclic.len() - cyclic_offset;
    if head < count {
        copy(src, src_offset, cyclic, cyclic_offset, head);
        copy(src, src_offset + head, cyclic, 0, count - head);
        count - head
    } else {
        copy(src, src_offset, cyclic, cyclic_offset, count);
        cyclic_offset + count
    }
}

/// Copy `count` elements out of the ring `cyclic`, starting at
/// `cyclic_offset`, into a linear `dst`.
///
/// Returns the ring offset of the next unread element, with the same
/// wrap rules as [`write_to_cycle`].
///
/// # Example
///
/// ```
/// use bytepacket_core::write_from_cycle;
///
/// let ring = [3u8, 4, 0, 1, 2];
/// let mut dst = [0u8; 4];
/// let next = write_from_cycle(&ring, 3, &mut dst, 0, 4);
/// assert_eq!(dst, [1, 2, 3, 4]);
/// assert_eq!(next, 2);
/// ```
pub fn write_from_cycle<T: Copy>(
    cyclic: &[T],
    cyclic_offset: usize,
    dst: &mut [T],
    dst_offset: usize,
    count: usize,
) -> usize {
    let head = cyclic.len() - cyclic_offset;
    if head < count {
        copy(cyclic, cyclic_offset, dst, dst_offset, head);
        copy(cyclic, 0, dst, dst_offset + head, count - head);
        count - head
    } else {
        copy(cyclic, cyclic_offset, dst, dst_offset, count);
        cyclic_offset + count
    }
}
