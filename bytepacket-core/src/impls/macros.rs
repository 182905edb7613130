use crate::{FromBytes, ToBytes};

/// Copy `N` bytes starting at `offset` into an array.
#[inline]
fn array<const N: usize>(buf: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[offset..offset + N]);
    out
}

// Multi-byte integers go through to_le_bytes/from_le_bytes.
macro_rules! impl_bytes_for_int {
    ($($ty:ty),+) => {
        $(
            impl ToBytes for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn write_bytes(&self, buf: &mut [u8], offset: usize) {
                    buf[offset..offset + core::mem::size_of::<$ty>()]
                        .copy_from_slice(&self.to_le_bytes());
                }
            }

            impl FromBytes for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn read_bytes(buf: &[u8], offset: usize) -> Self {
                    <$ty>::from_le_bytes(array(buf, offset))
                }
            }
        )+
    };
}

// Floats are stored as the bit pattern of the same-width unsigned integer.
macro_rules! impl_bytes_for_float {
    ($($ty:ty => $bits:ty),+) => {
        $(
            impl ToBytes for $ty {
                const SIZE: usize = core::mem::size_of::<$bits>();

                #[inline]
                fn write_bytes(&self, buf: &mut [u8], offset: usize) {
                    self.to_bits().write_bytes(buf, offset);
                }
            }

            impl FromBytes for $ty {
                const SIZE: usize = core::mem::size_of::<$bits>();

                #[inline]
                fn read_bytes(buf: &[u8], offset: usize) -> Self {
                    <$ty>::from_bits(<$bits>::read_bytes(buf, offset))
                }
            }
        )+
    };
}

impl_bytes_for_int!(u16, u32, u64, i16, i32, i64);
impl_bytes_for_float!(f32 => u32, f64 => u64);
