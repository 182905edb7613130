//! Core codec primitives for bytepacket.
//!
//! Stateless functions that move primitive values in and out of byte
//! slices. Every multi-byte value is little-endian. Offsets are never
//! validated: an offset or count outside the slice panics like any other
//! out-of-range slice index.
//!
//! # Scalars
//!
//! ```
//! use bytepacket_core::{read_i32, write};
//!
//! let mut buf = [0u8; 4];
//! assert_eq!(write(&mut buf, 0, -2_500_000i32), 4);
//! assert_eq!(read_i32(&buf, 0), -2_500_000);
//! ```
//!
//! # Text
//!
//! ```
//! use bytepacket_core::text::{Utf8, read_string, write_str};
//!
//! let mut buf = [0u8; 16];
//! let written = write_str(&mut buf, 0, "hello", &Utf8);
//! assert_eq!(written, 9);
//! assert_eq!(read_string(&buf, 0, &Utf8), ("hello".into(), 9));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod array;
pub mod bits;
mod error;
mod impls;
mod scalar;
pub mod text;
mod traits;


pub use array::{copy, write_from_cycle, write_to_cycle};
pub use error::{CodecError, Result};
pub use scalar::{
    read, read_bool, read_char, read_f32, read_f64, read_i8, read_i16, read_i32, read_i64,
    read_u8, read_u16, read_u32, read_u64, try_read, try_write, write,
};
pub use text::TextEncoding;
pub use traits::{FromBytes, ToBytes};
