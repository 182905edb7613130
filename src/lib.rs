//! Little-endian binary codec with a cursor-based packet buffer.
//!
//! # Packet
//!
//! ```
//! use bytepacket::{Packet, text::Utf8};
//!
//! let mut packet = Packet::new(64);
//! packet.write(7u16);
//! packet.write_str("hello", &Utf8);
//! packet.write(true);
//!
//! packet.set_seek(0);
//! assert_eq!(packet.read_u16(), 7);
//! assert_eq!(packet.read_string(&Utf8), "hello");
//! assert!(packet.read_bool());
//! assert_eq!(packet.seek(), packet.len());
//! ```
//!
//! # Codec
//!
//! The stateless primitives the packet is built on are re-exported from
//! `bytepacket-core`.
//!
//! ```
//! use bytepacket::{bits, read_u32, write};
//!
//! let mut buf = [0u8; 4];
//! write(&mut buf, 0, 0xDEAD_BEEFu32);
//! assert_eq!(buf, [0xEF, 0xBE, 0xAD, 0xDE]);
//! assert_eq!(read_u32(&buf, 0), 0xDEAD_BEEF);
//! assert!(bits::read_bit_in(&buf, 0, 0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod packet;

#[cfg(test)]
mod tests;

// Codec re-exports
pub use bytepacket_core::{
    CodecError, FromBytes, Result, TextEncoding, ToBytes, array, bits, copy, read, read_bool,
    read_char, read_f32, read_f64, read_i8, read_i16, read_i32, read_i64, read_u8, read_u16,
    read_u32, read_u64, text, try_read, try_write, write, write_from_cycle, write_to_cycle,
};

// Packet re-exports
pub use packet::Packet;
