//! Error types for the codec.
//!
//! The unchecked primitives never return errors; they panic on
//! out-of-range access. These variants cover the checked paths and the
//! capabilities that are declared but not built.

use snafu::Snafu;

/// Error returned by checked codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    /// The operation exists in the API but has no implementation.
    #[snafu(display("{operation} is not implemented"))]
    Unimplemented {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Not enough room to write the value.
    #[snafu(display("buffer too small: needed {needed} bytes, only {available} available"))]
    BufferTooSmall {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// Not enough bytes left to read the value.
    #[snafu(display("unexpected end of input: needed {needed} bytes, only {available} available"))]
    UnexpectedEof {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },
}

/// Result type for codec operations.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
