//! Error types for softmix
//!
//! Defines configuration errors using thiserror for clear error propagation.
//!
//! All variants are precondition violations detected before the mixing loop
//! runs. A rejected call produces no partial output: given valid inputs the
//! mix itself is a total function and cannot fail mid-pass.

use thiserror::Error;

/// Main error type for the mixing core
#[derive(Error, Debug)]
pub enum Error {
    /// Bit depth is zero or not a whole number of bytes
    #[error("Bit depth must be a positive multiple of 8: {0}")]
    InvalidBitDepth(u32),

    /// Bit depth decodes to more than 4 bytes per sample
    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u32),

    /// Channel count of zero
    #[error("Channel count must be at least 1")]
    InvalidChannelCount,

    /// Output buffer does not divide into whole frames
    #[error("Output length {length} is not a multiple of the frame size {frame_size}")]
    LengthNotFrameAligned {
        /// Output buffer length in bytes
        length: usize,
        /// Bytes per frame (sample width times channel count)
        frame_size: usize,
    },

    /// A source buffer is shorter than the output buffer
    #[error("Source {index} buffer is {actual} bytes, need at least {required}")]
    SourceBufferTooShort {
        /// Position of the offending source in the source list
        index: usize,
        /// Actual buffer length in bytes
        actual: usize,
        /// Required buffer length (the output length)
        required: usize,
    },
}

/// Convenience Result type using the softmix Error
pub type Result<T> = std::result::Result<T, Error>;
