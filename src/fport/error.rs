//! # Frame Decode Errors
//!
//! Structured error values for the decoding pipeline. All of these are
//! recoverable at the stream level: the parser drops the offending candidate,
//! reports it, and resumes at the next delimiter.

use thiserror::Error;

/// Reasons a candidate frame failed validation or decoding
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Declared length byte does not fit the received frame
    #[error("declared length {declared} does not fit frame of {available} bytes")]
    LengthMismatch { declared: u8, available: usize },

    /// Byte sum of the stripped frame is not 0 mod 255
    #[error("checksum mismatch (sum residue 0x{residue:02X})")]
    ChecksumMismatch { residue: u8 },

    /// Frame type byte has no decoder
    #[error("unknown frame type 0x{0:02X}")]
    UnknownFrameType(u8),

    /// Payload is shorter than the frame type requires
    #[error("payload too short for frame type 0x{frame_type:02X}: got {actual} bytes, need {expected}")]
    ShortPayload {
        frame_type: u8,
        expected: usize,
        actual: usize,
    },
}
