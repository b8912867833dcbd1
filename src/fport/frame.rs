//! # Frame Validation
//!
//! Interprets the fixed header/trailer of a delimiter-stripped candidate and
//! confirms integrity before any payload decoding happens.
//!
//! Candidate layout (delimiters already removed by the parser):
//!
//! ```text
//! [length][type][payload (still escaped)][checksum]
//! ```
//!
//! Checks run in order: declared length against available bytes, byte-sum
//! checksum over the raw (still stuffed) candidate, then unstuffing and an
//! exact length check on the decoded payload. Stuffing only ever grows the
//! wire form, so the structural check compares the declared length against
//! the stuffed byte count with `>` rather than requiring equality.

use super::checksum::{checksum_residue, checksum_valid};
use super::error::DecodeError;
use super::protocol::RawFrame;
use super::unstuff::unstuff;

/// Smallest candidate that can carry a payload: length, type, one payload
/// byte, checksum.
const MIN_CANDIDATE_SIZE: usize = 4;

/// Overhead counted by the length byte besides the payload (type + checksum)
const LENGTH_OVERHEAD: usize = 2;

/// Validate a stripped candidate and produce a [`RawFrame`]
///
/// # Errors
///
/// * [`DecodeError::LengthMismatch`] - the declared length is zero-payload,
///   exceeds the bytes actually received (truncated frame), or disagrees
///   with the unstuffed payload size
/// * [`DecodeError::ChecksumMismatch`] - the byte sum of the candidate is
///   not 0 mod 255
pub fn validate(raw: &[u8]) -> Result<RawFrame, DecodeError> {
    if raw.len() < MIN_CANDIDATE_SIZE {
        return Err(DecodeError::LengthMismatch {
            declared: raw.first().copied().unwrap_or(0),
            available: raw.len(),
        });
    }

    let declared = raw[0];

    // A length below type + payload + checksum means an empty payload; the
    // checksum offset is undefined for those, so they are length errors.
    if usize::from(declared) <= LENGTH_OVERHEAD || usize::from(declared) > raw.len() - 1 {
        return Err(DecodeError::LengthMismatch {
            declared,
            available: raw.len(),
        });
    }

    if !checksum_valid(raw) {
        return Err(DecodeError::ChecksumMismatch {
            residue: checksum_residue(raw),
        });
    }

    let payload = unstuff(&raw[2..raw.len() - 1]);
    if payload.len() + LENGTH_OVERHEAD != usize::from(declared) {
        return Err(DecodeError::LengthMismatch {
            declared,
            available: raw.len(),
        });
    }

    Ok(RawFrame {
        length: declared,
        frame_type: raw[1],
        payload,
        checksum: raw[raw.len() - 1],
    })
}
