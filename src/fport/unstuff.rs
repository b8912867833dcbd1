//! # Byte Unstuffing
//!
//! Reverses the escape-character substitution applied to frame payloads so
//! the delimiter value never appears inside a frame. On the wire, an escaped
//! byte is sent as `0x7D` followed by the original byte XOR `0x20`.

use super::protocol::{ESCAPE_CHAR, ESCAPE_XOR_VALUE};

/// Remove byte-stuffing from a payload region
///
/// Each escape byte is dropped and the byte after it is XORed with 0x20.
/// Pure and total: an escape byte in final position with nothing left to
/// XOR is dropped.
///
/// # Examples
///
/// ```
/// use fport_bridge::fport::unstuff::unstuff;
///
/// // 0x7D 0x5E decodes to the delimiter value 0x7E
/// assert_eq!(unstuff(&[0x01, 0x7D, 0x5E, 0x02]), vec![0x01, 0x7E, 0x02]);
/// ```
pub fn unstuff(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut iter = data.iter().copied();

    while let Some(byte) = iter.next() {
        if byte == ESCAPE_CHAR {
            if let Some(next) = iter.next() {
                out.push(next ^ ESCAPE_XOR_VALUE);
            }
            // dangling escape at the end: dropped
        } else {
            out.push(byte);
        }
    }

    out
}
