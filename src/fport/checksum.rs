//! # Modulo-255 Sum Checksum
//!
//! F.Port frame integrity check: the byte sum of the stripped frame
//! (length, type, payload, checksum byte) must be 0 modulo 255. The
//! transmitter picks the checksum byte to balance the sum.

/// Byte sum of `data` modulo 255
///
/// # Examples
///
/// ```
/// use fport_bridge::fport::checksum::checksum_residue;
///
/// assert_eq!(checksum_residue(&[0xFE, 0x01]), 0);
/// ```
pub fn checksum_residue(data: &[u8]) -> u8 {
    let sum: u32 = data.iter().map(|&b| u32::from(b)).sum();
    (sum % 0xFF) as u8
}

/// True if `data` (including its trailing checksum byte) balances to zero
pub fn checksum_valid(data: &[u8]) -> bool {
    checksum_residue(data) == 0
}
