//! # LSB-First Bit Reader
//!
//! Cursor over a byte slice that reads fields of arbitrary bit width,
//! least-significant bit first, the order the S.Bus-like channel block is
//! packed in. Keeps the non-byte-aligned control layout declarative instead
//! of hand-rolled shifting at each call site.

/// Bit cursor over a byte slice, LSB-first
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at bit 0 of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Read `count` bits (at most 16) as an unsigned integer
    ///
    /// Bits are consumed LSB-first: the first bit read becomes bit 0 of the
    /// result. Returns `None` when fewer than `count` bits remain.
    pub fn read_bits(&mut self, count: u32) -> Option<u16> {
        debug_assert!(count <= 16);
        if self.remaining() < count as usize {
            return None;
        }

        let mut value: u16 = 0;
        for i in 0..count {
            let byte = self.data[self.pos / 8];
            let bit = (byte >> (self.pos % 8)) & 1;
            value |= u16::from(bit) << i;
            self.pos += 1;
        }
        Some(value)
    }

    /// Read a single bit as a flag
    pub fn read_bit(&mut self) -> Option<bool> {
        self.read_bits(1).map(|b| b == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lsb_first_within_byte() {
        // 0b1011_0010: bits from LSB are 0,1,0,0,1,1,0,1
        let mut reader = BitReader::new(&[0b1011_0010]);
        assert_eq!(reader.read_bits(4), Some(0b0010));
        assert_eq!(reader.read_bits(4), Some(0b1011));
    }

    #[test]
    fn test_field_spanning_byte_boundary() {
        // 11-bit field: low 8 bits from byte 0, high 3 from byte 1
        let mut reader = BitReader::new(&[0xFF, 0x07]);
        assert_eq!(reader.read_bits(11), Some(2047));
        assert_eq!(reader.remaining(), 5);
    }

    #[test]
    fn test_center_value_pattern() {
        // 1024 = bit 10 set; packed alone that is bit 10 of the stream
        let mut reader = BitReader::new(&[0x00, 0x04]);
        assert_eq!(reader.read_bits(11), Some(1024));
    }

    #[test]
    fn test_consecutive_11_bit_fields() {
        // Two channels at max: 22 set bits, then 2 zero padding bits
        let mut reader = BitReader::new(&[0xFF, 0xFF, 0x3F]);
        assert_eq!(reader.read_bits(11), Some(2047));
        assert_eq!(reader.read_bits(11), Some(2047));
        assert_eq!(reader.read_bits(2), Some(0));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_bit() {
        let mut reader = BitReader::new(&[0b0000_0101]);
        assert_eq!(reader.read_bit(), Some(true));
        assert_eq!(reader.read_bit(), Some(false));
        assert_eq!(reader.read_bit(), Some(true));
    }

    #[test]
    fn test_exhaustion_returns_none() {
        let mut reader = BitReader::new(&[0xAB]);
        assert_eq!(reader.read_bits(8), Some(0xAB));
        assert_eq!(reader.read_bits(1), None);
        assert_eq!(reader.read_bit(), None);
    }

    #[test]
    fn test_partial_read_does_not_consume_on_none() {
        let mut reader = BitReader::new(&[0xFF]);
        assert_eq!(reader.read_bits(4), Some(0xF));
        // only 4 bits left, an 8-bit read fails and leaves them readable
        assert_eq!(reader.read_bits(8), None);
        assert_eq!(reader.read_bits(4), Some(0xF));
    }
}
