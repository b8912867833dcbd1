//! Test-only reference encoder: builds well-formed wire frames so the decode
//! pipeline can be exercised end to end. Frame encoding is deliberately not
//! part of the public API; the transmit direction lives on the other side of
//! the link.

use super::checksum::checksum_residue;
use super::protocol::*;

/// Apply byte-stuffing to a payload region
pub fn stuff(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for &byte in data {
        if byte == ESCAPE_CHAR || byte == FRAME_HEAD {
            out.push(ESCAPE_CHAR);
            out.push(byte ^ ESCAPE_XOR_VALUE);
        } else {
            out.push(byte);
        }
    }
    out
}

/// Build a stripped candidate: `[length][type][stuffed payload][checksum]`
///
/// The checksum byte balances the candidate's byte sum to 0 mod 255.
pub fn strip_candidate(frame_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(payload.len() + 3);
    raw.push((payload.len() + 2) as u8);
    raw.push(frame_type);
    raw.extend_from_slice(&stuff(payload));
    let residue = checksum_residue(&raw);
    raw.push((0xFF - residue) % 0xFF);
    raw
}

/// Build a complete wire frame including both delimiters
///
/// Panics if the balancing checksum byte collides with the delimiter or
/// escape value; pick test payloads that avoid that.
pub fn build_frame(frame_type: u8, payload: &[u8]) -> Vec<u8> {
    let candidate = strip_candidate(frame_type, payload);
    let checksum = candidate[candidate.len() - 1];
    assert!(
        checksum != FRAME_HEAD && checksum != ESCAPE_CHAR,
        "test vector checksum 0x{:02X} would need stuffing",
        checksum
    );

    let mut wire = Vec::with_capacity(candidate.len() + 2);
    wire.push(FRAME_HEAD);
    wire.extend_from_slice(&candidate);
    wire.push(FRAME_HEAD);
    wire
}

/// Bit-pack a control payload: 16 × 11-bit channels plus the flag byte
pub fn encode_control_payload(
    channels: &Channels,
    switches: [bool; SWITCH_COUNT],
    frame_lost: bool,
    failsafe: bool,
) -> Vec<u8> {
    let mut payload = vec![0u8; CONTROL_PAYLOAD_SIZE];
    let mut bit_index = 0;

    let mut push_bits = |payload: &mut [u8], value: u16, count: u32| {
        for bit in 0..count {
            if (value >> bit) & 1 == 1 {
                payload[bit_index / 8] |= 1 << (bit_index % 8);
            }
            bit_index += 1;
        }
    };

    for &channel in channels.iter() {
        push_bits(&mut payload, channel.min(CHANNEL_VALUE_MAX), CHANNEL_BITS);
    }
    push_bits(&mut payload, u16::from(switches[0]), 1);
    push_bits(&mut payload, u16::from(switches[1]), 1);
    push_bits(&mut payload, u16::from(frame_lost), 1);
    push_bits(&mut payload, u16::from(failsafe), 1);

    payload
}
