//! # Message Decoder
//!
//! Maps a validated, unstuffed [`RawFrame`] to a typed [`Message`] by its
//! frame type byte. Dispatch is a closed match over the known types, so a
//! type without a decoder is a structured error instead of a lookup failure.

use super::bits::BitReader;
use super::error::DecodeError;
use super::protocol::*;

/// Decode a validated frame into a typed message
///
/// # Errors
///
/// * [`DecodeError::UnknownFrameType`] - type byte has no decoder (this
///   includes [`FRAME_TYPE_UPLINK`], which is transmit-direction only)
/// * [`DecodeError::ShortPayload`] - payload too small for the frame type
pub fn decode_message(frame: &RawFrame) -> Result<Message, DecodeError> {
    match frame.frame_type {
        FRAME_TYPE_CONTROL => decode_control(&frame.payload).map(Message::Control),
        FRAME_TYPE_DOWNLINK => decode_downlink(&frame.payload).map(Message::Downlink),
        other => Err(DecodeError::UnknownFrameType(other)),
    }
}

/// Decode the S.Bus-like control payload
///
/// Layout, LSB-first over 23 bytes: sixteen contiguous 11-bit channels
/// (22 bytes), then the flag byte:
///
/// ```text
/// bit 0: switch 1 (channel 17)    bit 2: frame lost
/// bit 1: switch 2 (channel 18)    bit 3: failsafe
/// bits 4-7: reserved
/// ```
pub fn decode_control(payload: &[u8]) -> Result<ControlFrame, DecodeError> {
    if payload.len() < CONTROL_PAYLOAD_SIZE {
        return Err(DecodeError::ShortPayload {
            frame_type: FRAME_TYPE_CONTROL,
            expected: CONTROL_PAYLOAD_SIZE,
            actual: payload.len(),
        });
    }

    let short = || DecodeError::ShortPayload {
        frame_type: FRAME_TYPE_CONTROL,
        expected: CONTROL_PAYLOAD_SIZE,
        actual: payload.len(),
    };

    let mut reader = BitReader::new(payload);
    let mut channels = [0u16; CHANNEL_COUNT];
    for channel in &mut channels {
        *channel = reader.read_bits(CHANNEL_BITS).ok_or_else(short)?;
    }

    let mut switches = [false; SWITCH_COUNT];
    for switch in &mut switches {
        *switch = reader.read_bit().ok_or_else(short)?;
    }
    let frame_lost = reader.read_bit().ok_or_else(short)?;
    let failsafe = reader.read_bit().ok_or_else(short)?;
    // remaining four bits of the flag byte are reserved

    Ok(ControlFrame {
        channels,
        switches,
        frame_lost,
        failsafe,
    })
}

/// Decode the downlink telemetry payload
///
/// Byte 0 is the primitive code, bytes 1-2 compose the application id low
/// byte first, bytes 3-6 are the sensor data.
pub fn decode_downlink(payload: &[u8]) -> Result<DownlinkFrame, DecodeError> {
    if payload.len() < DOWNLINK_PAYLOAD_SIZE {
        return Err(DecodeError::ShortPayload {
            frame_type: FRAME_TYPE_DOWNLINK,
            expected: DOWNLINK_PAYLOAD_SIZE,
            actual: payload.len(),
        });
    }

    Ok(DownlinkFrame {
        prim: payload[0],
        app_id: u16::from_le_bytes([payload[1], payload[2]]),
        data: [payload[3], payload[4], payload[5], payload[6]],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fport::testutil::encode_control_payload;

    fn raw(frame_type: u8, payload: Vec<u8>) -> RawFrame {
        RawFrame {
            length: (payload.len() + 2) as u8,
            frame_type,
            payload,
            checksum: 0,
        }
    }

    #[test]
    fn test_control_all_channels_centered() {
        let payload = encode_control_payload(&[CHANNEL_VALUE_CENTER; 16], [false; 2], false, false);
        let control = decode_control(&payload).unwrap();

        assert_eq!(control.channels, [1024u16; 16]);
        assert_eq!(control.switches, [false, false]);
        assert!(!control.frame_lost);
        assert!(!control.failsafe);
    }

    #[test]
    fn test_control_distinct_channel_values() {
        let mut channels = [0u16; 16];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = (i as u16) * 128 + 7;
        }
        let payload = encode_control_payload(&channels, [false; 2], false, false);
        assert_eq!(decode_control(&payload).unwrap().channels, channels);
    }

    #[test]
    fn test_control_extreme_channel_values() {
        let mut channels = [CHANNEL_VALUE_MIN; 16];
        channels[0] = CHANNEL_VALUE_MAX;
        channels[15] = CHANNEL_VALUE_MAX;
        let payload = encode_control_payload(&channels, [false; 2], false, false);
        assert_eq!(decode_control(&payload).unwrap().channels, channels);
    }

    #[test]
    fn test_control_flags_and_switches() {
        let payload = encode_control_payload(&[0u16; 16], [true, false], true, true);
        let control = decode_control(&payload).unwrap();

        assert_eq!(control.switches, [true, false]);
        assert!(control.frame_lost);
        assert!(control.failsafe);
    }

    #[test]
    fn test_control_short_payload() {
        let result = decode_control(&[0u8; 22]);
        assert!(matches!(
            result,
            Err(DecodeError::ShortPayload {
                frame_type: FRAME_TYPE_CONTROL,
                expected: 23,
                actual: 22,
            })
        ));
    }

    #[test]
    fn test_downlink_known_vector() {
        let payload = vec![0x32, 0x01, 0x02, 0xAA, 0xBB, 0xCC, 0xDD];
        let downlink = decode_downlink(&payload).unwrap();

        assert_eq!(downlink.prim, PRIM_RESPONSE);
        assert_eq!(downlink.app_id, 0x0201);
        assert_eq!(downlink.data, [0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_downlink_short_payload() {
        let result = decode_downlink(&[0x32, 0x01, 0x02]);
        assert!(matches!(
            result,
            Err(DecodeError::ShortPayload {
                frame_type: FRAME_TYPE_DOWNLINK,
                expected: 7,
                actual: 3,
            })
        ));
    }

    #[test]
    fn test_dispatch_control_and_downlink() {
        let control = raw(
            FRAME_TYPE_CONTROL,
            encode_control_payload(&[512u16; 16], [false; 2], false, false),
        );
        assert!(matches!(
            decode_message(&control),
            Ok(Message::Control(c)) if c.channels == [512u16; 16]
        ));

        let downlink = raw(
            FRAME_TYPE_DOWNLINK,
            vec![0x10, 0x00, 0x10, 0x01, 0x02, 0x03, 0x04],
        );
        assert!(matches!(
            decode_message(&downlink),
            Ok(Message::Downlink(d)) if d.prim == PRIM_DATA && d.app_id == 0x1000
        ));
    }

    #[test]
    fn test_unknown_frame_type() {
        let uplink = raw(FRAME_TYPE_UPLINK, vec![0x00; 7]);
        assert_eq!(
            decode_message(&uplink),
            Err(DecodeError::UnknownFrameType(0x81))
        );
    }
}
