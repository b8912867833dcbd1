//! # F.Port Protocol Constants and Types
//!
//! Core wire-format definitions for the F.Port-style link.
//!
//! Frame layout on the wire:
//!
//! ```text
//! [0x7E][length][type][payload (escaped)][checksum][0x7E]
//! ```
//!
//! The length byte counts type + payload + checksum. The checksum balances
//! the stripped frame so that the byte sum mod 255 is zero. Payload bytes
//! colliding with the delimiter are escaped with 0x7D / XOR 0x20.

/// Frame delimiter byte (start and end marker)
pub const FRAME_HEAD: u8 = 0x7E;

/// Escape byte for byte-stuffing
pub const ESCAPE_CHAR: u8 = 0x7D;

/// XOR value applied to the byte following an escape
pub const ESCAPE_XOR_VALUE: u8 = 0x20;

/// Control frame type (bit-packed RC channels)
pub const FRAME_TYPE_CONTROL: u8 = 0x00;

/// Downlink telemetry frame type
pub const FRAME_TYPE_DOWNLINK: u8 = 0x01;

/// Uplink frame type (transmit direction, never decoded here)
pub const FRAME_TYPE_UPLINK: u8 = 0x81;

/// Downlink primitive: null / keep-alive
pub const PRIM_NULL: u8 = 0x00;

/// Downlink primitive: unsolicited data
pub const PRIM_DATA: u8 = 0x10;

/// Downlink primitive: read request
pub const PRIM_READ: u8 = 0x30;

/// Downlink primitive: write request
pub const PRIM_WRITE: u8 = 0x31;

/// Downlink primitive: response
pub const PRIM_RESPONSE: u8 = 0x32;

/// Number of RC channels in a control frame
pub const CHANNEL_COUNT: usize = 16;

/// Bits per RC channel
pub const CHANNEL_BITS: u32 = 11;

/// Channel value range (11-bit: 0-2047)
pub const CHANNEL_VALUE_MIN: u16 = 0;
pub const CHANNEL_VALUE_MAX: u16 = 2047;
pub const CHANNEL_VALUE_CENTER: u16 = 1024;

/// Number of switch bits in the control flag byte
pub const SWITCH_COUNT: usize = 2;

/// Control payload size: 22 channel bytes (16 × 11 bits) + 1 flag byte
pub const CONTROL_PAYLOAD_SIZE: usize = 23;

/// Downlink payload size: prim(1) + app id(2) + data(4)
pub const DOWNLINK_PAYLOAD_SIZE: usize = 7;

/// RC channels array type (16 channels, 11-bit values)
pub type Channels = [u16; CHANNEL_COUNT];

/// A structurally valid frame, stripped of delimiters and unstuffed.
///
/// Transient: produced by the validator, consumed by the decoder within one
/// parse step.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Declared length byte (type + payload + checksum)
    pub length: u8,

    /// Frame type byte
    pub frame_type: u8,

    /// Unstuffed payload bytes
    pub payload: Vec<u8>,

    /// Checksum byte as received
    pub checksum: u8,
}

/// Decoded control-surface frame (S.Bus-like layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFrame {
    /// 16 channel values, 11-bit each (0-2047)
    pub channels: Channels,

    /// Two digital switch bits (channels 17/18 in S.Bus terms)
    pub switches: [bool; SWITCH_COUNT],

    /// Receiver reported a lost frame
    pub frame_lost: bool,

    /// Receiver entered failsafe
    pub failsafe: bool,
}

/// Decoded downlink telemetry frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownlinkFrame {
    /// Primitive code (see the `PRIM_*` constants)
    pub prim: u8,

    /// Application id, composed low byte first
    pub app_id: u16,

    /// Sensor payload
    pub data: [u8; 4],
}

/// A fully decoded message, tagged by frame type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Control(ControlFrame),
    Downlink(DownlinkFrame),
}
