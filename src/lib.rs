//! # F.Port Bridge Library
//!
//! Decode an F.Port-style (S.Bus-derived) serial RC link into typed messages
//! and feed them to a virtual joystick.
//!
//! This library provides the framing/decoding pipeline for the link protocol
//! (delimiter scanning, byte-unstuffing, checksum validation, bit-packed
//! channel extraction) plus the transport and sink collaborators around it:
//! serial port, capture replay, uinput joystick, and telemetry logging.

pub mod config;
pub mod error;
pub mod fport;
pub mod joystick;
pub mod replay;
pub mod serial;
pub mod telemetry;
