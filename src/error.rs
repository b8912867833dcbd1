//! # Error Types
//!
//! Custom error types for F.Port Bridge using `thiserror`.

use thiserror::Error;

/// Main error type for F.Port Bridge
#[derive(Debug, Error)]
pub enum FportBridgeError {
    /// Frame decoding errors (recoverable at the stream level)
    #[error("frame decode error: {0}")]
    Decode(#[from] crate::fport::error::DecodeError),

    /// Serial port errors
    #[error("serial error: {0}")]
    Serial(String),

    /// No serial device could be opened
    #[error("no F.Port device found (tried: {0})")]
    SerialPortNotFound(String),

    /// Virtual input device errors
    #[error("joystick error: {0}")]
    Joystick(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for F.Port Bridge
pub type Result<T> = std::result::Result<T, FportBridgeError>;
