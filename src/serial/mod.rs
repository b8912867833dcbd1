//! # Serial Communication Module
//!
//! Handles the serial link to the F.Port receiver.
//!
//! This module handles:
//! - Opening the port at 115,200 baud, 8N1, no flow control
//! - Device auto-detection across common USB serial paths
//! - Chunked async reads feeding the frame parser
//!
//! The core decoder never initiates reads itself; it is fed through the
//! [`ByteSource`](byte_source::ByteSource) abstraction.

pub mod byte_source;

use crate::error::{FportBridgeError, Result};
use tokio::io::AsyncReadExt;
use tokio_serial::SerialPortBuilderExt;
use tracing::{debug, info, warn};

/// F.Port link baud rate
pub const FPORT_BAUD_RATE: u32 = 115_200;

/// Default receiver device paths to try (in order of preference)
const DEFAULT_DEVICE_PATHS: &[&str] = &[
    "/dev/ttyUSB0", // USB-to-serial adapters (most common for F.Port taps)
    "/dev/ttyACM0", // USB CDC devices
];

/// F.Port serial port handler
///
/// Manages the connection to the receiver's serial output.
pub struct FportSerial {
    /// Serial port handle
    port: tokio_serial::SerialStream,
    /// Device path (e.g., /dev/ttyUSB0)
    device_path: String,
}

impl std::fmt::Debug for FportSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FportSerial")
            .field("device_path", &self.device_path)
            .finish_non_exhaustive()
    }
}

impl FportSerial {
    /// Open the receiver link, auto-detecting the device path
    ///
    /// # Errors
    ///
    /// Returns an error if no device on the default paths can be opened.
    pub fn open() -> Result<Self> {
        Self::open_with_paths(DEFAULT_DEVICE_PATHS, FPORT_BAUD_RATE)
    }

    /// Open the receiver link trying the given device paths in order
    pub fn open_with_paths(paths: &[&str], baud_rate: u32) -> Result<Self> {
        for path in paths {
            debug!("Trying to open serial port: {}", path);

            match Self::open_port(path, baud_rate) {
                Ok(port) => {
                    info!("Successfully opened F.Port device at {}", path);
                    return Ok(Self {
                        port,
                        device_path: path.to_string(),
                    });
                }
                Err(e) => {
                    warn!("Failed to open {}: {}", path, e);
                    continue;
                }
            }
        }

        Err(FportBridgeError::SerialPortNotFound(paths.join(", ")))
    }

    /// Open a specific serial port with F.Port settings (8N1, no flow control)
    fn open_port(path: &str, baud_rate: u32) -> Result<tokio_serial::SerialStream> {
        let port = tokio_serial::new(path, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| FportBridgeError::Serial(format!("Failed to open {}: {}", path, e)))?;

        Ok(port)
    }

    /// Read up to `max_len` bytes from the port
    ///
    /// May return fewer bytes than requested; an empty result means the port
    /// reached end of stream.
    pub async fn read_chunk(&mut self, max_len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; max_len];
        let n = self
            .port
            .read(&mut buf)
            .await
            .map_err(|e| FportBridgeError::Serial(format!("Failed to read from port: {}", e)))?;
        buf.truncate(n);
        debug!("Read {} bytes from {}", n, self.device_path);
        Ok(buf)
    }

    /// Device path of the opened serial port
    pub fn device_path(&self) -> &str {
        &self.device_path
    }
}
