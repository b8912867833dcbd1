//! # F.Port Bridge
//!
//! Decode an F.Port-style serial RC link into a virtual joystick.
//!
//! This application reads raw bytes from a receiver's serial output (or a
//! capture file), runs them through the frame parser, and fans decoded
//! messages out to a uinput joystick and a downlink telemetry log.

use anyhow::Result;
use tracing::{debug, info, warn};

mod config;
mod error;
mod fport;
mod joystick;
mod replay;
mod serial;
mod telemetry;

use config::Config;
use fport::parser::{FportParser, FrameEvent, MessageSink};
use fport::protocol::Message;
use joystick::VirtualJoystick;
use replay::FileReplaySource;
use serial::byte_source::ByteSource;
use serial::FportSerial;
use telemetry::DownlinkLogger;

/// Number of resolved frames between status log messages
const LOG_INTERVAL_FRAMES: u64 = 1000;

/// Fans resolved frames out to the configured sinks and keeps counters
struct BridgeSink {
    joystick: Option<VirtualJoystick>,
    telemetry: Option<DownlinkLogger>,
    control_frames: u64,
    downlink_frames: u64,
    dropped_frames: u64,
    failsafe_active: bool,
}

impl BridgeSink {
    fn new(joystick: Option<VirtualJoystick>, telemetry: Option<DownlinkLogger>) -> Self {
        Self {
            joystick,
            telemetry,
            control_frames: 0,
            downlink_frames: 0,
            dropped_frames: 0,
            failsafe_active: false,
        }
    }

    fn resolved(&self) -> u64 {
        self.control_frames + self.downlink_frames + self.dropped_frames
    }
}

impl MessageSink for BridgeSink {
    fn accept(&mut self, event: FrameEvent) {
        match event {
            Ok(Message::Control(frame)) => {
                self.control_frames += 1;
                // frames arrive every ~9 ms, so log failsafe on the
                // transition rather than per frame
                if frame.failsafe != self.failsafe_active {
                    self.failsafe_active = frame.failsafe;
                    if frame.failsafe {
                        warn!("Receiver reports failsafe");
                    } else {
                        info!("Receiver failsafe cleared");
                    }
                }
                if let Some(joystick) = self.joystick.as_mut() {
                    if let Err(e) = joystick.apply(&frame) {
                        warn!("Joystick emission failed: {}", e);
                    }
                }
            }
            Ok(Message::Downlink(frame)) => {
                self.downlink_frames += 1;
                debug!(
                    "Downlink prim=0x{:02X} app_id=0x{:04X} data={:02X?}",
                    frame.prim, frame.app_id, frame.data
                );
                if let Some(logger) = self.telemetry.as_mut() {
                    if let Err(e) = logger.log(&frame) {
                        warn!("Telemetry logging failed: {}", e);
                    }
                }
            }
            Err(e) => {
                self.dropped_frames += 1;
                debug!("Dropped frame: {}", e);
            }
        }
    }
}

/// Main entry point for F.Port Bridge
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Load configuration (path from the first CLI argument, defaults
///      otherwise)
///    - Open the byte source (serial port or capture replay) and sinks
///
/// 2. **Main Loop**
///    - Read chunks from the byte source and feed the frame parser
///    - Fan resolved frames out to the joystick and telemetry log
///    - Log status every 1000 resolved frames
///    - Handle Ctrl+C for graceful shutdown
///
/// # Errors
///
/// Returns error if the byte source cannot be opened, the configuration is
/// invalid, or the virtual joystick cannot be created.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("F.Port Bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut source: Box<dyn ByteSource> = if config.replay.enabled {
        Box::new(FileReplaySource::open(&config.replay.path, config.replay.chunk_size).await?)
    } else {
        Box::new(FportSerial::open_with_paths(
            &[config.serial.port.as_str()],
            config.serial.baud_rate,
        )?)
    };
    info!("Reading from {}", source.describe());

    let joystick = if config.joystick.enabled {
        Some(VirtualJoystick::create(&config.joystick.device_name)?)
    } else {
        None
    };
    let telemetry = if config.telemetry.enabled {
        Some(DownlinkLogger::create(&config.telemetry.log_dir)?)
    } else {
        None
    };

    let mut parser = FportParser::new();
    let mut sink = BridgeSink::new(joystick, telemetry);
    let mut last_log_count: u64 = 0;

    info!("Starting decode loop (Ctrl+C to exit)");

    loop {
        tokio::select! {
            chunk = source.read_chunk(config.serial.read_chunk_size) => {
                let chunk = chunk?;
                if chunk.is_empty() {
                    info!("Byte source exhausted");
                    break;
                }

                parser.feed_into(&chunk, &mut sink);

                if sink.resolved() - last_log_count >= LOG_INTERVAL_FRAMES {
                    info!(
                        "Resolved {} frames ({} control, {} downlink, {} dropped)",
                        sink.resolved(), sink.control_frames,
                        sink.downlink_frames, sink.dropped_frames,
                    );
                    last_log_count = sink.resolved();
                }
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    info!(
        "Total frames: {} control, {} downlink, {} dropped",
        sink.control_frames, sink.downlink_frames, sink.dropped_frames
    );

    Ok(())
}
