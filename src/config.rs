//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub serial: SerialConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
    #[serde(default)]
    pub joystick: JoystickConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Serial port configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SerialConfig {
    #[serde(default = "default_serial_port")]
    pub port: String,

    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    #[serde(default = "default_read_chunk_size")]
    pub read_chunk_size: usize,
}

/// Capture replay configuration; when enabled it replaces the serial port
#[derive(Debug, Deserialize, Clone)]
pub struct ReplayConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub path: String,

    #[serde(default = "default_replay_chunk_size")]
    pub chunk_size: usize,
}

/// Virtual joystick configuration
#[derive(Debug, Deserialize, Clone)]
pub struct JoystickConfig {
    #[serde(default = "default_joystick_enabled")]
    pub enabled: bool,

    #[serde(default = "default_device_name")]
    pub device_name: String,
}

/// Telemetry logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    #[serde(default = "default_telemetry_enabled")]
    pub enabled: bool,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

// Default value functions
fn default_serial_port() -> String { "/dev/ttyUSB0".to_string() }
fn default_baud_rate() -> u32 { 115200 }
fn default_read_chunk_size() -> usize { 64 }

fn default_replay_chunk_size() -> usize { 30 }

fn default_joystick_enabled() -> bool { true }
fn default_device_name() -> String { "fport-bridge".to_string() }

fn default_telemetry_enabled() -> bool { true }
fn default_log_dir() -> String { "./logs".to_string() }

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: default_serial_port(),
            baud_rate: default_baud_rate(),
            read_chunk_size: default_read_chunk_size(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: String::new(),
            chunk_size: default_replay_chunk_size(),
        }
    }
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            enabled: default_joystick_enabled(),
            device_name: default_device_name(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_telemetry_enabled(),
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fport_bridge::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.replay.enabled && self.serial.port.is_empty() {
            return Err(crate::error::FportBridgeError::Config(
                toml::de::Error::custom("serial port cannot be empty"),
            ));
        }

        if ![9600, 19200, 38400, 57600, 115200, 230400].contains(&self.serial.baud_rate) {
            return Err(crate::error::FportBridgeError::Config(
                toml::de::Error::custom(
                    "baud_rate must be one of: 9600, 19200, 38400, 57600, 115200, 230400",
                ),
            ));
        }

        if self.serial.read_chunk_size == 0 || self.serial.read_chunk_size > 4096 {
            return Err(crate::error::FportBridgeError::Config(
                toml::de::Error::custom("read_chunk_size must be between 1 and 4096"),
            ));
        }

        if self.replay.enabled && self.replay.path.is_empty() {
            return Err(crate::error::FportBridgeError::Config(
                toml::de::Error::custom("replay path cannot be empty when replay is enabled"),
            ));
        }

        if self.replay.chunk_size == 0 || self.replay.chunk_size > 4096 {
            return Err(crate::error::FportBridgeError::Config(
                toml::de::Error::custom("replay chunk_size must be between 1 and 4096"),
            ));
        }

        if self.joystick.enabled && self.joystick.device_name.is_empty() {
            return Err(crate::error::FportBridgeError::Config(
                toml::de::Error::custom("joystick device_name cannot be empty when enabled"),
            ));
        }

        if self.telemetry.enabled && self.telemetry.log_dir.is_empty() {
            return Err(crate::error::FportBridgeError::Config(
                toml::de::Error::custom("telemetry log_dir cannot be empty when enabled"),
            ));
        }

        Ok(())
    }
}
