//! # Telemetry Module
//!
//! Handles downlink telemetry logging to JSONL files.
//!
//! This module handles:
//! - Receiving decoded downlink frames from the pipeline
//! - Formatting records as JSONL (JSON Lines) with RFC 3339 timestamps
//! - Appending to a per-run log file under a configured directory

use chrono::Local;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::fport::protocol::DownlinkFrame;

/// One JSONL record per downlink frame
#[derive(Debug, Serialize)]
struct DownlinkRecord {
    timestamp: String,
    prim: u8,
    app_id: u16,
    data: [u8; 4],
}

/// Append-only JSONL writer for downlink frames
#[derive(Debug)]
pub struct DownlinkLogger {
    writer: BufWriter<File>,
    path: PathBuf,
    records: u64,
}

impl DownlinkLogger {
    /// Create a logger writing to a new timestamped file under `log_dir`
    ///
    /// The directory is created if missing.
    pub fn create<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        fs::create_dir_all(&log_dir)?;
        let name = format!("downlink-{}.jsonl", Local::now().format("%Y%m%d-%H%M%S"));
        let path = log_dir.as_ref().join(name);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        info!("Logging downlink telemetry to {}", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            records: 0,
        })
    }

    /// Append one frame as a JSONL record and flush it
    pub fn log(&mut self, frame: &DownlinkFrame) -> Result<()> {
        let record = DownlinkRecord {
            timestamp: Local::now().to_rfc3339(),
            prim: frame.prim,
            app_id: frame.app_id,
            data: frame.data,
        };

        let line = serde_json::to_string(&record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        self.records += 1;
        Ok(())
    }

    /// Records written so far
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Path of the active log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
