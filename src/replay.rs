//! # File Replay Source
//!
//! Replays a captured byte log through the decoding pipeline, reading the
//! file in small fixed-size chunks the way the live link delivers bytes.
//! Useful for debugging a link capture without hardware attached.

use crate::error::Result;
use crate::serial::byte_source::ByteSource;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Default replay chunk size in bytes
pub const DEFAULT_REPLAY_CHUNK_SIZE: usize = 30;

/// Byte source backed by a capture file
#[derive(Debug)]
pub struct FileReplaySource {
    file: File,
    path: PathBuf,
    chunk_size: usize,
}

impl FileReplaySource {
    /// Open a capture file for replay
    ///
    /// `chunk_size` caps how many bytes a single `read_chunk` call returns,
    /// independent of what the caller asks for.
    pub async fn open<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await?;
        info!("Replaying capture from {}", path.display());
        Ok(Self {
            file,
            path,
            chunk_size,
        })
    }
}

#[async_trait]
impl ByteSource for FileReplaySource {
    async fn read_chunk(&mut self, max_len: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; max_len.min(self.chunk_size)];
        let n = self.file.read(&mut buf).await?;
        buf.truncate(n);
        Ok(buf)
    }

    fn describe(&self) -> String {
        format!("replay file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fport::parser::FportParser;
    use crate::fport::protocol::{Message, FRAME_TYPE_DOWNLINK};
    use crate::fport::testutil::build_frame;
    use std::io::Write;

    fn write_capture(frames: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..frames {
            let frame = build_frame(
                FRAME_TYPE_DOWNLINK,
                &[0x10, i as u8, 0x00, 1, 2, 3, 4],
            );
            file.write_all(&frame).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_replay_decodes_whole_capture() {
        let capture = write_capture(5);
        let mut source = FileReplaySource::open(capture.path(), DEFAULT_REPLAY_CHUNK_SIZE)
            .await
            .unwrap();
        let mut parser = FportParser::new();

        let mut app_ids = Vec::new();
        loop {
            let chunk = source.read_chunk(64).await.unwrap();
            if chunk.is_empty() {
                break;
            }
            for event in parser.feed(&chunk) {
                match event.unwrap() {
                    Message::Downlink(d) => app_ids.push(d.app_id),
                    other => panic!("expected downlink, got {:?}", other),
                }
            }
        }

        assert_eq!(app_ids, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_chunk_size_is_capped() {
        let capture = write_capture(1);
        let mut source = FileReplaySource::open(capture.path(), 4).await.unwrap();
        let chunk = source.read_chunk(64).await.unwrap();
        assert_eq!(chunk.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = FileReplaySource::open("/nonexistent/capture.bin", 30).await;
        assert!(result.is_err());
    }
}
