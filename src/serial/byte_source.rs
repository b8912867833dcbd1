//! Trait abstraction over chunked byte producers to enable testing and
//! transport swapping (live serial port vs. file replay).

use crate::serial::FportSerial;
use async_trait::async_trait;
use std::io;

/// A byte source feeding the frame parser
///
/// `read_chunk` may return fewer bytes than requested. An empty chunk means
/// the source is exhausted. Blocking and timeouts are the transport's
/// concern; the decoder itself never suspends.
#[async_trait]
pub trait ByteSource: Send {
    /// Read up to `max_len` bytes
    async fn read_chunk(&mut self, max_len: usize) -> io::Result<Vec<u8>>;

    /// Human-readable description of where the bytes come from
    fn describe(&self) -> String;
}

#[async_trait]
impl ByteSource for FportSerial {
    async fn read_chunk(&mut self, max_len: usize) -> io::Result<Vec<u8>> {
        FportSerial::read_chunk(self, max_len)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }

    fn describe(&self) -> String {
        format!("serial port {}", self.device_path())
    }
}


#[cfg(test)]
mod tests {
    use super::mocks::MockByteSource;
    use super::*;
    use crate::fport::parser::FportParser;
    use crate::fport::protocol::{Message, FRAME_TYPE_DOWNLINK};
    use crate::fport::testutil::build_frame;

    #[tokio::test]
    async fn test_mock_source_respects_max_len() {
        let mut source = MockByteSource::new([vec![1, 2, 3, 4, 5]]);
        assert_eq!(source.read_chunk(2).await.unwrap(), vec![1, 2]);
        assert_eq!(source.read_chunk(16).await.unwrap(), vec![3, 4, 5]);
        assert!(source.read_chunk(16).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_source_to_parser_pipeline() {
        let frame = build_frame(FRAME_TYPE_DOWNLINK, &[0x10, 0x34, 0x12, 1, 2, 3, 4]);
        let mut source = MockByteSource::new([frame]);
        let mut parser = FportParser::new();

        let mut messages = Vec::new();
        loop {
            let chunk = source.read_chunk(8).await.unwrap();
            if chunk.is_empty() {
                break;
            }
            for event in parser.feed(&chunk) {
                messages.push(event.unwrap());
            }
        }

        assert_eq!(messages.len(), 1);
        match messages[0] {
            Message::Downlink(d) => {
                assert_eq!(d.app_id, 0x1234);
                assert_eq!(d.data, [1, 2, 3, 4]);
            }
            ref other => panic!("expected downlink, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_source_error() {
        let mut source = MockByteSource::new([vec![1, 2, 3]]);
        source.fail_next = Some(io::ErrorKind::BrokenPipe);
        assert!(source.read_chunk(8).await.is_err());
    }
}
