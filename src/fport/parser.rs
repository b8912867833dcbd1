//! # Frame Assembler
//!
//! Turns an unbounded, arbitrarily chunked byte stream into a sequence of
//! resolved frames. The parser owns all of its buffering state, so each
//! stream gets its own instance and the results are independent of how the
//! bytes are chunked: feeding one byte at a time yields the same events as
//! feeding the whole stream at once.

use bytes::{Buf, BytesMut};
use tracing::trace;

use super::decoder::decode_message;
use super::error::DecodeError;
use super::frame::validate;
use super::protocol::{Message, FRAME_HEAD};

/// One resolved candidate frame: a decoded message or the reason it was
/// dropped. Either way the stream stays in sync.
pub type FrameEvent = Result<Message, DecodeError>;

/// Receiver for resolved frames, invoked once per candidate in stream order
pub trait MessageSink {
    fn accept(&mut self, event: FrameEvent);
}

/// Candidates at or below this size are delimiter noise, not frames; the
/// closing delimiter then doubles as the next frame's start marker.
const MIN_CONTENT_LEN: usize = 3;

/// Stateful frame-boundary scanner over a raw byte stream
#[derive(Debug, Default)]
pub struct FportParser {
    /// Bytes received but not yet consumed by a frame
    buffer: BytesMut,
    /// Content collected for the currently open frame, delimiters excluded
    packet: Vec<u8>,
    /// A start delimiter has been seen without its matching end yet
    open: bool,
}

impl FportParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of raw bytes, returning all frames resolved by it
    ///
    /// Zero or more events are produced synchronously, in stream order.
    /// Partial frames are carried over to the next call; an empty chunk is
    /// a no-op beyond re-scanning buffered bytes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<FrameEvent> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();

        while !self.buffer.is_empty() {
            let Some(index) = self.buffer.iter().position(|&b| b == FRAME_HEAD) else {
                if self.open {
                    // mid-frame: move everything into the open frame
                    self.packet.extend_from_slice(&self.buffer);
                    self.buffer.clear();
                }
                // not open: bytes stay buffered until a delimiter shows up
                break;
            };

            if self.open {
                self.packet.extend_from_slice(&self.buffer[..index]);
                if self.packet.len() >= MIN_CONTENT_LEN {
                    trace!("candidate frame of {} bytes", self.packet.len());
                    events.push(Self::resolve(&self.packet));
                    self.open = false;
                } else {
                    // noise before this delimiter; it re-opens framing
                    trace!("dropping {}-byte candidate, re-opening", self.packet.len());
                }
                self.packet.clear();
            } else {
                self.open = true;
            }
            self.buffer.advance(index + 1);
        }

        events
    }

    /// Feed a chunk and push each resolved frame into `sink`
    pub fn feed_into(&mut self, chunk: &[u8], sink: &mut dyn MessageSink) {
        for event in self.feed(chunk) {
            sink.accept(event);
        }
    }

    /// Validate and decode one candidate. Failures never poison the parser;
    /// scanning resumes at the next delimiter.
    fn resolve(candidate: &[u8]) -> FrameEvent {
        let frame = validate(candidate)?;
        decode_message(&frame)
    }
}
