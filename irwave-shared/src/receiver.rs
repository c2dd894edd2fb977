//! Edge capture and block framing.
//!
//! The first edge of a burst arms a one shot block timer. Every edge until it
//! fires is recorded, then the whole block is handed to the decoder. `edge`
//! is meant to run in interrupt context and does no decoding or logging.

use core::time::Duration;

use heapless::Vec;

use crate::decoder::{DecodeResult, Decoder, Frame};
use crate::error::DecodeError;
use crate::protocol::Protocol;

/// Largest protocol edge count plus one slot to detect overrun
pub const TIMELINE_CAPACITY: usize = 69;

/// Edge timestamps of the block being captured, in microseconds.
pub struct EdgeTimeline {
    edges: Vec<u32, TIMELINE_CAPACITY>,
    limit: usize,
}

impl EdgeTimeline {
    /// Records at most `max_edges + 1` edges
    pub fn new(max_edges: usize) -> Self {
        EdgeTimeline {
            edges: Vec::new(),
            limit: (max_edges + 1).min(TIMELINE_CAPACITY),
        }
    }

    /// Returns false once the timeline is full. Extra edges are dropped, the
    /// decoder sees the overrun from the length alone.
    pub fn record(&mut self, timestamp: u32) -> bool {
        if self.edges.len() >= self.limit {
            return false;
        }
        self.edges.push(timestamp).is_ok()
    }

    pub fn edges(&self) -> &[u32] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn reset(&mut self) {
        self.edges.clear();
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReceiverState {
    WaitingForBlock,
    Capturing,
}

/// Receives decode results, called from timer context.
pub trait Handler {
    fn on_result(&mut self, frame: Frame);

    fn on_error(&mut self, _error: DecodeError) {}
}

impl<F> Handler for F
where
    F: FnMut(DecodeResult),
{
    fn on_result(&mut self, frame: Frame) {
        self(Ok(frame))
    }

    fn on_error(&mut self, error: DecodeError) {
        self(Err(error))
    }
}

pub struct Receiver<H> {
    decoder: Decoder,
    timeline: EdgeTimeline,
    state: ReceiverState,
    handler: H,
}

impl<H: Handler> Receiver<H> {
    pub fn new(protocol: Protocol, handler: H) -> Self {
        Receiver::with_decoder(Decoder::new(protocol), handler)
    }

    pub fn with_decoder(decoder: Decoder, handler: H) -> Self {
        let timeline = EdgeTimeline::new(decoder.max_edges());
        Receiver {
            decoder,
            timeline,
            state: ReceiverState::WaitingForBlock,
            handler,
        }
    }

    /// Record an edge. Returns the block timeout to arm when this edge
    /// starts a new block.
    pub fn edge(&mut self, timestamp: u32) -> Option<Duration> {
        let arm = match self.state {
            ReceiverState::WaitingForBlock => {
                self.state = ReceiverState::Capturing;
                Some(self.tblock())
            }
            ReceiverState::Capturing => None,
        };
        self.timeline.record(timestamp);
        arm
    }

    /// Block timer expiry. Decodes the captured block and reports the result.
    pub fn timer_fired(&mut self) {
        let result = self.decoder.decode(self.timeline.edges());
        self.timeline.reset();
        self.state = ReceiverState::WaitingForBlock;

        match result {
            Ok(frame) => self.handler.on_result(frame),
            Err(err) => self.handler.on_error(err),
        }
    }

    pub fn tblock(&self) -> Duration {
        Duration::from_millis(u64::from(self.decoder.tblock_ms()))
    }

    pub fn state(&self) -> ReceiverState {
        self.state
    }

    pub fn protocol(&self) -> Protocol {
        self.decoder.protocol()
    }

    pub fn timeline(&self) -> &EdgeTimeline {
        &self.timeline
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
