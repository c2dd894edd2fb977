//! Per protocol decoders.
//!
//! Every decoder takes the edge timestamps of one block and returns a
//! `DecodeResult`. Decoding is deterministic in its input; the only state
//! carried between blocks is the NEC address reported with repeat codes.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::protocol::{Protocol, ProtocolSpec};
use crate::timing::{width, Window};

pub mod mce;
pub mod nec;
pub mod rc5;
pub mod rc6;
pub mod samsung;
pub mod sony;

pub use nec::NecDecoder;
pub use sony::SonyDecoder;

pub type DecodeResult = Result<Frame, DecodeError>;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Command {
    pub code: u32,
    pub address: u32,
    /// Toggle, control or extension bits, depending on the protocol
    pub extension: u32,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Frame {
    Command(Command),
    /// Button held. Carries the address of the last valid command.
    Repeat { address: u32 },
}

impl Frame {
    pub(crate) fn command(code: u32, address: u32, extension: u32) -> DecodeResult {
        Ok(Frame::Command(Command {
            code,
            address,
            extension,
        }))
    }
}

pub enum Decoder {
    Nec(NecDecoder),
    Samsung,
    Sony(SonyDecoder),
    Rc5,
    Rc6,
    Mce,
}

impl Decoder {
    pub fn new(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Nec => Decoder::Nec(NecDecoder::new(false)),
            Protocol::Samsung => Decoder::Samsung,
            Protocol::Sony12 | Protocol::Sony15 | Protocol::Sony20 => {
                Decoder::Sony(SonyDecoder::new(protocol))
            }
            Protocol::Rc5 => Decoder::Rc5,
            Protocol::Rc6 => Decoder::Rc6,
            Protocol::Mce => Decoder::Mce,
        }
    }

    /// NEC decoder. In extended mode a failed address check passes the raw
    /// 16 bit address on instead of rejecting the block.
    pub fn nec(extended: bool) -> Self {
        Decoder::Nec(NecDecoder::new(extended))
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            Decoder::Nec(_) => Protocol::Nec,
            Decoder::Samsung => Protocol::Samsung,
            Decoder::Sony(sony) => sony.protocol(),
            Decoder::Rc5 => Protocol::Rc5,
            Decoder::Rc6 => Protocol::Rc6,
            Decoder::Mce => Protocol::Mce,
        }
    }

    pub fn max_edges(&self) -> usize {
        self.protocol().spec().max_edges
    }

    /// End of block timeout in milliseconds
    pub fn tblock_ms(&self) -> u32 {
        match self {
            Decoder::Nec(nec) => nec.tblock_ms(),
            other => other.protocol().spec().tblock_ms,
        }
    }

    pub fn decode(&mut self, edges: &[u32]) -> DecodeResult {
        let result = match self {
            Decoder::Nec(nec) => nec.decode(edges),
            Decoder::Samsung => samsung::decode(edges),
            Decoder::Sony(sony) => sony.decode(edges),
            Decoder::Rc5 => rc5::decode(edges),
            Decoder::Rc6 => rc6::decode(edges),
            Decoder::Mce => mce::decode(edges),
        };

        match &result {
            Ok(frame) => log::debug!("{}: {:?}", self.protocol(), frame),
            Err(err) => log::debug!("{}: {} ({} edges)", self.protocol(), err, edges.len()),
        }

        result
    }
}

pub(crate) fn check_overrun(edges: &[u32], spec: &ProtocolSpec) -> Result<(), DecodeError> {
    if edges.len() > spec.max_edges {
        return Err(DecodeError::Overrun);
    }
    Ok(())
}

/// Leading intervals against the protocol header windows
pub(crate) fn check_header(edges: &[u32], spec: &ProtocolSpec) -> Result<(), DecodeError> {
    for (i, window) in spec.header.iter().enumerate() {
        let w = width(edges, i).ok_or(DecodeError::BadStart)?;
        if !window.contains(w) {
            log::trace!("bad start: interval {} width {} {:?}", i, w, window);
            return Err(DecodeError::BadStart);
        }
    }
    Ok(())
}

/// Width of a body interval, which must exist and lie within `window`
pub(crate) fn body_width(edges: &[u32], i: usize, window: Window) -> Result<u32, DecodeError> {
    let w = width(edges, i).ok_or(DecodeError::BadBlock)?;
    if !window.contains(w) {
        log::trace!("bad block: interval {} width {}", i, w);
        return Err(DecodeError::BadBlock);
    }
    Ok(w)
}
