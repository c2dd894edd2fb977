//! Sony SIRC, pulse width coded, LSB first.
//!
//! Header is a 2400 us mark. Each bit is a 600 us space followed by a mark of
//! 600 us (0) or 1200 us (1). Layout is 7 command bits then 5 address bits
//! (12 bit), 8 address bits (15 bit) or 5 address and 8 extended bits (20 bit).

use crate::decoder::{check_header, check_overrun, DecodeResult, Frame};
use crate::error::DecodeError;
use crate::protocol::Protocol;
use crate::timing::width;

pub struct SonyDecoder {
    protocol: Protocol,
}

impl SonyDecoder {
    pub fn new(protocol: Protocol) -> Self {
        SonyDecoder { protocol }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn decode(&self, edges: &[u32]) -> DecodeResult {
        let spec = self.protocol.spec();
        check_overrun(edges, spec)?;
        check_header(edges, spec)?;

        let bits = match edges.len() {
            26 => 12,
            32 => 15,
            42 => 20,
            _ => return Err(DecodeError::BadBlock),
        };

        let mut value = 0u32;
        for bit in 0..bits {
            let mark = width(edges, 2 + 2 * bit).ok_or(DecodeError::BadBlock)?;
            if mark > spec.threshold {
                value |= 1 << bit;
            }
        }

        let code = value & 0x7f;
        let rest = value >> 7;
        let (address, extension) = if bits == 20 {
            (rest & 0x1f, (rest >> 5) & 0xff)
        } else {
            (rest & 0xff, 0)
        };

        Frame::command(code, address, extension)
    }
}
