//! Microsoft MCE
//!
//! 2000 us mark, 1000 us space and a 500 us start mark, then 16 biphase bits
//! of 1000 us, LSB first. A one is a space then a mark.
//!
//! ```text
//! bits 0..4   address
//! bits 4..6   toggle
//! bits 6..12  command
//! bits 12..16 checksum
//! ```

use crate::decoder::{body_width, check_header, check_overrun, DecodeResult, Frame};
use crate::error::DecodeError;
use crate::protocol::Protocol;

/// The start mark, which ends like a one
const START_INTERVAL: usize = 2;

/// Four plus the number of set bits in the low 12 bits, kept to a nibble
pub fn checksum(value: u32) -> u32 {
    (4 + (value & 0xfff).count_ones()) & 0xf
}

pub fn decode(edges: &[u32]) -> DecodeResult {
    let spec = Protocol::Mce.spec();
    check_overrun(edges, spec)?;
    check_header(edges, spec)?;
    if edges.len() < spec.min_edges {
        return Err(DecodeError::BadBlock);
    }

    let mut x = START_INTERVAL;
    let mut bit = 1;
    let mut value = 0u32;
    for i in 0..spec.bits {
        let w = body_width(edges, x, spec.body)?;
        if w < spec.threshold {
            x += 2;
        } else {
            bit ^= 1;
            x += 1;
        }
        value |= bit << i;
    }

    if value >> 12 != checksum(value) {
        log::trace!("mce {:#06x}: checksum {:#x}", value, checksum(value));
        return Err(DecodeError::BadData);
    }

    let code = (value >> 6) & 0x3f;
    let address = value & 0xf;
    let toggle = (value >> 4) & 0x3;

    Frame::command(code, address, toggle)
}
