//! Philips RC-5
//!
//! 14 Manchester coded bits of 1778 us, MSB first: two start bits, toggle,
//! 5 address bits and 6 command bits. A one is a space then a mark.
//!
//! The second start bit carries the inverted command bit 6 (RC-5X), so plain
//! RC-5 frames decode to commands below 0x40.

use crate::decoder::{body_width, check_overrun, DecodeResult, Frame};
use crate::error::DecodeError;
use crate::protocol::Protocol;

const FRAME_BITS: u32 = 14;
/// Half bits after the leading space of the first start bit
const CAPTURED_HALVES: u32 = 2 * FRAME_BITS - 1;

pub fn decode(edges: &[u32]) -> DecodeResult {
    let spec = Protocol::Rc5.spec();
    check_overrun(edges, spec)?;
    if edges.len() < spec.min_edges {
        return Err(DecodeError::BadStart);
    }

    // Rebuild the half bit stream, MSB first. Intervals alternate mark and
    // space starting with the mark of the first start bit.
    let mut stream = 0u64;
    let mut halves = 0;
    let mut level = 1u64;
    for i in 0..edges.len() - 1 {
        let w = body_width(edges, i, spec.body)?;
        let count = if w < spec.threshold { 1 } else { 2 };
        for _ in 0..count {
            stream = stream << 1 | level;
            halves += 1;
        }
        level ^= 1;
    }

    // A trailing zero bit ends on a space which leaves no edge
    if halves == CAPTURED_HALVES - 1 {
        stream <<= 1;
        halves += 1;
    }
    if halves != CAPTURED_HALVES {
        log::trace!("rc5: {} half bits", halves);
        return Err(DecodeError::BadBlock);
    }

    let mut value = 0u32;
    let mut pos = CAPTURED_HALVES as i32 - 1;
    for _ in 0..FRAME_BITS {
        let first = bit_at(stream, pos + 1);
        let second = bit_at(stream, pos);
        if first == second {
            return Err(DecodeError::BadBlock);
        }
        value = value << 1 | second;
        pos -= 2;
    }

    let mut code = value & 0x3f;
    if value >> 12 & 1 == 0 {
        code |= 0x40;
    }
    let address = (value >> 6) & 0x1f;
    let toggle = (value >> 11) & 1;

    Frame::command(code, address, toggle)
}

fn bit_at(stream: u64, pos: i32) -> u32 {
    if pos < 0 {
        return 0;
    }
    (stream >> pos) as u32 & 1
}
