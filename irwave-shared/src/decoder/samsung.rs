//! Samsung, a NEC variant with a 4500/4500 header and a 16 bit address.

use crate::decoder::{check_header, check_overrun, DecodeResult, Frame};
use crate::error::DecodeError;
use crate::protocol::Protocol;
use crate::timing::width;

/// Longer gaps end the frame
const MAX_INTERVAL: u32 = 10_000;

pub fn decode(edges: &[u32]) -> DecodeResult {
    let spec = Protocol::Samsung.spec();
    check_overrun(edges, spec)?;
    check_header(edges, spec)?;

    let intervals = (0..edges.len())
        .map_while(|i| width(edges, i))
        .take_while(|w| *w <= MAX_INTERVAL)
        .count();
    // Header, 32 bits and the stop burst
    if intervals != spec.min_edges - 1 {
        return Err(DecodeError::BadBlock);
    }

    let mut raw = 0u32;
    for bit in 0..spec.bits as usize {
        let space = width(edges, 3 + 2 * bit).ok_or(DecodeError::BadBlock)?;
        if space > spec.threshold {
            raw |= 1 << bit;
        }
    }

    // Devices with an 8 bit address send it twice
    let mut address = raw & 0xffff;
    if address & 0xff == address >> 8 {
        address &= 0xff;
    }
    let code = (raw >> 16) & 0xff;

    Frame::command(code, address, 0)
}
