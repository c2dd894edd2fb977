//! Philips RC-6 mode 0
//!
//! ```text
//! leader  2666 mark, 889 space
//! start   1, mode 000, 444 us half bits
//! trailer toggle bit, 889 us half bits
//! data    8 address bits, 8 command bits, MSB first
//! ```
//! A one is a mark then a space, the opposite of RC-5.

use crate::decoder::{body_width, check_header, check_overrun, DecodeResult, Frame};
use crate::error::DecodeError;
use crate::protocol::Protocol;
use crate::timing::Window;

/// Interval holding the second half of the last mode bit
const FIRST_BODY_INTERVAL: usize = 8;
/// Intervals next to the trailer may include one of its 889 us halves
const TRAILER_WINDOW: Window = Window::new(222, 1555);

pub fn decode(edges: &[u32]) -> DecodeResult {
    let spec = Protocol::Rc6.spec();
    check_overrun(edges, spec)?;
    check_header(edges, spec)?;
    if edges.len() < spec.min_edges {
        return Err(DecodeError::BadBlock);
    }

    // Interval x starts at the second half of the previous bit. A short one
    // means the next bit repeats it, a long one means it flips.
    let mut x = FIRST_BODY_INTERVAL;
    let mut bit = 0;
    let mut value = 0u32;

    // Mode bit 0 into the toggle bit, half widths 444 and 889
    let w = body_width(edges, x, TRAILER_WINDOW)?;
    step(&mut bit, &mut x, w >= 889);
    value = value << 1 | bit;

    // Toggle bit into the first data bit, half widths 889 and 444
    let w = body_width(edges, x, TRAILER_WINDOW)?;
    step(&mut bit, &mut x, w >= 1111);
    value = value << 1 | bit;

    for _ in 1..spec.bits {
        let w = body_width(edges, x, spec.body)?;
        step(&mut bit, &mut x, w >= spec.threshold);
        value = value << 1 | bit;
    }
    log::trace!("rc6 {:#07x} from {} intervals", value, x);

    let code = value & 0xff;
    let address = (value >> 8) & 0xff;
    let toggle = (value >> 16) & 1;

    Frame::command(code, address, toggle)
}

fn step(bit: &mut u32, x: &mut usize, long: bool) {
    if long {
        *bit ^= 1;
        *x += 1;
    } else {
        *x += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Merges (level, duration) halves into edges, the trailing space leaves
    /// no edge
    fn from_halves(halves: &[(bool, u32)]) -> Vec<u32> {
        let mut merged: Vec<(bool, u32)> = Vec::new();
        for &(level, d) in halves {
            match merged.last_mut() {
                Some(last) if last.0 == level => last.1 += d,
                _ => merged.push((level, d)),
            }
        }
        if let Some((false, _)) = merged.last() {
            merged.pop();
        }

        let mut t = 0;
        let mut edges = vec![t];
        for (_, d) in merged {
            t += d;
            edges.push(t);
        }
        edges
    }

    fn bit(halves: &mut Vec<(bool, u32)>, one: bool, half: u32) {
        halves.push((one, half));
        halves.push((!one, half));
    }

    fn frame(address: u32, command: u32, toggle: bool) -> Vec<u32> {
        let mut halves = vec![(true, 2666), (false, 889)];
        bit(&mut halves, true, 444);
        for _ in 0..3 {
            bit(&mut halves, false, 444);
        }
        bit(&mut halves, toggle, 889);
        let data = address << 8 | command;
        for i in (0..16).rev() {
            bit(&mut halves, data >> i & 1 == 1, 444);
        }
        from_halves(&halves)
    }

    #[test]
    fn decodes_address_command_toggle() {
        assert_eq!(decode(&frame(0x10, 0x0b, false)), Frame::command(0x0b, 0x10, 0));
        assert_eq!(decode(&frame(0x10, 0x0b, true)), Frame::command(0x0b, 0x10, 1));
    }

    #[test]
    fn extreme_values() {
        assert_eq!(decode(&frame(0xff, 0xff, true)), Frame::command(0xff, 0xff, 1));
        assert_eq!(decode(&frame(0, 0, false)), Frame::command(0, 0, 0));
        assert_eq!(decode(&frame(0xaa, 0x55, false)), Frame::command(0x55, 0xaa, 0));
    }

    #[test]
    fn bad_leader() {
        let mut edges = frame(1, 2, false);
        for t in edges.iter_mut().skip(1) {
            *t -= 1500;
        }
        assert_eq!(decode(&edges), Err(DecodeError::BadStart));
    }

    #[test]
    fn truncated() {
        let edges = frame(0x10, 0x0b, false);
        assert_eq!(decode(&edges[..20]), Err(DecodeError::BadBlock));
    }

    #[test]
    fn overrun() {
        let mut edges = frame(0, 0, false);
        while edges.len() <= 44 {
            let last = *edges.last().unwrap();
            edges.push(last + 444);
        }
        assert_eq!(decode(&edges), Err(DecodeError::Overrun));
    }
}
