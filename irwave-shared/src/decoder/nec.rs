//! NEC
//!
//! ```text
//! data:   9000 mark, 4500 space, 32 bits LSB first, 563 burst
//! repeat: 9000 mark, 2250 space, 563 burst
//! bit:    563 mark then 563 space (0) or 1687 space (1)
//! ```
//! Byte order on the wire is address, !address, command, !command.

use crate::decoder::{check_header, check_overrun, DecodeResult, Frame};
use crate::error::DecodeError;
use crate::protocol::Protocol;
use crate::timing::{width, Window};

/// Space after the leading mark of a repeat code
const REPEAT_SPACE: Window = Window::new(1700, 3001);
const EXTENDED_TBLOCK_MS: u32 = 80;

pub struct NecDecoder {
    extended: bool,
    last_address: u32,
}

impl NecDecoder {
    pub fn new(extended: bool) -> Self {
        NecDecoder {
            extended,
            last_address: 0,
        }
    }

    pub fn extended(&self) -> bool {
        self.extended
    }

    /// Address reported with the next repeat code
    pub fn last_address(&self) -> u32 {
        self.last_address
    }

    pub fn tblock_ms(&self) -> u32 {
        if self.extended {
            EXTENDED_TBLOCK_MS
        } else {
            Protocol::Nec.spec().tblock_ms
        }
    }

    pub fn decode(&mut self, edges: &[u32]) -> DecodeResult {
        let spec = Protocol::Nec.spec();
        check_overrun(edges, spec)?;

        let lead = width(edges, 0).ok_or(DecodeError::BadStart)?;
        if !spec.header[0].contains(lead) {
            return Err(DecodeError::BadStart);
        }

        let space = width(edges, 1).ok_or(DecodeError::BadStart)?;
        if REPEAT_SPACE.contains(space) {
            // A repeat code is the shortest valid block
            return if edges.len() == spec.min_edges {
                Ok(Frame::Repeat {
                    address: self.last_address,
                })
            } else {
                Err(DecodeError::BadRepeat)
            };
        }

        check_header(edges, spec)?;
        if edges.len() < spec.max_edges {
            return Err(DecodeError::BadBlock);
        }

        // Marks are constant, only the spaces carry data
        let mut raw = 0u32;
        for bit in 0..spec.bits as usize {
            let space = width(edges, 3 + 2 * bit).ok_or(DecodeError::BadBlock)?;
            if space > spec.threshold {
                raw |= 1 << bit;
            }
        }
        log::trace!("nec raw {:#010x}", raw);

        self.validate(raw)
    }

    fn validate(&mut self, raw: u32) -> DecodeResult {
        let low = raw & 0xff;
        let address = if (raw >> 8) & 0xff == low ^ 0xff {
            low
        } else if self.extended {
            raw & 0xffff
        } else {
            return Err(DecodeError::BadAddress);
        };
        self.last_address = address;

        let code = (raw >> 16) & 0xff;
        if (raw >> 24) & 0xff != code ^ 0xff {
            return Err(DecodeError::BadData);
        }

        Frame::command(code, address, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Edge times for a frame with the given raw 32 bit payload
    fn frame(raw: u32) -> Vec<u32> {
        let mut widths = vec![9000, 4500];
        for bit in 0..32 {
            widths.push(563);
            widths.push(if raw >> bit & 1 == 1 { 1687 } else { 563 });
        }
        widths.push(563);
        edges(&widths)
    }

    fn edges(widths: &[u32]) -> Vec<u32> {
        let mut t = 5000;
        let mut edges = vec![t];
        for w in widths {
            t += w;
            edges.push(t);
        }
        edges
    }

    fn raw(address: u32, code: u32) -> u32 {
        address | (address ^ 0xff) << 8 | code << 16 | (code ^ 0xff) << 24
    }

    #[test]
    fn short_address_frame() {
        let edges = frame(raw(0x01, 0x07));
        assert_eq!(edges.len(), 68);

        let mut decoder = NecDecoder::new(false);
        assert_eq!(decoder.decode(&edges), Frame::command(0x07, 0x01, 0));
    }

    #[test]
    fn repeat_reports_last_address() {
        let mut decoder = NecDecoder::new(false);
        decoder.decode(&frame(raw(0x42, 0x10))).unwrap();

        let repeat = edges(&[9000, 2250, 563]);
        assert_eq!(repeat.len(), 4);
        assert_eq!(
            decoder.decode(&repeat),
            Ok(Frame::Repeat { address: 0x42 })
        );
    }

    #[test]
    fn repeat_with_wrong_edge_count() {
        let mut decoder = NecDecoder::new(false);
        let repeat = edges(&[9000, 2250, 563, 563]);
        assert_eq!(decoder.decode(&repeat), Err(DecodeError::BadRepeat));
    }

    #[test]
    fn short_lead_is_bad_start() {
        let mut decoder = NecDecoder::new(false);
        let mut edges = frame(raw(0x01, 0x07));
        edges[0] = edges[1] - 3000;
        assert_eq!(decoder.decode(&edges), Err(DecodeError::BadStart));
    }

    #[test]
    fn truncated_frame_is_bad_block() {
        let mut decoder = NecDecoder::new(false);
        let edges = frame(raw(0x01, 0x07));
        assert_eq!(decoder.decode(&edges[..40]), Err(DecodeError::BadBlock));
    }

    #[test]
    fn overrun() {
        let mut decoder = NecDecoder::new(false);
        let mut edges = frame(raw(0x01, 0x07));
        let last = *edges.last().unwrap();
        edges.push(last + 563);
        assert_eq!(decoder.decode(&edges), Err(DecodeError::Overrun));
    }

    #[test]
    fn bad_command_complement() {
        let mut decoder = NecDecoder::new(false);
        let bad = raw(0x01, 0x07) ^ 0x0100_0000;
        assert_eq!(decoder.decode(&frame(bad)), Err(DecodeError::BadData));
    }

    #[test]
    fn sixteen_bit_address_needs_extended_mode() {
        let raw = 0x1234 | 0x07 << 16 | (0x07 ^ 0xff) << 24;

        let mut standard = NecDecoder::new(false);
        assert_eq!(standard.decode(&frame(raw)), Err(DecodeError::BadAddress));

        let mut extended = NecDecoder::new(true);
        assert_eq!(extended.decode(&frame(raw)), Frame::command(0x07, 0x1234, 0));
        assert_eq!(extended.last_address(), 0x1234);
        assert_eq!(extended.tblock_ms(), 80);
    }
}
