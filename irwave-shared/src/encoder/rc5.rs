use crate::protocol::Protocol;
use crate::sequence::EncodeCursor;

/// Command bit 6 goes out inverted in the second start bit
pub fn encode(cursor: &mut EncodeCursor, address: u32, data: u32, toggle: u32) {
    let frame = (data & 0x3f)
        | (address & 0x1f) << 6
        | ((data & 0x40) ^ 0x40) << 6
        | (toggle & 1) << 11;
    let half = Protocol::Rc5.spec().unit;

    // First start bit, its leading space is invisible
    cursor.append(&[half]);
    for i in (0..13).rev() {
        let one = frame >> i & 1 == 1;
        cursor.append_biphase(!one, half);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: u32 = 889;

    #[test]
    fn start_bits_merge() {
        let mut cursor = EncodeCursor::new();
        // second start bit cleared, first half is a mark
        encode(&mut cursor, 0, 0x40, 0);
        let seq = cursor.finish().unwrap();
        assert_eq!(seq.get(0), 2 * HALF);

        let mut cursor = EncodeCursor::new();
        encode(&mut cursor, 0, 0, 0);
        let seq = cursor.finish().unwrap();
        assert_eq!(&seq.intervals()[..3], &[HALF, HALF, 2 * HALF]);
    }
}
