use crate::protocol::Protocol;
use crate::sequence::EncodeCursor;

const LEADER: [u32; 2] = [2666, 889];

/// The toggle bit runs at twice the unit
pub fn encode(cursor: &mut EncodeCursor, address: u32, data: u32, toggle: u32) {
    let half = Protocol::Rc6.spec().unit;

    cursor.append(&LEADER);
    // Start bit 1, mode 000
    cursor.append_biphase(true, half);
    for _ in 0..3 {
        cursor.append_biphase(false, half);
    }
    cursor.append_biphase(toggle & 1 == 1, 2 * half);

    let frame = (address & 0xff) << 8 | (data & 0xff);
    for i in (0..16).rev() {
        cursor.append_biphase(frame >> i & 1 == 1, half);
    }
}
