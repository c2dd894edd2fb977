use crate::decoder::mce::checksum;
use crate::protocol::Protocol;
use crate::sequence::EncodeCursor;

pub fn encode(cursor: &mut EncodeCursor, address: u32, data: u32, toggle: u32) {
    let low = (data & 0x3f) << 6 | (toggle & 0x3) << 4 | (address & 0xf);
    let frame = low | checksum(low) << 12;
    let half = Protocol::Mce.spec().unit;

    // Header and start mark
    cursor.append(&[4 * half, 2 * half, half]);
    for i in 0..16 {
        let one = frame >> i & 1 == 1;
        cursor.append_biphase(!one, half);
    }
}
