use crate::encoder::nec::pulse_distance;
use crate::protocol::Protocol;
use crate::sequence::EncodeCursor;

const HEADER: u32 = 4500;

pub fn encode(cursor: &mut EncodeCursor, address: u32, data: u32) {
    let address = if address < 0x100 {
        address | address << 8
    } else {
        address & 0xffff
    };
    let data = data & 0xff;

    cursor.append(&[HEADER, HEADER]);
    pulse_distance(cursor, Protocol::Samsung, address | (data | (data ^ 0xff) << 8) << 16);
}
