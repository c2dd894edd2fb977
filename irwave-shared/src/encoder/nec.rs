use crate::protocol::Protocol;
use crate::sequence::EncodeCursor;

const LEAD_MARK: u32 = 9000;
const LEAD_SPACE: u32 = 4500;
const REPEAT_SPACE: u32 = 2250;
const ONE_SPACE: u32 = 1687;

/// An 8 bit address is sent with its complement, wider ones as is
pub fn encode(cursor: &mut EncodeCursor, address: u32, data: u32) {
    let address = if address < 0x100 {
        address | (address ^ 0xff) << 8
    } else {
        address & 0xffff
    };
    let data = data & 0xff;

    cursor.append(&[LEAD_MARK, LEAD_SPACE]);
    pulse_distance(cursor, Protocol::Nec, address | (data | (data ^ 0xff) << 8) << 16);
}

pub fn repeat(cursor: &mut EncodeCursor) {
    cursor.append(&[LEAD_MARK, REPEAT_SPACE, Protocol::Nec.spec().unit]);
}

/// 32 bits LSB first as burst and space pairs, then the stop burst
pub(crate) fn pulse_distance(cursor: &mut EncodeCursor, protocol: Protocol, bits: u32) {
    let burst = protocol.spec().unit;
    for i in 0..32 {
        let space = if bits >> i & 1 == 1 { ONE_SPACE } else { burst };
        cursor.append(&[burst, space]);
    }
    cursor.append(&[burst]);
}
