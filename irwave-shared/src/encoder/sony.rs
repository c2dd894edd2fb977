use crate::protocol::Protocol;
use crate::sequence::EncodeCursor;

const HEADER: u32 = 2400;

/// 7 command bits then the address, LSB first. Only the 20 bit variant
/// carries the extended byte in `extension`.
pub fn encode(
    cursor: &mut EncodeCursor,
    protocol: Protocol,
    address: u32,
    data: u32,
    extension: u32,
) {
    let code = data & 0x7f;
    let value = match protocol {
        Protocol::Sony15 => code | (address & 0xff) << 7,
        Protocol::Sony20 => code | (address & 0x1f) << 7 | (extension & 0xff) << 12,
        _ => code | (address & 0x1f) << 7,
    };

    let unit = protocol.spec().unit;
    cursor.append(&[HEADER, unit]);
    for i in 0..protocol.spec().bits {
        let mark = if value >> i & 1 == 1 { 2 * unit } else { unit };
        cursor.append(&[mark, unit]);
    }
}
