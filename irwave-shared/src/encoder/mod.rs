//! Frame encoders.
//!
//! Each encoder turns a field tuple into a `PulseSequence`, the durations the
//! transmitter plays out with the carrier alternately on and off.

use crate::error::{Field, TransmitError};
use crate::protocol::Protocol;
use crate::sequence::{EncodeCursor, PulseSequence};

pub mod mce;
pub mod nec;
pub mod rc5;
pub mod rc6;
pub mod samsung;
pub mod sony;

/// Encode one frame. With `validate` set, fields wider than the protocol
/// allows are rejected instead of silently truncated.
pub fn encode(
    protocol: Protocol,
    address: u32,
    data: u32,
    toggle: u32,
    validate: bool,
) -> Result<PulseSequence, TransmitError> {
    if validate {
        check_fields(protocol, address, data, toggle)?;
    }

    let mut cursor = EncodeCursor::new();
    match protocol {
        Protocol::Nec => nec::encode(&mut cursor, address, data),
        Protocol::Samsung => samsung::encode(&mut cursor, address, data),
        Protocol::Sony12 | Protocol::Sony15 | Protocol::Sony20 => {
            sony::encode(&mut cursor, protocol, address, data, toggle)
        }
        Protocol::Rc5 => rc5::encode(&mut cursor, address, data, toggle),
        Protocol::Rc6 => rc6::encode(&mut cursor, address, data, toggle),
        Protocol::Mce => mce::encode(&mut cursor, address, data, toggle),
    }

    let sequence = cursor.finish()?;
    log::debug!(
        "{}: {} intervals, {} us",
        protocol,
        sequence.len(),
        sequence.duration_us()
    );
    Ok(sequence)
}

/// The repeat frame sent while a button is held
pub fn repeat(protocol: Protocol) -> Result<PulseSequence, TransmitError> {
    if !protocol.has_repeat() {
        return Err(TransmitError::Unsupported(protocol));
    }
    let mut cursor = EncodeCursor::new();
    nec::repeat(&mut cursor);
    cursor.finish()
}

pub fn check_fields(
    protocol: Protocol,
    address: u32,
    data: u32,
    toggle: u32,
) -> Result<(), TransmitError> {
    let limits = protocol.spec().limits;
    let fields = [
        (Field::Address, address, limits.address),
        (Field::Data, data, limits.data),
        (Field::Toggle, toggle, limits.toggle),
    ];

    for &(field, value, max) in fields.iter() {
        if value > max {
            return Err(TransmitError::FieldOutOfRange {
                protocol,
                field,
                value,
                max,
            });
        }
    }
    Ok(())
}
