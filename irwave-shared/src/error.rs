use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::Protocol;

/// Reasons a captured block was rejected. None of them are fatal, the
/// receiver is ready for the next block.
#[derive(Serialize, Deserialize, Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DecodeError {
    #[error("invalid start pulse")]
    BadStart,
    #[error("bad block")]
    BadBlock,
    #[error("bad repeat code")]
    BadRepeat,
    #[error("overrun")]
    Overrun,
    #[error("invalid data")]
    BadData,
    #[error("invalid address")]
    BadAddress,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Field {
    Address,
    Data,
    Toggle,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Address => "address",
            Field::Data => "data",
            Field::Toggle => "toggle",
        })
    }
}

#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TransmitError {
    #[error("{field} {value:#x} out of range, {protocol} allows at most {max:#x}")]
    FieldOutOfRange {
        protocol: Protocol,
        field: Field,
        value: u32,
        max: u32,
    },
    #[error("{0} has no repeat frame")]
    Unsupported(Protocol),
    #[error("transmitter busy")]
    Busy,
    #[error("pulse sequence does not fit the buffer")]
    SequenceOverflow,
}
