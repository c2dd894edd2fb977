//! Infrared remote control codec: timeline capture and decoding on the
//! receive side, encoding and timer driven playback on the transmit side.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod protocol;
pub mod receiver;
pub mod sequence;
pub mod timing;
pub mod transmit;

pub use decoder::{Command, DecodeResult, Decoder, Frame};
pub use error::{DecodeError, Field, TransmitError};
pub use protocol::Protocol;
pub use receiver::{EdgeTimeline, Handler, Receiver, ReceiverState};
pub use sequence::{EncodeCursor, PulseSequence, STOP};
pub use transmit::{BusyPolicy, Carrier, Transmitter, TxState};
