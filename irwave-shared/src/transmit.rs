//! Timer driven transmitter.
//!
//! The driver plays a `PulseSequence` one interval per timer expiry. It owns
//! the sequence while playing, a new frame is only accepted when idle or when
//! the busy policy allows preempting the one in flight.

use core::time::Duration;

use crate::encoder;
use crate::error::TransmitError;
use crate::protocol::Protocol;
use crate::sequence::{PulseSequence, STOP};

/// Output stage: the modulated carrier and a one shot timer.
pub trait Carrier {
    fn set_carrier(&mut self, on: bool);

    /// Arm the timer, `on_timer` must be called when it expires
    fn schedule_next(&mut self, after: Duration);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TxState {
    Idle,
    Loading,
    Playing,
}

/// What to do with a frame submitted while another is playing
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BusyPolicy {
    Reject,
    /// Stop the frame in flight and start the new one
    Preempt,
}

impl Default for BusyPolicy {
    fn default() -> Self {
        BusyPolicy::Reject
    }
}

pub struct Transmitter<C> {
    protocol: Protocol,
    carrier: C,
    policy: BusyPolicy,
    state: TxState,
    sequence: PulseSequence,
    position: usize,
}

impl<C: Carrier> Transmitter<C> {
    pub fn new(protocol: Protocol, carrier: C) -> Self {
        Transmitter::with_policy(protocol, carrier, BusyPolicy::default())
    }

    pub fn with_policy(protocol: Protocol, carrier: C, policy: BusyPolicy) -> Self {
        Transmitter {
            protocol,
            carrier,
            policy,
            state: TxState::Idle,
            sequence: PulseSequence::empty(),
            position: 0,
        }
    }

    /// Encode a frame and start playing it
    pub fn transmit(
        &mut self,
        address: u32,
        data: u32,
        toggle: u32,
        validate: bool,
    ) -> Result<(), TransmitError> {
        let sequence = encoder::encode(self.protocol, address, data, toggle, validate)?;
        self.claim()?;
        self.start(sequence);
        Ok(())
    }

    /// Send the repeat frame of protocols that have one. Never preempts.
    pub fn repeat(&mut self) -> Result<(), TransmitError> {
        let sequence = encoder::repeat(self.protocol)?;
        if self.busy() {
            return Err(TransmitError::Busy);
        }
        self.claim()?;
        self.start(sequence);
        Ok(())
    }

    /// Timer expiry
    pub fn on_timer(&mut self) {
        if self.state == TxState::Playing {
            self.step();
        }
    }

    pub fn busy(&self) -> bool {
        self.state != TxState::Idle
    }

    /// Abort playback with the carrier off
    pub fn cancel(&mut self) {
        if self.state != TxState::Idle {
            log::debug!("cancel at interval {}", self.position);
        }
        self.carrier.set_carrier(false);
        self.state = TxState::Idle;
        self.position = 0;
    }

    pub fn state(&self) -> TxState {
        self.state
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// The last loaded sequence
    pub fn sequence(&self) -> &PulseSequence {
        &self.sequence
    }

    pub fn carrier(&self) -> &C {
        &self.carrier
    }

    pub fn carrier_mut(&mut self) -> &mut C {
        &mut self.carrier
    }

    fn claim(&mut self) -> Result<(), TransmitError> {
        if self.state != TxState::Idle {
            match self.policy {
                BusyPolicy::Reject => return Err(TransmitError::Busy),
                BusyPolicy::Preempt => self.cancel(),
            }
        }
        self.state = TxState::Loading;
        Ok(())
    }

    fn start(&mut self, sequence: PulseSequence) {
        log::debug!(
            "{}: playing {} intervals",
            self.protocol,
            sequence.len()
        );
        self.sequence = sequence;
        self.position = 0;
        self.state = TxState::Playing;
        self.step();
    }

    fn step(&mut self) {
        let duration = self.sequence.get(self.position);
        if duration == STOP {
            self.carrier.set_carrier(false);
            self.state = TxState::Idle;
            log::debug!("{}: done", self.protocol);
            return;
        }

        self.carrier.set_carrier(self.position % 2 == 0);
        self.carrier
            .schedule_next(Duration::from_micros(u64::from(duration)));
        self.position += 1;
    }
}
