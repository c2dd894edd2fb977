use std::time::Duration;

use irwave_shared::{Carrier, Transmitter};

/// Carrier that records level changes on a simulated microsecond clock
/// instead of driving hardware.
#[derive(Debug, Default)]
pub struct TraceCarrier {
    now: u64,
    next: Option<u64>,
    level: bool,
    changes: Vec<(u64, bool)>,
}

impl TraceCarrier {
    pub fn new() -> Self {
        TraceCarrier::default()
    }

    /// Level changes so far, as (timestamp, carrier on)
    pub fn changes(&self) -> &[(u64, bool)] {
        &self.changes
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock to the pending timer expiry. Returns false when no
    /// timer is armed.
    pub fn advance(&mut self) -> bool {
        match self.next.take() {
            Some(t) => {
                self.now = t;
                true
            }
            None => false,
        }
    }

    /// Let time pass with nothing scheduled
    pub fn wait_until(&mut self, t: u64) {
        if t > self.now {
            self.now = t;
        }
    }
}

impl Carrier for TraceCarrier {
    fn set_carrier(&mut self, on: bool) {
        if on != self.level {
            self.level = on;
            self.changes.push((self.now, on));
        }
    }

    fn schedule_next(&mut self, after: Duration) {
        self.next = Some(self.now + after.as_micros() as u64);
    }
}

/// Run the transmitter timer until the frame in flight is done
pub fn run_to_idle(tx: &mut Transmitter<TraceCarrier>) {
    while tx.busy() {
        if !tx.carrier_mut().advance() {
            log::warn!("transmitter busy with no timer armed");
            tx.cancel();
            break;
        }
        tx.on_timer();
    }
}
