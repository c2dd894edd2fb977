//! Carrier on/off durations and the cursor that builds them.
//!
//! A sequence alternates carrier on (even index) and carrier off (odd index)
//! and ends with a zero length `STOP` sentinel.

use heapless::Vec;

use crate::error::TransmitError;

/// End of data
pub const STOP: u32 = 0;

/// Longest sequence is a NEC frame: 67 intervals and the sentinel
pub const SEQUENCE_CAPACITY: usize = 72;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PulseSequence {
    durations: Vec<u32, SEQUENCE_CAPACITY>,
}

impl PulseSequence {
    /// A sequence with nothing but the sentinel
    pub fn empty() -> Self {
        let mut durations = Vec::new();
        durations.push(STOP).ok();
        PulseSequence { durations }
    }

    /// Durations including the trailing sentinel
    pub fn as_slice(&self) -> &[u32] {
        &self.durations
    }

    /// Durations without the sentinel
    pub fn intervals(&self) -> &[u32] {
        let end = self.durations.len().saturating_sub(1);
        &self.durations[..end]
    }

    /// Duration at `index`, `STOP` past the end
    pub fn get(&self, index: usize) -> u32 {
        self.durations.get(index).copied().unwrap_or(STOP)
    }

    pub fn len(&self) -> usize {
        self.intervals().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total duration in microseconds
    pub fn duration_us(&self) -> u32 {
        self.intervals().iter().sum()
    }

    /// Edge timestamps a receiver would record for this sequence, starting at
    /// `start`. A trailing space has no closing edge.
    pub fn edges(&self, start: u32) -> impl Iterator<Item = u32> + '_ {
        let intervals = self.intervals();
        let visible = if intervals.len() % 2 == 0 {
            intervals.len().saturating_sub(1)
        } else {
            intervals.len()
        };

        core::iter::once(start).chain(intervals[..visible].iter().scan(start, |t, d| {
            *t = t.wrapping_add(*d);
            Some(*t)
        }))
    }
}

impl Default for PulseSequence {
    fn default() -> Self {
        PulseSequence::empty()
    }
}

/// Builds a `PulseSequence` while tracking the notional carrier state.
pub struct EncodeCursor {
    durations: Vec<u32, SEQUENCE_CAPACITY>,
    carrier: bool,
    overflow: bool,
}

impl EncodeCursor {
    pub fn new() -> Self {
        EncodeCursor {
            durations: Vec::new(),
            carrier: false,
            overflow: false,
        }
    }

    /// Carrier state at the end of the last appended interval
    pub fn carrier(&self) -> bool {
        self.carrier
    }

    pub fn position(&self) -> usize {
        self.durations.len()
    }

    /// Append intervals, each one flips the carrier
    pub fn append(&mut self, times: &[u32]) {
        for &t in times {
            if self.durations.push(t).is_err() {
                self.overflow = true;
            }
            self.carrier = !self.carrier;
            log::trace!("append {} carrier {}", t, self.carrier);
        }
    }

    /// Lengthen the last interval. The carrier state is unchanged.
    pub fn extend_last(&mut self, t: u32) {
        log::trace!("extend {}", t);
        if let Some(last) = self.durations.last_mut() {
            *last += t;
        }
    }

    /// Append one biphase bit cell of two `half` periods.
    ///
    /// When the first half has the polarity the carrier is already in, it
    /// merges into the previous interval.
    pub fn append_biphase(&mut self, first_half_on: bool, half: u32) {
        if first_half_on == self.carrier {
            self.extend_last(half);
            self.append(&[half]);
        } else {
            self.append(&[half, half]);
        }
    }

    /// Terminate with the sentinel
    pub fn finish(mut self) -> Result<PulseSequence, TransmitError> {
        if self.overflow || self.durations.push(STOP).is_err() {
            return Err(TransmitError::SequenceOverflow);
        }
        Ok(PulseSequence {
            durations: self.durations,
        })
    }
}

impl Default for EncodeCursor {
    fn default() -> Self {
        EncodeCursor::new()
    }
}
