//! Interval widths and tolerance windows.

/// Open interval `min < width < max` in microseconds
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Window {
    pub min: u32,
    pub max: u32,
}

impl Window {
    pub const fn new(min: u32, max: u32) -> Self {
        Window { min, max }
    }

    /// Anything longer than `min`
    pub const fn above(min: u32) -> Self {
        Window { min, max: u32::MAX }
    }

    /// Within 20% of `nominal`
    pub const fn near(nominal: u32) -> Self {
        Window {
            min: nominal - nominal / 5,
            max: nominal + nominal / 5,
        }
    }

    pub fn contains(&self, width: u32) -> bool {
        self.min < width && width < self.max
    }
}

/// Width of interval `i`, the time between edge `i` and edge `i + 1`.
///
/// Timestamps come from a free running microsecond counter, the subtraction
/// wraps.
pub fn width(edges: &[u32], i: usize) -> Option<u32> {
    let start = *edges.get(i)?;
    let end = *edges.get(i + 1)?;
    Some(end.wrapping_sub(start))
}
