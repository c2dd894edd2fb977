use core::fmt;

use serde::{Deserialize, Serialize};

use crate::timing::Window;

/// Protocol Id
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Protocol {
    Nec,
    Samsung,
    Sony12,
    Sony15,
    Sony20,
    Rc5,
    Rc6,
    Mce,
}

/// Largest value each field of a frame may carry
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FieldLimits {
    pub address: u32,
    pub data: u32,
    pub toggle: u32,
}

/// Timing and layout constants of a protocol.
///
/// Durations are in microseconds, `tblock_ms` is the end of block timeout armed
/// by the first edge of a burst. It must be longer than the longest valid frame
/// and shorter than the gap to the next frame.
#[derive(Debug)]
pub struct ProtocolSpec {
    pub name: &'static str,
    /// Data bits in a frame, not counting start or trailer bits
    pub bits: u32,
    pub min_edges: usize,
    pub max_edges: usize,
    pub tblock_ms: u32,
    /// Header intervals, in order, starting with the leading mark
    pub header: &'static [Window],
    /// Acceptable width of a body interval
    pub body: Window,
    /// Short/long split for body intervals
    pub threshold: u32,
    /// Nominal short interval used by the encoder
    pub unit: u32,
    pub carrier_hz: u32,
    pub duty_percent: u8,
    pub limits: FieldLimits,
}

const NEC_SPEC: ProtocolSpec = ProtocolSpec {
    name: "NEC",
    bits: 32,
    min_edges: 4,
    max_edges: 68,
    tblock_ms: 73,
    header: &[Window::above(4000), Window::above(3000)],
    body: Window::above(0),
    threshold: 1120,
    unit: 563,
    carrier_hz: 38_000,
    duty_percent: 33,
    limits: FieldLimits {
        address: 0xffff,
        data: 0xff,
        toggle: 0,
    },
};

const SAMSUNG_SPEC: ProtocolSpec = ProtocolSpec {
    name: "Samsung",
    bits: 32,
    min_edges: 68,
    max_edges: 68,
    tblock_ms: 80,
    header: &[Window::near(4500), Window::near(4500)],
    body: Window::above(0),
    threshold: 1000,
    unit: 563,
    carrier_hz: 38_000,
    duty_percent: 33,
    limits: FieldLimits {
        address: 0xffff,
        data: 0xff,
        toggle: 0,
    },
};

const SONY_HEADER: &[Window] = &[Window::new(1800, 3000), Window::new(350, 1000)];

const fn sony_spec(name: &'static str, bits: u32, limits: FieldLimits) -> ProtocolSpec {
    // 20 bit frames repeat every 45 ms so the timeout margin is tight
    let margin = if bits == 20 { 1 } else { 4 };
    ProtocolSpec {
        name,
        bits,
        min_edges: 26,
        max_edges: 2 + bits as usize * 2,
        tblock_ms: 3 + bits * 18 / 10 + margin,
        header: SONY_HEADER,
        body: Window::above(0),
        threshold: 900,
        unit: 600,
        carrier_hz: 40_000,
        duty_percent: 30,
        limits,
    }
}

const SONY12_SPEC: ProtocolSpec = sony_spec(
    "Sony SIRC 12",
    12,
    FieldLimits {
        address: 0x1f,
        data: 0x7f,
        toggle: 0,
    },
);

const SONY15_SPEC: ProtocolSpec = sony_spec(
    "Sony SIRC 15",
    15,
    FieldLimits {
        address: 0xff,
        data: 0x7f,
        toggle: 0,
    },
);

const SONY20_SPEC: ProtocolSpec = sony_spec(
    "Sony SIRC 20",
    20,
    FieldLimits {
        address: 0x1f,
        data: 0x7f,
        toggle: 0xff,
    },
);

const RC5_SPEC: ProtocolSpec = ProtocolSpec {
    name: "Philips RC-5",
    bits: 14,
    min_edges: 14,
    max_edges: 28,
    tblock_ms: 30,
    header: &[],
    body: Window::new(500, 2000),
    threshold: 1334,
    unit: 889,
    carrier_hz: 36_000,
    duty_percent: 30,
    limits: FieldLimits {
        address: 0x1f,
        data: 0x7f,
        toggle: 1,
    },
};

// Nominal 2666, 889, 444, 889, 444, 444, 444, 444. Receivers stretch the
// 444 us marks by up to ~260 us.
const RC6_SPEC: ProtocolSpec = ProtocolSpec {
    name: "Philips RC-6 mode 0",
    bits: 16,
    min_edges: 22,
    max_edges: 44,
    tblock_ms: 30,
    header: &[
        Window::new(1800, 4000),
        Window::new(593, 1333),
        Window::new(222, 750),
        Window::new(593, 1333),
        Window::new(222, 750),
        Window::new(222, 750),
        Window::new(222, 750),
        Window::new(222, 750),
    ],
    body: Window::new(222, 1111),
    threshold: 666,
    unit: 444,
    carrier_hz: 36_000,
    duty_percent: 30,
    limits: FieldLimits {
        address: 0xff,
        data: 0xff,
        toggle: 1,
    },
};

const MCE_SPEC: ProtocolSpec = ProtocolSpec {
    name: "Microsoft MCE",
    bits: 16,
    min_edges: 14,
    max_edges: 34,
    tblock_ms: 25,
    header: &[Window::new(1800, 2200), Window::new(800, 1200)],
    body: Window::new(250, 1350),
    threshold: 750,
    unit: 500,
    carrier_hz: 38_000,
    duty_percent: 30,
    limits: FieldLimits {
        address: 0xf,
        data: 0x3f,
        toggle: 3,
    },
};

impl Protocol {
    pub const ALL: [Protocol; 8] = [
        Protocol::Nec,
        Protocol::Samsung,
        Protocol::Sony12,
        Protocol::Sony15,
        Protocol::Sony20,
        Protocol::Rc5,
        Protocol::Rc6,
        Protocol::Mce,
    ];

    pub fn spec(&self) -> &'static ProtocolSpec {
        match self {
            Protocol::Nec => &NEC_SPEC,
            Protocol::Samsung => &SAMSUNG_SPEC,
            Protocol::Sony12 => &SONY12_SPEC,
            Protocol::Sony15 => &SONY15_SPEC,
            Protocol::Sony20 => &SONY20_SPEC,
            Protocol::Rc5 => &RC5_SPEC,
            Protocol::Rc6 => &RC6_SPEC,
            Protocol::Mce => &MCE_SPEC,
        }
    }

    /// Only NEC defines a repeat frame
    pub fn has_repeat(&self) -> bool {
        *self == Protocol::Nec
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Nec => "nec",
            Protocol::Samsung => "samsung",
            Protocol::Sony12 => "sony12",
            Protocol::Sony15 => "sony15",
            Protocol::Sony20 => "sony20",
            Protocol::Rc5 => "rc5",
            Protocol::Rc6 => "rc6",
            Protocol::Mce => "mce",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl TryFrom<&str> for Protocol {
    type Error = ();

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "nec" => Ok(Protocol::Nec),
            "samsung" | "nes" => Ok(Protocol::Samsung),
            "sony12" => Ok(Protocol::Sony12),
            "sony15" => Ok(Protocol::Sony15),
            "sony20" => Ok(Protocol::Sony20),
            "rc5" => Ok(Protocol::Rc5),
            "rc6" => Ok(Protocol::Rc6),
            "mce" => Ok(Protocol::Mce),
            _ => Err(()),
        }
    }
}
