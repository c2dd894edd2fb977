use std::fs::File;
use std::io;
use std::io::ErrorKind::InvalidInput;
use std::path::Path;

use vcd::{self, SimulationCommand, TimescaleUnit, Value};

pub struct VcdWriter<'a> {
    vcd: vcd::Writer<&'a mut File>,
    wire_id: vcd::IdCode,
}

impl<'a> VcdWriter<'a> {
    /// Writes the header: 1 us timescale and a single `top.ir` wire, low
    pub fn new(file: &'a mut File) -> io::Result<Self> {
        let mut writer = vcd::Writer::new(file);

        writer.timescale(1, TimescaleUnit::US)?;
        writer.add_module("top")?;
        let wire_id = writer.add_wire(1, "ir")?;
        writer.upscope()?;
        writer.enddefinitions()?;

        writer.begin(SimulationCommand::Dumpvars)?;
        writer.change_scalar(wire_id, Value::V0)?;
        writer.end()?;

        Ok(VcdWriter {
            vcd: writer,
            wire_id,
        })
    }

    pub fn write_changes(&mut self, changes: &[(u64, bool)]) -> io::Result<()> {
        for &(ts, high) in changes {
            self.write_value(ts, high)?;
        }
        Ok(())
    }

    pub fn write_value(&mut self, ts: u64, high: bool) -> io::Result<()> {
        self.vcd.timestamp(ts)?;
        let value = if high { Value::V1 } else { Value::V0 };
        self.vcd.change_scalar(self.wire_id, value)?;
        Ok(())
    }
}

/// Timestamps, in microseconds, of every transition on `top.ir`
pub fn vcdfile_to_edges(path: &Path) -> io::Result<Vec<u64>> {
    let file = File::open(path)?;
    let mut parser = vcd::Parser::new(&file);

    let header = parser.parse_header()?;
    let wire = header
        .find_var(&["top", "ir"])
        .ok_or_else(|| io::Error::new(InvalidInput, "no wire top.ir"))?
        .code;

    // Multiply timestamps by `num`, divide by `den` to get microseconds
    let (num, den) = match header.timescale {
        Some((n, TimescaleUnit::S)) => (u64::from(n) * 1_000_000, 1),
        Some((n, TimescaleUnit::MS)) => (u64::from(n) * 1_000, 1),
        Some((n, TimescaleUnit::US)) => (u64::from(n), 1),
        Some((n, TimescaleUnit::NS)) => (u64::from(n), 1_000),
        None => (1, 1),
        Some((_, unit)) => {
            return Err(io::Error::new(
                InvalidInput,
                format!("unsupported timescale unit {:?}", unit),
            ))
        }
    };
    log::debug!("timescale {:?}", header.timescale);

    let mut current_ts: u64 = 0;
    let mut level = Value::V0;
    let mut edges = Vec::new();

    for command_result in parser {
        use vcd::Command::*;
        let command = command_result?;
        match command {
            ChangeScalar(i, v) if i == wire => {
                if v != level {
                    level = v;
                    let scaled = current_ts.checked_mul(num).ok_or_else(|| {
                        io::Error::new(
                            InvalidInput,
                            format!("timestamp {} overflows at this timescale", current_ts),
                        )
                    })?;
                    edges.push(scaled / den);
                }
            }
            Timestamp(ts) => current_ts = ts,
            _ => (),
        }
    }

    Ok(edges)
}
