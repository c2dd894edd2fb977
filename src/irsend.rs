use std::fs::File;
use std::path::Path;

use irwave_shared::{Protocol, Transmitter};

use crate::playback::{run_to_idle, TraceCarrier};
use crate::vcdutils::VcdWriter;

/// NEC repeat frames start every 108 ms
const REPEAT_PERIOD_US: u64 = 108_000;

pub fn command_encode(
    protocol: Protocol,
    addr: u32,
    cmd: u32,
    toggle: u32,
    validate: bool,
    repeats: u32,
    vcd: Option<&Path>,
) -> anyhow::Result<()> {
    let spec = protocol.spec();
    log::info!(
        "Sending {} addr: {:#x} cmd: {:#x} toggle: {} ({} Hz, {}% duty)",
        protocol,
        addr,
        cmd,
        toggle,
        spec.carrier_hz,
        spec.duty_percent
    );

    let mut tx = Transmitter::new(protocol, TraceCarrier::new());
    tx.transmit(addr, cmd, toggle, validate)?;
    println!("{:?}", tx.sequence().as_slice());
    run_to_idle(&mut tx);

    for n in 1..=repeats {
        tx.carrier_mut().wait_until(u64::from(n) * REPEAT_PERIOD_US);
        tx.repeat()?;
        if n == 1 {
            println!("{:?}", tx.sequence().as_slice());
        }
        run_to_idle(&mut tx);
    }
    log::info!("Done after {} us", tx.carrier().now());

    if let Some(path) = vcd {
        let mut file = File::create(path)?;
        let mut writer = VcdWriter::new(&mut file)?;
        writer.write_changes(tx.carrier().changes())?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
