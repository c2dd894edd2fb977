use std::path::Path;

use irwave_shared::{DecodeResult, Decoder, Frame, Receiver};

use crate::vcdutils::vcdfile_to_edges;

pub fn command_decode(decoder: Decoder, path: &Path, json: bool) -> anyhow::Result<()> {
    let protocol = decoder.protocol();
    let edges = vcdfile_to_edges(path)?;
    log::info!("Replaying {} edges from {}", edges.len(), path.display());

    let results = replay(decoder, edges);
    if results.is_empty() {
        println!("No blocks found");
    }

    for result in &results {
        if json {
            let line = serde_json::json!({
                "protocol": protocol.as_str(),
                "result": result,
            });
            println!("{}", line);
            continue;
        }

        match result {
            Ok(Frame::Command(cmd)) => println!(
                "{}\tAddr: {:#x}\tCmd: {:#x}\tExt: {:#x}",
                protocol, cmd.address, cmd.code, cmd.extension
            ),
            Ok(Frame::Repeat { address }) => println!("{}\tRepeat\tAddr: {:#x}", protocol, address),
            Err(err) => println!("{}\tError: {}", protocol, err),
        }
    }

    Ok(())
}

/// Feed edge timestamps through a receiver, firing the block timer whenever
/// the next edge, or the end of the capture, lies past its deadline.
pub fn replay<I>(decoder: Decoder, edges: I) -> Vec<DecodeResult>
where
    I: IntoIterator<Item = u64>,
{
    let mut results = Vec::new();
    let mut receiver = Receiver::with_decoder(decoder, |r: DecodeResult| results.push(r));
    let mut deadline: Option<u64> = None;

    for t in edges {
        if let Some(d) = deadline {
            if t >= d {
                receiver.timer_fired();
                deadline = None;
            }
        }

        // The receiver works on a wrapping 32 bit microsecond counter
        if let Some(tblock) = receiver.edge(t as u32) {
            deadline = Some(t + tblock.as_micros() as u64);
        }
    }

    if deadline.is_some() {
        receiver.timer_fired();
    }

    drop(receiver);
    results
}
