use std::path::PathBuf;

use anyhow::anyhow;
use structopt::StructOpt;

use irwave_shared::{Decoder, Protocol};

mod capture;
mod irsend;
mod playback;
mod vcdutils;

#[derive(Debug, StructOpt)]
#[structopt(name = "irwave", about = "Infrared remote control encoder and decoder")]
struct Opt {
    #[structopt(short, long)]
    debug: bool,
    #[structopt(subcommand)]
    cmd: IrCommand,
}

#[derive(StructOpt, Debug)]
enum IrCommand {
    /// Decode a vcd capture with a top.ir wire
    Decode {
        /// nec nec-ext samsung sony12 sony15 sony20 rc5 rc6 mce
        protocol: String,
        path: PathBuf,
        /// Print one JSON object per block
        #[structopt(long)]
        json: bool,
    },
    /// Encode a frame and play it through a simulated carrier
    Encode {
        protocol: String,
        #[structopt(parse(try_from_str = parse_u32))]
        addr: u32,
        #[structopt(parse(try_from_str = parse_u32))]
        cmd: u32,
        /// Toggle or extension bits
        #[structopt(short, long, default_value = "0", parse(try_from_str = parse_u32))]
        toggle: u32,
        /// Reject fields wider than the protocol allows
        #[structopt(long)]
        validate: bool,
        /// NEC repeat frames to send after the command
        #[structopt(long, default_value = "0")]
        repeats: u32,
        /// Write the carrier trace to a vcd file
        #[structopt(long, parse(from_os_str))]
        vcd: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let loglevel = if opt.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(loglevel);
    }
    builder.init();

    match opt.cmd {
        IrCommand::Decode {
            protocol,
            path,
            json,
        } => {
            let decoder = decoder_from_str(&protocol)?;
            capture::command_decode(decoder, &path, json)
        }
        IrCommand::Encode {
            protocol,
            addr,
            cmd,
            toggle,
            validate,
            repeats,
            vcd,
        } => {
            let protocol = protocol_from_str(&protocol)?;
            irsend::command_encode(
                protocol,
                addr,
                cmd,
                toggle,
                validate,
                repeats,
                vcd.as_deref(),
            )
        }
    }
}

fn protocol_from_str(s: &str) -> anyhow::Result<Protocol> {
    Protocol::try_from(s).map_err(|_| anyhow!("Protocol: {} not found", s))
}

fn decoder_from_str(s: &str) -> anyhow::Result<Decoder> {
    if s == "nec-ext" {
        return Ok(Decoder::nec(true));
    }
    protocol_from_str(s).map(Decoder::new)
}

/// Decimal or 0x prefixed hex
fn parse_u32(s: &str) -> Result<u32, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
