use irwave_shared::{
    decoder::Command, encoder, DecodeError, DecodeResult, Decoder, Frame, Protocol,
    PulseSequence, Receiver,
};

/// Edges of `seq` starting at `start`, each interval nudged by up to 60 us
fn jittered(seq: &PulseSequence, start: u32) -> Vec<u32> {
    let edges: Vec<u32> = seq.edges(start).collect();
    let mut t = start;
    let mut out = vec![t];
    for (i, pair) in edges.windows(2).enumerate() {
        let width = pair[1].wrapping_sub(pair[0]);
        let nudge = (i as i64 * 37 % 121) - 60;
        t = t.wrapping_add((width as i64 + nudge) as u32);
        out.push(t);
    }
    out
}

fn receive(protocol: Protocol, blocks: &[Vec<u32>]) -> Vec<DecodeResult> {
    let mut results = Vec::new();
    let mut receiver = Receiver::new(protocol, |r: DecodeResult| results.push(r));
    for block in blocks {
        for &t in block {
            receiver.edge(t);
        }
        receiver.timer_fired();
    }
    drop(receiver);
    results
}

fn command(code: u32, address: u32, extension: u32) -> DecodeResult {
    Ok(Frame::Command(Command {
        code,
        address,
        extension,
    }))
}

#[test]
fn nec_power_button() {
    let seq = encoder::encode(Protocol::Nec, 0x01, 0x07, 0, true).unwrap();
    let edges = jittered(&seq, 1_000);
    assert_eq!(edges.len(), 68);
    assert_eq!(receive(Protocol::Nec, &[edges]), vec![command(0x07, 0x01, 0)]);
}

#[test]
fn nec_repeat_after_command() {
    let frame = encoder::encode(Protocol::Nec, 0x20, 0x33, 0, true).unwrap();
    let repeat = encoder::repeat(Protocol::Nec).unwrap();
    let blocks = vec![
        jittered(&frame, 0),
        jittered(&repeat, 108_000),
        jittered(&repeat, 216_000),
    ];
    assert_eq!(
        receive(Protocol::Nec, &blocks),
        vec![
            command(0x33, 0x20, 0),
            Ok(Frame::Repeat { address: 0x20 }),
            Ok(Frame::Repeat { address: 0x20 }),
        ]
    );
}

#[test]
fn nec_extended_address() {
    let seq = encoder::encode(Protocol::Nec, 0xbeef, 0x12, 0, true).unwrap();
    let mut decoder = Decoder::nec(true);
    assert_eq!(decoder.decode(&jittered(&seq, 0)), command(0x12, 0xbeef, 0));

    let mut decoder = Decoder::nec(false);
    assert_eq!(
        decoder.decode(&jittered(&seq, 0)),
        Err(DecodeError::BadAddress)
    );
}

#[test]
fn samsung() {
    for &(address, code) in &[(0x07, 0x02), (0x0e0e, 0x99), (0x1234, 0x00)] {
        let seq = encoder::encode(Protocol::Samsung, address, code, 0, true).unwrap();
        let expected = if address == 0x0e0e { 0x0e } else { address };
        assert_eq!(
            receive(Protocol::Samsung, &[jittered(&seq, 500)]),
            vec![command(code, expected, 0)]
        );
    }
}

#[test]
fn sony_variants() {
    let cases = [
        (Protocol::Sony12, 0x01, 0x15, 0),
        (Protocol::Sony15, 0x97, 0x7f, 0),
        (Protocol::Sony20, 0x1a, 0x3a, 0x5c),
    ];
    for &(protocol, address, code, extension) in cases.iter() {
        let seq = encoder::encode(protocol, address, code, extension, true).unwrap();
        assert_eq!(
            receive(protocol, &[jittered(&seq, 0)]),
            vec![command(code, address, extension)],
            "{}",
            protocol
        );
    }
}

#[test]
fn rc5_all_fields() {
    let cases = [(0x05, 0x35, 0), (0x1f, 0x7f, 1), (0x00, 0x00, 0), (0x14, 0x41, 1)];
    for &(address, code, toggle) in cases.iter() {
        let seq = encoder::encode(Protocol::Rc5, address, code, toggle, true).unwrap();
        assert_eq!(
            receive(Protocol::Rc5, &[jittered(&seq, 0)]),
            vec![command(code, address, toggle)]
        );
    }
}

#[test]
fn rc6_toggle() {
    let blocks: Vec<Vec<u32>> = (0..2)
        .map(|toggle| {
            let seq = encoder::encode(Protocol::Rc6, 0x10, 0x0b, toggle, true).unwrap();
            jittered(&seq, toggle * 200_000)
        })
        .collect();
    assert_eq!(
        receive(Protocol::Rc6, &blocks),
        vec![command(0x0b, 0x10, 0), command(0x0b, 0x10, 1)]
    );
}

#[test]
fn rc6_field_extremes() {
    for &(address, code) in &[(0xff, 0xff), (0x00, 0x00), (0x80, 0x01), (0x01, 0x80)] {
        let seq = encoder::encode(Protocol::Rc6, address, code, 1, true).unwrap();
        let mut decoder = Decoder::new(Protocol::Rc6);
        assert_eq!(decoder.decode(&jittered(&seq, 0)), command(code, address, 1));
    }
}

#[test]
fn mce_every_toggle() {
    for toggle in 0..4 {
        let seq = encoder::encode(Protocol::Mce, 0xf, 0x0d, toggle, true).unwrap();
        assert_eq!(
            receive(Protocol::Mce, &[jittered(&seq, 0)]),
            vec![command(0x0d, 0xf, toggle)]
        );
    }
}

#[test]
fn wrapping_timestamps() {
    for protocol in Protocol::ALL.iter() {
        let seq = encoder::encode(*protocol, 1, 2, 0, true).unwrap();
        let edges = jittered(&seq, u32::MAX - 5_000);
        assert!(edges.last().unwrap() < &edges[0]);
        let mut decoder = Decoder::new(*protocol);
        assert_eq!(decoder.decode(&edges), command(2, 1, 0), "{}", protocol);
    }
}

#[test]
fn overrun_then_recovery() {
    let seq = encoder::encode(Protocol::Nec, 0x01, 0x07, 0, true).unwrap();
    let mut long = jittered(&seq, 0);
    let last = *long.last().unwrap();
    long.extend((1..10).map(|i| last + i * 563));

    let results = receive(Protocol::Nec, &[long, jittered(&seq, 200_000)]);
    assert_eq!(
        results,
        vec![Err(DecodeError::Overrun), command(0x07, 0x01, 0)]
    );
}

#[test]
fn overrun_starts_past_max_edges() {
    for protocol in Protocol::ALL.iter().copied() {
        let max = protocol.spec().max_edges;
        let seq = encoder::encode(protocol, 0x01, 0x01, 0, true).unwrap();
        let mut edges: Vec<u32> = seq.edges(0).collect();
        edges.truncate(max);
        while edges.len() < max {
            let last = *edges.last().unwrap();
            edges.push(last + 500);
        }

        let mut decoder = Decoder::new(protocol);
        assert_ne!(
            decoder.decode(&edges),
            Err(DecodeError::Overrun),
            "{} at {} edges",
            protocol,
            max
        );

        let last = *edges.last().unwrap();
        edges.push(last + 500);
        assert_eq!(
            decoder.decode(&edges),
            Err(DecodeError::Overrun),
            "{} at {} edges",
            protocol,
            max + 1
        );
    }
}

#[test]
fn sony_lead_outside_window_is_bad_start() {
    let seq = encoder::encode(Protocol::Sony12, 0x01, 0x15, 0, true).unwrap();
    let edges: Vec<u32> = seq.edges(0).collect();
    let mut decoder = Decoder::new(Protocol::Sony12);
    assert_eq!(decoder.decode(&edges), command(0x15, 0x01, 0));

    // 1000 us and 3400 us lead marks instead of 2400
    for shift in [-1400i64, 1000].iter() {
        let moved: Vec<u32> = edges
            .iter()
            .enumerate()
            .map(|(i, &t)| if i == 0 { t } else { (t as i64 + shift) as u32 })
            .collect();
        assert_eq!(decoder.decode(&moved), Err(DecodeError::BadStart));
    }
}

#[test]
fn wrong_protocol_is_rejected() {
    let seq = encoder::encode(Protocol::Rc5, 0x05, 0x35, 0, true).unwrap();
    let edges = jittered(&seq, 0);
    for protocol in [Protocol::Nec, Protocol::Sony12, Protocol::Rc6, Protocol::Mce].iter() {
        let mut decoder = Decoder::new(*protocol);
        assert!(decoder.decode(&edges).is_err(), "{}", protocol);
    }
}

#[test]
fn blocks_are_independent() {
    let a = encoder::encode(Protocol::Mce, 0x1, 0x20, 1, true).unwrap();
    let b = encoder::encode(Protocol::Mce, 0x2, 0x21, 2, true).unwrap();
    let mut garbage = jittered(&a, 100_000);
    garbage.truncate(9);

    let results = receive(
        Protocol::Mce,
        &[jittered(&a, 0), garbage, jittered(&b, 200_000)],
    );
    assert_eq!(results[0], command(0x20, 0x1, 1));
    assert!(results[1].is_err());
    assert_eq!(results[2], command(0x21, 0x2, 2));
}
