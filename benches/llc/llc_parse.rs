use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use llc_pdu::llc::*;
use llc_pdu::{Cursor, Lsap};

static FRAME_BYTES: [u8; 46] = [
    0x42, 0x42, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x64, 0x00, 0x1c, 0x0e, 0x87, 0x78, 0x00,
    0x00, 0x00, 0x00, 0x04, 0x80, 0x64, 0x00, 0x1c, 0x0e, 0x87, 0x85, 0x00, 0x80, 0x04, 0x01, 0x00,
    0x14, 0x00, 0x02, 0x00, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn view_parse(buf: &[u8]) {
    let llc = Llc::parse(Cursor::new(buf), 1).unwrap();
    assert!(llc.dsap() == Lsap::BRIDGE_SPANNING_TREE);
    assert!(llc.ssap() == Lsap::BRIDGE_SPANNING_TREE);
    assert!(llc.control() == Control::new(0x03));
}

pub fn b(c: &mut Criterion) {
    c.bench_function("llc_view_parse", |b| {
        b.iter(|| view_parse(black_box(&FRAME_BYTES[..])));
    });
    c.bench_function("llc_pdu_decode", |b| {
        b.iter(|| LlcPdu::decode(black_box(&FRAME_BYTES[..]), 1).unwrap());
    });
    c.bench_function("llc_pdu_decode_bytes", |b| {
        let frame = Bytes::from_static(&FRAME_BYTES);
        b.iter(|| LlcPdu::decode_bytes(black_box(frame.clone()), 1).unwrap());
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
