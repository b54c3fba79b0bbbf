use bytes::{Bytes, BytesMut};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use llc_pdu::llc::*;
use llc_pdu::{Buf, CursorMut, Lsap};

fn view_build(buf: &mut [u8], payload_len: usize) {
    let mut pkt = CursorMut::new(&mut buf[0..LLC_EXTENDED_HEADER_LEN + payload_len]);
    pkt.advance(LLC_EXTENDED_HEADER_LEN);

    let mut llc = Llc::prepend(
        pkt,
        Lsap::IBM_NETBIOS,
        Lsap::IBM_NETBIOS,
        Control::extended([0x00, 0x02]),
    );
    llc.set_ssap(Lsap::from(0xf1));
}

pub fn b(c: &mut Criterion) {
    c.bench_function("llc_view_build", |b| {
        let mut buf = [0; 200];
        b.iter(|| {
            view_build(black_box(&mut buf[..]), black_box(66));
        })
    });

    let pdu = LlcPdu::new(
        Lsap::SNAP_EXTENSION,
        Lsap::SNAP_EXTENSION,
        Control::new(0x03),
        Bytes::from(vec![0x5a; 1400]),
    );
    c.bench_function("llc_pdu_encode", |b| {
        b.iter(|| black_box(&pdu).encode());
    });
    c.bench_function("llc_pdu_encode_to", |b| {
        let mut buf = BytesMut::with_capacity(2048);
        b.iter(|| {
            buf.clear();
            black_box(&pdu).encode_to(&mut buf);
        });
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
