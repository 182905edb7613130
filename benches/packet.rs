//! Packet stream benchmarks.
//!
//! Packets are allocated once and rewound with `reset()` between
//! iterations so only the cursor bookkeeping and codec calls are measured.

use bytepacket::{Packet, text::Utf8};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn mixed_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_stream");
    let records = 256u64;
    group.throughput(Throughput::Elements(records));

    // u32 + f64 + bool + "sensor" (4 + 6)
    let mut packet = Packet::new(records as usize * 23);
    group.bench_function("write", |b| {
        b.iter(|| {
            packet.reset();
            for i in 0..records {
                packet.write(black_box(i as u32));
                packet.write(black_box(i as f64 * 0.5));
                packet.write(black_box(i % 2 == 0));
                packet.write_str(black_box("sensor"), &Utf8);
            }
        })
    });

    group.bench_function("read", |b| {
        b.iter(|| {
            packet.set_seek(0);
            let mut acc = 0.0;
            for _ in 0..records {
                acc += f64::from(packet.read_u32());
                acc += packet.read_f64();
                acc += f64::from(u8::from(packet.read_bool()));
                acc += packet.read_string(&Utf8).len() as f64;
            }
            acc
        })
    });

    group.finish();
}

fn copy_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_from");

    for size in [64usize, 1500, 65536] {
        group.throughput(Throughput::Bytes(size as u64));
        let mut src = Packet::from(vec![0x5Au8; size]);
        let mut dst = Packet::new(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                src.set_seek(0);
                src.set_len(size);
                dst.reset();
                dst.copy_from(black_box(&mut src))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, mixed_stream, copy_between);
criterion_main!(benches);
