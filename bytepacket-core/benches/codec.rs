//! Codec primitive benchmarks.
//!
//! Measures the per-call cost of scalar encode/decode, length-prefixed
//! text, cyclic copy and bit-range access over a warm 4 KiB buffer.

use bytepacket_core::{bits, read_f64, read_u32, text, write, write_from_cycle, write_to_cycle};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const BUF_LEN: usize = 4096;

fn scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalars");
    let count = (BUF_LEN / 8) as u64;
    group.throughput(Throughput::Elements(count));

    let mut buf = vec![0u8; BUF_LEN];
    group.bench_function("write_u32", |b| {
        b.iter(|| {
            for i in 0..count as usize {
                write(&mut buf, i * 4, black_box(i as u32));
            }
        })
    });

    group.bench_function("read_u32", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for i in 0..count as usize {
                sum = sum.wrapping_add(read_u32(black_box(&buf), i * 4));
            }
            sum
        })
    });

    group.bench_function("write_read_f64", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..count as usize {
                write(&mut buf, i * 8, black_box(i as f64));
                sum += read_f64(&buf, i * 8);
            }
            sum
        })
    });

    group.finish();
}

fn strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let sample = "the quick brown fox jumps over the lazy dog";
    let mut buf = vec![0u8; BUF_LEN];

    group.bench_function("utf8_roundtrip", |b| {
        b.iter(|| {
            let n = text::write_str(&mut buf, 0, black_box(sample), &text::Utf8);
            text::read_string(&buf, 0, &text::Utf8).1 + n
        })
    });

    group.bench_function("utf16_roundtrip", |b| {
        b.iter(|| {
            let n = text::write_str(&mut buf, 0, black_box(sample), &text::Utf16Le);
            text::read_string(&buf, 0, &text::Utf16Le).1 + n
        })
    });

    group.finish();
}

fn cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    let chunk = 1500usize;
    group.throughput(Throughput::Bytes(chunk as u64));

    let src = vec![0xA5u8; chunk];
    let mut ring = vec![0u8; BUF_LEN];
    let mut out = vec![0u8; chunk];

    group.bench_function("to_then_from_cycle", |b| {
        let mut offset = 0;
        b.iter(|| {
            let start = offset;
            offset = write_to_cycle(black_box(&src), 0, &mut ring, offset, chunk);
            write_from_cycle(&ring, start, &mut out, 0, chunk)
        })
    });

    group.finish();
}

fn bit_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("bits");
    let len = 8 * 64;
    group.throughput(Throughput::Elements(len as u64));

    let mut buf = vec![0u8; BUF_LEN];
    let mut flags = vec![false; len];
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = i % 3 == 0;
    }

    group.bench_function("write_read_bits", |b| {
        b.iter(|| {
            bits::write_bits(&mut buf, 0, 3, len, black_box(&flags), 0);
            bits::read_bits(&buf, 0, 3, len, &mut flags, 0);
        })
    });

    group.finish();
}

criterion_group!(benches, scalars, strings, cycles, bit_ranges);
criterion_main!(benches);
