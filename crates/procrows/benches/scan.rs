//! Benchmark – `procrows::LineScanner`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use procrows::{LineScanner, ScanOptions};

/// Produce a deterministic buffer of exactly `target_len` bytes made of lines
/// `line_len` bytes long (terminator included), like a large `/proc/*/maps`.
fn make_payload(target_len: usize, line_len: usize) -> Vec<u8> {
    assert!(line_len >= 1, "line_len must be >= 1");
    let mut buf = Vec::with_capacity(target_len);
    while buf.len() < target_len {
        let room = (target_len - buf.len()).min(line_len);
        buf.extend(std::iter::repeat_n(b'a', room - 1));
        buf.push(b'\n');
    }
    debug_assert_eq!(buf.len(), target_len);
    buf
}

fn bench_scan(c: &mut Criterion) {
    let scanner = LineScanner::new(ScanOptions::default());
    let mut group = c.benchmark_group("scan");

    for &line_len in &[16usize, 128, 4_096] {
        let payload = make_payload(1 << 20, line_len);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("measure", line_len), &payload, |b, p| {
            b.iter(|| black_box(scanner.measure(black_box(p))));
        });

        let statistics = scanner.measure(&payload);
        group.bench_with_input(BenchmarkId::new("emit", line_len), &payload, |b, p| {
            b.iter(|| {
                let records = scanner.emit(black_box(p), &statistics).unwrap();
                black_box(records.len())
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_scan
}
criterion_main!(benches);
