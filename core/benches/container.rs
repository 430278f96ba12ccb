//! Container guard benchmarks.
//!
//! Validation, extraction and full inspection over covers of increasing size.
//! Run with:
//!   cargo bench -p blueprint-core --bench container

use blueprint_core::chunk::ChunkType;
use blueprint_core::config::GuardConfig;
use blueprint_core::constants::BLUEPRINT_MAGIC;
use blueprint_core::container::{validate, ContainerBuilder, ImageHeader};
use blueprint_core::payload::extract;
use blueprint_core::pipeline::inspect_upload;
use blueprint_core::threat::{scan_content, scan_signature};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const COVER_SIZES: [usize; 3] = [16 * 1024, 100 * 1024, 1024 * 1024];

/// Cover split into 8 KiB pixel chunks, then a 4 KiB blueprint.
fn upload(cover_bytes: usize) -> Vec<u8> {
    let mut b = ContainerBuilder::new(ImageHeader::minimal(512, 512));
    let block = vec![0x5A; 8 * 1024];
    for _ in 0..cover_bytes / block.len() {
        b.push(ChunkType::DATA, &block).expect("chunk fits");
    }
    let mut buf = b.finish();
    buf.extend_from_slice(&BLUEPRINT_MAGIC);
    buf.extend_from_slice(&vec![0x42; 4 * 1024]);
    buf
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("container/validate");
    for size in COVER_SIZES {
        let buf = upload(size);
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buf, |b, buf| {
            b.iter(|| validate(black_box(buf)));
        });
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("container/extract");
    for size in COVER_SIZES {
        let buf = upload(size);
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buf, |b, buf| {
            b.iter(|| extract(black_box(buf)));
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("threat/scan");
    let buf = upload(100 * 1024);
    group.throughput(Throughput::Bytes(buf.len() as u64));

    group.bench_function("signature", |b| {
        b.iter(|| scan_signature(black_box(&buf)));
    });
    group.bench_function("content", |b| {
        b.iter(|| scan_content(black_box(&buf)));
    });
    group.finish();
}

fn bench_inspect(c: &mut Criterion) {
    let cfg = GuardConfig::default();
    let mut group = c.benchmark_group("pipeline/inspect");
    for size in COVER_SIZES {
        let buf = upload(size);
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buf, |b, buf| {
            b.iter(|| inspect_upload("bench.af", black_box(buf), &cfg));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate, bench_extract, bench_scan, bench_inspect);
criterion_main!(benches);
