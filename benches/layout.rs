//! Benchmarks for the vexil pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vexil::discovery::Manifest;
use vexil::{layout, parse_spec_args, to_svg};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_manifest() -> Manifest {
    let source = fs::read_to_string(fixtures_dir().join("flags.yaml")).unwrap();
    Manifest::parse(&source).unwrap()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let argv = [
        "NORWAY", "-x", "22", "-y", "16", "--cross", "8", "8", "4", "0", "--cross", "8", "8",
        "2", "0", "-c", "BA0C2F", "FFFFFF", "00205B",
    ];
    group.bench_function("parse_args", |b| {
        b.iter(|| parse_spec_args(black_box(argv)).unwrap())
    });

    let source = fs::read_to_string(fixtures_dir().join("flags.yaml")).unwrap();
    group.bench_function("parse_manifest", |b| {
        b.iter(|| Manifest::parse(black_box(&source)).unwrap())
    });

    group.finish();
}

// -- Layout and serialization benchmarks --

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let manifest = load_manifest();

    group.bench_function("layout_manifest", |b| {
        b.iter(|| {
            for spec in &manifest.flags {
                black_box(layout(black_box(spec)).unwrap());
            }
        })
    });

    let documents: Vec<_> = manifest.flags.iter().map(|s| layout(s).unwrap()).collect();
    group.bench_function("serialize_manifest", |b| {
        b.iter(|| {
            for document in &documents {
                black_box(to_svg(black_box(document)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_layout);
criterion_main!(benches);
