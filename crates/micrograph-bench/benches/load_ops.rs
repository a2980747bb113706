//! Criterion micro-benchmarks for model parsing, binding, and layout.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use micrograph_arena::ArenaConfig;
use micrograph_kernel::OpResolver;
use micrograph_kernels::register_builtins;
use micrograph_model::{schema_version, Model};
use micrograph_runtime::{load_model, Interpreter};
use micrograph_test_utils::{palm_detection_model, tiny_model};

/// Benchmark: peek at the schema version without parsing the body.
fn bench_schema_version_peek(c: &mut Criterion) {
    let buf = palm_detection_model();
    c.bench_function("schema_version_peek", |b| {
        b.iter(|| {
            let v = schema_version(black_box(&buf)).unwrap();
            black_box(v);
        });
    });
}

/// Benchmark: parse the palm fixture into a `Model`.
fn bench_parse_palm(c: &mut Criterion) {
    let buf = palm_detection_model();
    c.bench_function("parse_palm", |b| {
        b.iter(|| {
            let model = Model::parse(black_box(&buf)).unwrap();
            black_box(&model);
        });
    });
}

/// Benchmark: bind and lay out a pre-parsed model.
///
/// Isolates the interpreter's own cost: kernel resolution, signature
/// validation, and the 2.3 MB arena layout.
fn bench_bind_palm(c: &mut Criterion) {
    let buf = palm_detection_model();
    let model = Model::parse(&buf).unwrap();
    let mut resolver = OpResolver::new();
    assert!(register_builtins(&mut resolver).iter().all(|(_, r)| r.is_ok()));
    let config = ArenaConfig::default();

    c.bench_function("bind_palm", |b| {
        b.iter(|| {
            let interp = Interpreter::new(model.clone(), &resolver, &config).unwrap();
            black_box(interp.arena_used_bytes());
        });
    });
}

/// Benchmark: the full one-call load path, palm fixture.
fn bench_load_palm_end_to_end(c: &mut Criterion) {
    let buf = palm_detection_model();
    let config = ArenaConfig::default();
    c.bench_function("load_palm_end_to_end", |b| {
        b.iter(|| {
            let loaded = load_model(black_box(&buf), &config).unwrap();
            black_box(loaded.interpreter().op_count());
        });
    });
}

/// Benchmark: the full load path on the smallest loadable model.
fn bench_load_tiny(c: &mut Criterion) {
    let buf = tiny_model();
    let config = ArenaConfig::new(1024);
    c.bench_function("load_tiny", |b| {
        b.iter(|| {
            let loaded = load_model(black_box(&buf), &config).unwrap();
            black_box(loaded.interpreter().op_count());
        });
    });
}

criterion_group!(
    benches,
    bench_schema_version_peek,
    bench_parse_palm,
    bench_bind_palm,
    bench_load_palm_end_to_end,
    bench_load_tiny
);
criterion_main!(benches);
