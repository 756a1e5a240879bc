//! Benchmarks for strgen rendering, counting and enumeration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strgen::{patterns, StringGen};

fn bench_render_uuid4(c: &mut Criterion) {
    let mut gen = StringGen::builder(patterns::UUID4)
        .seed(42u64)
        .build()
        .unwrap();

    c.bench_function("render_uuid4", |b| b.iter(|| black_box(gen.render())));
}

fn bench_render_ipv4(c: &mut Criterion) {
    let mut gen = StringGen::builder(patterns::IPV4)
        .seed(42u64)
        .build()
        .unwrap();

    c.bench_function("render_ipv4", |b| b.iter(|| black_box(gen.render())));
}

fn bench_render_word_repeat(c: &mut Criterion) {
    let mut gen = StringGen::builder(r"\w{64}").seed(42u64).build().unwrap();

    c.bench_function("render_word_64", |b| b.iter(|| black_box(gen.render())));
}

fn bench_parse_and_count(c: &mut Criterion) {
    c.bench_function("parse_and_count_semver", |b| {
        b.iter(|| {
            let gen = StringGen::new(black_box(patterns::SEMVER)).unwrap();
            black_box(gen.count())
        })
    });
}

fn bench_enumerate_small(c: &mut Criterion) {
    let gen = StringGen::new("[a-d]{4}").unwrap();

    c.bench_function("enumerate_256", |b| {
        b.iter(|| black_box(StringGen::enumerate(&gen).count()))
    });
}

criterion_group!(
    benches,
    bench_render_uuid4,
    bench_render_ipv4,
    bench_render_word_repeat,
    bench_parse_and_count,
    bench_enumerate_small
);
criterion_main!(benches);
