use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wordrank::analyzer::analyze;
use wordrank::text::{normalize, tokenize};

fn corpus() -> String {
    "Hello, world! The quick brown fox jumps over the lazy dog. \
     Привет, мир! Мир приветствует тебя. В 2024 году было 100500 случаев. \
     a-b a - b snake_case x-y x - y "
        .repeat(400)
}

fn bench_pipeline(c: &mut Criterion) {
    let text = corpus();

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&text)));
    });

    let cleaned = normalize(&text);
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(&cleaned)));
    });

    c.bench_function("analyze_top10", |b| {
        b.iter(|| analyze("bench", black_box(&text), 10));
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
