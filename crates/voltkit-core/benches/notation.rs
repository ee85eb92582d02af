//! Benchmarks for engineering-notation parsing.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use voltkit_core::notation;

fn bench_parse(c: &mut Criterion) {
    let literals = ["42", "12.5", "4.7k", "100n", "2.5e-2", "1μ", "not a number"];

    c.bench_function("notation_parse", |b| {
        b.iter(|| {
            for literal in literals {
                black_box(notation::parse(black_box(literal)));
            }
        });
    });
}

fn bench_split(c: &mut Criterion) {
    c.bench_function("notation_split", |b| {
        b.iter(|| black_box(notation::split_number(black_box("12.5k"))));
    });
}

criterion_group!(benches, bench_parse, bench_split);
criterion_main!(benches);
