//! Benchmark suite for parsing and minimization
//!
//! Parity chains are the minimizer's worst case: no pair of minterms is
//! bit-adjacent, so every minterm survives as an essential prime implicant
//! and the truth-table work dominates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use region_algebra::{Literal, Term};

/// XOR of the first `width` surfaces, built through the operator API.
fn parity(width: u32) -> Term {
    let mut term = Term::literal(Literal::positive(1));
    for magnitude in 2..=width {
        let surface = Term::literal(Literal::positive(magnitude));
        term = &(&term * &!&surface) + &(&!&term * &surface);
    }
    term
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for input in ["12 13'+14", "1 2 3+1 2 4'+5 (6+7')"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| Term::parse(black_box(input)).unwrap())
        });
    }
    group.finish();
}

fn bench_to_dnf(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_dnf");
    for width in [4u32, 6, 8] {
        let term = parity(width);
        group.bench_with_input(BenchmarkId::new("parity", width), &term, |b, term| {
            b.iter(|| black_box(term).to_dnf().unwrap())
        });
    }
    group.finish();
}

fn bench_complement(c: &mut Criterion) {
    let term = parity(8);
    c.bench_function("complement/parity_8", |b| {
        b.iter(|| {
            let mut complemented = black_box(&term).clone();
            complemented.complement();
            complemented
        })
    });
}

criterion_group!(benches, bench_parse, bench_to_dnf, bench_complement);
criterion_main!(benches);
