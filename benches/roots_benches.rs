use RustedEquations::numerical::polynomial::Polynomial;
use RustedEquations::numerical::polynomial_roots::{RootMethod, find_all_roots};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strum::IntoEnumIterator;

// (x - 1)(x - 2)...(x - n), ascending coefficients
fn wilkinson_like(n: usize) -> Vec<f64> {
    let mut coeffs = vec![1.0];
    for k in 1..=n {
        let mut next = vec![0.0; coeffs.len() + 1];
        for (i, c) in coeffs.iter().enumerate() {
            next[i + 1] += c;
            next[i] -= c * k as f64;
        }
        coeffs = next;
    }
    coeffs
}

fn bench_root_finders(c: &mut Criterion) {
    let quartic = vec![-2.0, 0.0, -1.0, 0.0, 1.0];
    let wilkinson = wilkinson_like(10);
    assert_eq!(Polynomial::new(wilkinson.clone()).degree(), 10);

    for method in RootMethod::iter() {
        let finder = method.finder();
        let mut group = c.benchmark_group(format!("roots {}", method));
        group.bench_function("quartic", |b| {
            b.iter(|| find_all_roots(black_box(&quartic), finder.as_ref()))
        });
        group.bench_function("degree 10", |b| {
            b.iter(|| find_all_roots(black_box(&wilkinson), finder.as_ref()))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_root_finders);
criterion_main!(benches);
