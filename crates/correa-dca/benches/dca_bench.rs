//! Criterion benchmarks for correa-dca: decision-curve table construction.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use correa_dca::{DcaConfig, ProbabilityMatrix, ThresholdGrid, net_benefit};

fn make_cohort(n: usize, n_classes: usize, seed: u64) -> (Vec<usize>, ProbabilityMatrix) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut labels = Vec::with_capacity(n);
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n);
    for _ in 0..n {
        let label = rng.gen_range(0..n_classes);
        let mut raw: Vec<f64> = (0..n_classes).map(|_| rng.r#gen::<f64>()).collect();
        raw[label] += 1.0;
        let total: f64 = raw.iter().sum();
        rows.push(raw.into_iter().map(|v| v / total).collect());
        labels.push(label);
    }
    (labels, ProbabilityMatrix::new(rows).unwrap())
}

fn bench_build_table(c: &mut Criterion) {
    let (labels, probs) = make_cohort(2_000, 5, 42);
    let config = DcaConfig::new(4);

    c.bench_function("dca_table_2000x5_99thresholds", |b| {
        b.iter(|| config.build_table(&labels, &probs).unwrap());
    });
}

fn bench_fine_grid(c: &mut Criterion) {
    let (labels, probs) = make_cohort(2_000, 5, 42);
    let grid = ThresholdGrid::new(0.001, 0.999, 0.001).unwrap();
    let config = DcaConfig::new(4).with_grid(grid);

    c.bench_function("dca_table_2000x5_999thresholds", |b| {
        b.iter(|| config.build_table(&labels, &probs).unwrap());
    });
}

fn bench_single_threshold(c: &mut Criterion) {
    let (labels, probs) = make_cohort(10_000, 5, 42);
    let outcomes: Vec<bool> = labels.iter().map(|&l| l == 4).collect();
    let scores = probs.column(4).unwrap();

    c.bench_function("net_benefit_10000", |b| {
        b.iter(|| net_benefit(&outcomes, &scores, 0.2).unwrap());
    });
}

criterion_group!(benches, bench_build_table, bench_fine_grid, bench_single_threshold);
criterion_main!(benches);
