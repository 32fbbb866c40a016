//! Benchmarks for Karnaugh-map minimization
//!
//! Covers the degenerate inputs, the cyclic worst cases for cover selection and
//! a batch of seeded random functions per variable count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use karnaugh_logic::{minimize, minimize_with_config, CellValue, MinimizerConfig, TruthTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_cells(rng: &mut StdRng, n: usize) -> Vec<CellValue> {
    (0..1 << n)
        .map(|_| match rng.gen_range(0..10) {
            0..=3 => CellValue::On,
            4 => CellValue::DontCare,
            _ => CellValue::Off,
        })
        .collect()
}

fn parse(cells: &str) -> Vec<CellValue> {
    cells
        .parse::<TruthTable>()
        .expect("valid cells")
        .cells()
        .to_vec()
}

fn bench_named_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("named");
    let cases = [
        ("empty", "0000000000000000"),
        ("tautology", "1111111111111111"),
        ("parity", "0110100110010110"),
        ("consensus", "0001110100011101"),
        ("cyclic3", "11011011"),
    ];

    for (name, cells) in cases {
        let cells = parse(cells);
        let n = cells.len().trailing_zeros() as usize;
        group.bench_with_input(BenchmarkId::from_parameter(name), &cells, |b, cells| {
            b.iter(|| minimize(black_box(n), black_box(cells)))
        });
    }
    group.finish();
}

fn bench_random_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    let batch = 64;

    for n in 2..=4 {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let inputs: Vec<Vec<CellValue>> = (0..batch).map(|_| random_cells(&mut rng, n)).collect();
        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::new("vars", n), &inputs, |b, inputs| {
            b.iter(|| {
                for cells in inputs {
                    let _ = black_box(minimize(n, cells));
                }
            })
        });
    }
    group.finish();
}

fn bench_search_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let mut rng = StdRng::seed_from_u64(2024);
    let inputs: Vec<Vec<CellValue>> = (0..64).map(|_| random_cells(&mut rng, 4)).collect();

    for (name, limit) in [("greedy", 0), ("exhaustive", 8), ("exhaustive_max", 20)] {
        let config = MinimizerConfig {
            exhaustive_limit: limit,
            ..MinimizerConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &inputs, |b, inputs| {
            b.iter(|| {
                for cells in inputs {
                    let _ = black_box(minimize_with_config(4, cells, &config));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_named_functions,
    bench_random_functions,
    bench_search_modes
);
criterion_main!(benches);
