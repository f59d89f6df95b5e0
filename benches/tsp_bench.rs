//! Criterion benchmarks for the TSP solver.
//!
//! Uses seeded random city maps so timings are comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_tsp::evolution::operators::ordered_crossover;
use u_tsp::random::{create_rng, shuffle};
use u_tsp::{EvolutionConfig, EvolutionRunner, Point};

fn random_cities(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = create_rng(seed);
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect()
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution");
    group.sample_size(10);

    for (cities, pop, gen) in [(20usize, 50usize, 100usize), (50, 100, 50), (100, 100, 20)] {
        let points = random_cities(cities, 42);
        let config = EvolutionConfig {
            population_size: pop,
            generations: gen,
            seed: Some(42),
            ..EvolutionConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_p{}_g{}", cities, pop, gen), cities),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = EvolutionRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_crossover");

    for &n in &[20usize, 100, 1000] {
        let mut rng = create_rng(42);
        let mut p1: Vec<usize> = (0..n).collect();
        let mut p2: Vec<usize> = (0..n).collect();
        shuffle(&mut p1, &mut rng);
        shuffle(&mut p2, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| black_box(ordered_crossover(black_box(p1), black_box(p2), &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evolution, bench_crossover);
criterion_main!(benches);
