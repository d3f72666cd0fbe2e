use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

use embedding_diff::comparison::compare_collections;
use embedding_diff::vector_entry::{CandidateEntry, ModelEmbeddings};
use embedding_diff::vector_ops::{compute_difference, normalize_vector};

const SEED: u64 = 42;
const DIMENSIONS: usize = 384;

fn random_vectors(rng: &mut StdRng, count: usize, dim: usize) -> Vec<Vec<f64>> {
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..count)
        .map(|_| normal.sample_iter(&mut *rng).take(dim).collect())
        .collect()
}

fn vector_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let vectors = random_vectors(&mut rng, 2, DIMENSIONS);

    c.bench_function("normalize 384", |b| {
        b.iter(|| normalize_vector(black_box(&vectors[0])))
    });
    c.bench_function("difference 384", |b| {
        b.iter(|| compute_difference(black_box(&vectors[0]), black_box(&vectors[1])))
    });
}

fn aggregation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("compare_collections");

    for &count in &[10usize, 100, 1000] {
        let entries: Vec<CandidateEntry> = random_vectors(&mut rng, count, DIMENSIONS)
            .into_iter()
            .enumerate()
            .map(|(i, v)| CandidateEntry {
                index: i as i64,
                embedding: vec![v],
            })
            .collect();
        let reference = ModelEmbeddings {
            model: "bench".to_string(),
            embeddings: random_vectors(&mut rng, count, DIMENSIONS)
                .into_iter()
                .map(|v| normalize_vector(&v))
                .collect(),
        };

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| compare_collections(black_box(&entries), black_box(&reference)))
        });
    }
    group.finish();
}

criterion_group!(benches, vector_ops, aggregation);
criterion_main!(benches);
