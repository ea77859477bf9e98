use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smt_oracle::{build_mint_proof, compute_root, hash_leaf, Keccak256, Word};

pub fn generate_random_digest() -> [u8; 32] {
    let mut digest = [0u8; 32];
    for byte in digest.iter_mut() {
        *byte = rand::random();
    }
    digest
}

fn generate_random_path(depth: usize) -> Vec<[u8; 32]> {
    (0..depth).map(|_| generate_random_digest()).collect()
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("Path folding");

    for depth in [16, 64, 256] {
        let path = generate_random_path(depth);
        let index = Word::from(rand::random::<u128>());
        let leaf = hash_leaf::<32, Keccak256>(index);

        group.bench_function(format!("compute_root depth {}", depth), |b| {
            b.iter(|| {
                black_box(compute_root::<32, Keccak256>(
                    black_box(leaf),
                    black_box(&path),
                    black_box(index),
                ))
            })
        });
    }

    group.finish();
}

fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proof builders");

    let path = generate_random_path(256);
    let index = Word::from(rand::random::<u128>());

    group.bench_function("build_mint_proof depth 256", |b| {
        b.iter(|| {
            black_box(build_mint_proof::<32, Keccak256>(
                black_box(index),
                black_box(&path),
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fold, bench_builders);
criterion_main!(benches);
