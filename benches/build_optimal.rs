use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use level_ancestor::{Kind, LevelAncestor};

fn random_parent(n: usize, seed: u64) -> Vec<i64> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let mut parent = vec![-1i64; n];
    for i in 1..n {
        parent[i] = rng.gen_range(0, i) as i64;
    }
    parent
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let parent = random_parent(n, 42);
        group.bench_with_input(BenchmarkId::new("optimal", n), &parent, |b, parent| {
            b.iter(|| LevelAncestor::new_with_kind(parent.clone(), Kind::Optimal).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("jump_and_ladder", n), &parent, |b, parent| {
            b.iter(|| LevelAncestor::new_with_kind(parent.clone(), Kind::JumpAndLadder).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
