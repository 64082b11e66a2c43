use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rbtree::Set;

const SIZES: [usize; 2] = [100, 10_000];

fn insert_rand(c: &mut Criterion) {
    for &n in &SIZES {
        c.bench_function(&format!("insert_rand_{}", n), |b| {
            let mut rng = StdRng::seed_from_u64(n as u64);

            b.iter(|| {
                let mut set = Set::new();
                for _ in 0..n { set.insert(rng.gen::<usize>() % n); }
                black_box(set)
            });
        });
    }
}

fn insert_seq(c: &mut Criterion) {
    for &n in &SIZES {
        c.bench_function(&format!("insert_seq_{}", n), |b| {
            b.iter(|| {
                let mut set = Set::new();
                for i in 0..n { set.insert(i); }
                black_box(set)
            });
        });
    }
}

fn contains_rand(c: &mut Criterion) {
    for &n in &SIZES {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut keys: Vec<_> = (0..n).map(|_| rng.gen::<usize>() % n).collect();
        let set: Set<_> = keys.iter().cloned().collect();
        keys.shuffle(&mut rng);

        c.bench_function(&format!("contains_rand_{}", n), |b| {
            let mut i = 0;
            b.iter(|| {
                let found = set.contains(&keys[i]);
                i = (i + 1) % n;
                black_box(found)
            });
        });
    }
}

fn for_each(c: &mut Criterion) {
    for &n in &[100, 1000, 100_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let set: Set<u32> = (0..n).map(|_| rng.gen()).collect();

        c.bench_function(&format!("for_each_{}", n), |b| {
            b.iter(|| set.for_each(|item| { black_box(item); true }));
        });
    }
}

criterion_group!(benches, insert_rand, insert_seq, contains_rand, for_each);
criterion_main!(benches);
