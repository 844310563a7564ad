//! OrderedSet search, insert and union benchmarks.
//!
//! Sets are built from a fixed seed so every run measures the same data.

// criterion_group! generates an undocumented `pub fn`
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{
	criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion,
};
use ordset::workload::{random_set, MAX_POINT, MIN_POINT};
use ordset::OrderedSet;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: [usize; 4] = [100, 250, 500, 1000];
const SEED: u64 = 0;

fn bench_search(criterion: &mut Criterion) {
	let mut group = criterion.benchmark_group("ordered_set_search");

	for size in SIZES {
		let mut rng = StdRng::seed_from_u64(SEED);
		let set = random_set(&mut rng, size);
		let points = Uniform::new(MIN_POINT, MAX_POINT);

		group.bench_with_input(
			BenchmarkId::new("search", size),
			&set,
			|bencher, set| {
				bencher.iter_batched(
					|| points.sample(&mut rng),
					|point| black_box(set.search(black_box(point))),
					BatchSize::SmallInput,
				);
			},
		);
	}

	group.finish();
}

fn bench_insert(criterion: &mut Criterion) {
	let mut group = criterion.benchmark_group("ordered_set_insert");

	for size in SIZES {
		let points: Vec<f64> = (0..size).map(|x| x as f64).rev().collect();

		group.bench_with_input(
			BenchmarkId::new("insert_descending", size),
			&points,
			|bencher, points| {
				bencher.iter(|| {
					black_box(points.iter().copied().collect::<OrderedSet>())
				});
			},
		);
	}

	group.finish();
}

fn bench_merge(criterion: &mut Criterion) {
	let mut group = criterion.benchmark_group("ordered_set_merge");

	for size in SIZES {
		let mut rng = StdRng::seed_from_u64(SEED);
		let sets = (random_set(&mut rng, size), random_set(&mut rng, size));

		group.bench_with_input(
			BenchmarkId::new("union", size),
			&sets,
			|bencher, (a, b)| {
				bencher.iter(|| {
					black_box(OrderedSet::union(black_box(a), black_box(b)))
				});
			},
		);
		group.bench_with_input(
			BenchmarkId::new("intersection", size),
			&sets,
			|bencher, (a, b)| {
				bencher.iter(|| black_box(a.intersection(black_box(b))));
			},
		);
		//a single point against a big set stops as soon as it is passed
		let single = OrderedSet::from_slice([MIN_POINT]);
		group.bench_with_input(
			BenchmarkId::new("intersection_single", size),
			&sets,
			|bencher, (a, _)| {
				bencher.iter(|| black_box(single.intersection(black_box(a))));
			},
		);
	}

	group.finish();
}

criterion_group!(benches, bench_search, bench_insert, bench_merge);
criterion_main!(benches);
