//! A module for timing [`OrderedSet`] operations on seeded random sets.
//!
//! Every function here takes an explicit seed, so running the same
//! workload twice builds exactly the same sets and searches for exactly
//! the same points. Only the measured times differ between runs.

use std::hint::black_box;
use std::time::{Duration, Instant};
use std::vec::Vec;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::OrderedSet;

/// The smallest point a random set can contain.
pub const MIN_POINT: f64 = 0.0;
/// Random points are always strictly smaller than this.
pub const MAX_POINT: f64 = 99999.0;

fn points() -> Uniform<f64> {
	Uniform::new(MIN_POINT, MAX_POINT)
}

/// Makes a set from `size` random points drawn uniformly from
/// `MIN_POINT..MAX_POINT`.
///
/// The set can end up smaller than `size` if the same point is drawn
/// twice.
///
/// # Examples
/// ```
/// use ordset::workload::random_set;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let set = random_set(&mut StdRng::seed_from_u64(7), 10);
///
/// assert!(set.len() <= 10);
/// ```
pub fn random_set<R: Rng>(rng: &mut R, size: usize) -> OrderedSet {
	let points = points();
	(0..size).map(|_| points.sample(rng)).collect()
}

/// Builds one random set of `size` points and returns the mean time
/// taken by `trials` searches for random points.
pub fn measure_search_time(size: usize, trials: u32, seed: u64) -> Duration {
	let mut rng = StdRng::seed_from_u64(seed);
	let set = random_set(&mut rng, size);
	let points = points();

	let mut total = Duration::ZERO;
	for _ in 0..trials {
		let point = points.sample(&mut rng);
		let start = Instant::now();
		black_box(set.search(black_box(point)));
		total += start.elapsed();
	}

	mean(total, trials)
}

/// Builds two fresh random sets of `size` points per trial and returns
/// the mean time taken by their union over `trials` trials.
pub fn measure_union_time(size: usize, trials: u32, seed: u64) -> Duration {
	let mut rng = StdRng::seed_from_u64(seed);

	let mut total = Duration::ZERO;
	for _ in 0..trials {
		let a = random_set(&mut rng, size);
		let b = random_set(&mut rng, size);
		let start = Instant::now();
		black_box(OrderedSet::union(black_box(&a), black_box(&b)));
		total += start.elapsed();
	}

	mean(total, trials)
}

fn mean(total: Duration, trials: u32) -> Duration {
	total.checked_div(trials).unwrap_or_default()
}

/// The configuration of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
	/// The size of the smallest sets measured.
	pub min_size: usize,
	/// The size of the largest sets measured, inclusive.
	pub max_size: usize,
	/// The difference between consecutive set sizes, `0` is treated as
	/// `1`.
	pub step: usize,
	/// How many searches are timed for each size.
	pub search_trials: u32,
	/// How many unions are timed for each size.
	pub union_trials: u32,
	/// The seed every measurement starts from.
	pub seed: u64,
}

impl Default for BenchmarkConfig {
	fn default() -> Self {
		BenchmarkConfig {
			min_size: 100,
			max_size: 1000,
			step: 100,
			search_trials: 1000,
			union_trials: 100,
			seed: 0,
		}
	}
}

impl BenchmarkConfig {
	/// Returns every set size to be measured in ascending order.
	///
	/// # Examples
	/// ```
	/// use ordset::workload::BenchmarkConfig;
	///
	/// let config = BenchmarkConfig {
	/// 	min_size: 10,
	/// 	max_size: 30,
	/// 	step: 10,
	/// 	..Default::default()
	/// };
	///
	/// assert_eq!(config.sizes().collect::<Vec<_>>(), [10, 20, 30]);
	/// ```
	pub fn sizes(&self) -> impl Iterator<Item = usize> {
		(self.min_size..=self.max_size).step_by(self.step.max(1))
	}
}

/// One line of a benchmark table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkRow {
	/// The size of the sets measured.
	pub size: usize,
	/// The mean time of one operation.
	pub mean: Duration,
}

impl BenchmarkRow {
	/// The mean time in microseconds.
	pub fn micros(&self) -> f64 {
		self.mean.as_secs_f64() * 1_000_000.0
	}
}

/// Runs [`measure_search_time()`] for every size in the config.
pub fn search_benchmark(config: &BenchmarkConfig) -> Vec<BenchmarkRow> {
	config
		.sizes()
		.map(|size| {
			let mean = measure_search_time(size, config.search_trials, config.seed);
			debug!(size, mean_us = mean.as_secs_f64() * 1e6, "measured search");
			BenchmarkRow { size, mean }
		})
		.collect()
}

/// Runs [`measure_union_time()`] for every size in the config.
pub fn union_benchmark(config: &BenchmarkConfig) -> Vec<BenchmarkRow> {
	config
		.sizes()
		.map(|size| {
			let mean = measure_union_time(size, config.union_trials, config.seed);
			debug!(size, mean_us = mean.as_secs_f64() * 1e6, "measured union");
			BenchmarkRow { size, mean }
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn random_set_is_reproducible() {
		let a = random_set(&mut StdRng::seed_from_u64(42), 200);
		let b = random_set(&mut StdRng::seed_from_u64(42), 200);
		let c = random_set(&mut StdRng::seed_from_u64(43), 200);

		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[test]
	fn random_set_tests() {
		let set = random_set(&mut StdRng::seed_from_u64(1), 500);

		assert!(set.len() <= 500);
		assert!(set.len() > 490);
		assert!(set.first().is_some_and(|point| point >= MIN_POINT));
		assert!(set.last().is_some_and(|point| point < MAX_POINT));
		assert!(random_set(&mut StdRng::seed_from_u64(1), 0).is_empty());
	}

	#[test]
	fn default_sizes() {
		assert_eq!(
			BenchmarkConfig::default().sizes().collect::<Vec<_>>(),
			[100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]
		);
	}

	#[test]
	fn zero_step_is_one() {
		let config = BenchmarkConfig {
			min_size: 1,
			max_size: 3,
			step: 0,
			..Default::default()
		};

		assert_eq!(config.sizes().collect::<Vec<_>>(), [1, 2, 3]);
	}

	#[test]
	fn zero_trials_is_zero() {
		assert_eq!(measure_search_time(10, 0, 0), Duration::ZERO);
		assert_eq!(measure_union_time(10, 0, 0), Duration::ZERO);
	}

	#[test]
	fn benchmark_rows() {
		let config = BenchmarkConfig {
			min_size: 10,
			max_size: 50,
			step: 20,
			search_trials: 5,
			union_trials: 2,
			seed: 9,
		};

		let search = search_benchmark(&config);
		let union = union_benchmark(&config);

		assert_eq!(search.iter().map(|row| row.size).collect::<Vec<_>>(), [10, 30, 50]);
		assert_eq!(union.iter().map(|row| row.size).collect::<Vec<_>>(), [10, 30, 50]);
		assert!(search.iter().all(|row| row.micros() >= 0.0));
	}
}
