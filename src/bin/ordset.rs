//! ordset - demo and benchmark runner for `OrderedSet`
//!
//! Usage:
//!   ordset [demo|bench] [options]
//!
//! With no subcommand the demo runs first, followed by the benchmarks.

use anyhow::ensure;
use clap::{Args, Parser, Subcommand};
use ordset::workload::{
	random_set, search_benchmark, union_benchmark, BenchmarkConfig,
	BenchmarkRow,
};
use ordset::OrderedSet;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ordset")]
#[command(about = "Demo and benchmark runner for OrderedSet")]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Run the self-check, then every operation on two random sets
	Demo(DemoArgs),
	/// Time searches and unions over a range of set sizes
	Bench(BenchArgs),
}

#[derive(Args)]
struct DemoArgs {
	/// Seed for the random sets, picked at random if not given
	#[arg(long)]
	seed: Option<u64>,
	/// Number of random points drawn for each set
	#[arg(long, default_value_t = 10)]
	len: usize,
}

impl Default for DemoArgs {
	fn default() -> Self {
		DemoArgs { seed: None, len: 10 }
	}
}

#[derive(Args)]
struct BenchArgs {
	/// Seed every measurement starts from
	#[arg(long, default_value_t = 0)]
	seed: u64,
	/// Smallest set size
	#[arg(long, default_value_t = 100)]
	min_size: usize,
	/// Largest set size, inclusive
	#[arg(long, default_value_t = 1000)]
	max_size: usize,
	/// Difference between consecutive set sizes
	#[arg(long, default_value_t = 100)]
	step: usize,
	/// Searches timed per size
	#[arg(long, default_value_t = 1000)]
	search_trials: u32,
	/// Unions timed per size
	#[arg(long, default_value_t = 100)]
	union_trials: u32,
}

impl From<BenchArgs> for BenchmarkConfig {
	fn from(args: BenchArgs) -> Self {
		BenchmarkConfig {
			min_size: args.min_size,
			max_size: args.max_size,
			step: args.step,
			search_trials: args.search_trials,
			union_trials: args.union_trials,
			seed: args.seed,
		}
	}
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	match cli.command {
		Some(Commands::Demo(args)) => demo(args),
		Some(Commands::Bench(args)) => {
			bench(&args.into());
			Ok(())
		}
		None => {
			demo(DemoArgs::default())?;
			bench(&BenchmarkConfig::default());
			Ok(())
		}
	}
}

/// Uses the `RUST_LOG` directives when given and valid, `info` otherwise.
fn env_filter(rust_log: Option<&str>) -> EnvFilter {
	rust_log
		.and_then(|directives| EnvFilter::try_new(directives).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}

fn self_check() -> anyhow::Result<()> {
	let mut set = OrderedSet::from_slice([5.0, 3.0, 7.0]);

	ensure!(set.search(5.0), "5 should be in {set}");
	ensure!(set.search(3.0), "3 should be in {set}");
	ensure!(!set.search(10.0), "10 should not be in {set}");

	set.delete(3.0)?;
	ensure!(!set.search(3.0), "3 should have been deleted from {set}");

	let a = OrderedSet::from_slice([1.0, 2.0, 3.0]);
	let b = OrderedSet::from_slice([3.0, 4.0]);

	let union = OrderedSet::union(&a, &b);
	ensure!(
		union.search(1.0) && union.search(4.0) && union.search(3.0),
		"bad union {union}"
	);

	let intersection = OrderedSet::intersection(&a, &b);
	ensure!(
		intersection.search(3.0) && !intersection.search(1.0),
		"bad intersection {intersection}"
	);

	println!("All tests passed.");
	Ok(())
}

fn demo(args: DemoArgs) -> anyhow::Result<()> {
	self_check()?;

	let seed = args.seed.unwrap_or_else(rand::random);
	info!(seed, len = args.len, "running demo");

	let mut rng = StdRng::seed_from_u64(seed);
	let points = Uniform::new(ordset::workload::MIN_POINT, ordset::workload::MAX_POINT);

	let mut set1 = random_set(&mut rng, args.len);
	let mut set2 = random_set(&mut rng, args.len);

	println!("Set 1: {set1}");
	println!("Set 2: {set2}");

	let point = points.sample(&mut rng);
	println!("{point} in Set 1: {}\n", yes_no(set1.search(point)));
	let point = points.sample(&mut rng);
	println!("{point} in Set 2: {}\n", yes_no(set2.search(point)));

	for set in [&mut set1, &mut set2] {
		if let Err(error) = set.delete(points.sample(&mut rng)) {
			println!("{error}\n");
		}
		println!("{set}");
	}

	println!("Union: {}", set1.union(&set2));
	println!("Intersection: {}", set1.intersection(&set2));
	println!("Set Difference (Set1 - Set2): {}", set1.difference(&set2));
	println!("Symmetric Difference: {}", set1.symmetric_difference(&set2));

	println!("Set 1 is subset of Set 2: {}", yes_no(set1.is_subset(&set2)));

	set1.clear();
	println!("Set 1: {set1}");
	set2.clear();
	println!("Set 2: {set2}");

	Ok(())
}

fn bench(config: &BenchmarkConfig) {
	info!(?config, "running benchmarks");

	println!("Search Benchmark (microseconds):");
	print_table(&search_benchmark(config));
	println!("\nUnion Benchmark (microseconds):");
	print_table(&union_benchmark(config));
}

fn print_table(rows: &[BenchmarkRow]) {
	println!("Size\t\tTime");
	for row in rows {
		println!("{}\t\t{}", row.size, row.micros());
	}
}

fn yes_no(answer: bool) -> &'static str {
	if answer {
		"Yes"
	} else {
		"No"
	}
}

#[cfg(test)]
mod tests {
	use tracing::Level;

	use super::*;

	fn debug_enabled(filter: EnvFilter) -> (bool, bool) {
		let subscriber = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::sink)
			.finish();
		tracing::subscriber::with_default(subscriber, || {
			(
				tracing::enabled!(target: "ordset::workload", Level::DEBUG),
				tracing::enabled!(target: "ordset::workload", Level::INFO),
			)
		})
	}

	#[test]
	fn rust_log_debug_shows_measurements() {
		assert_eq!(debug_enabled(env_filter(Some("debug"))), (true, true));
	}

	#[test]
	fn filter_defaults_to_info() {
		assert_eq!(debug_enabled(env_filter(None)), (false, true));
		assert_eq!(debug_enabled(env_filter(Some("ordset=loud"))), (false, true));
	}

	#[test]
	fn self_check_passes() {
		self_check().unwrap();
	}

	#[test]
	fn demo_runs_with_seed() {
		demo(DemoArgs {
			seed: Some(7),
			len: 10,
		})
		.unwrap();
		demo(DemoArgs { seed: Some(1), len: 0 }).unwrap();
	}

	#[test]
	fn bench_args_tests() {
		let cli = Cli::try_parse_from([
			"ordset",
			"bench",
			"--max-size",
			"300",
			"--union-trials",
			"5",
			"--seed",
			"3",
		])
		.unwrap();

		let Some(Commands::Bench(args)) = cli.command else {
			panic!("expected the bench subcommand");
		};
		assert_eq!(
			BenchmarkConfig::from(args),
			BenchmarkConfig {
				max_size: 300,
				union_trials: 5,
				seed: 3,
				..Default::default()
			}
		);
	}

	#[test]
	fn no_subcommand_runs_everything() {
		assert!(Cli::try_parse_from(["ordset"]).unwrap().command.is_none());
	}
}
