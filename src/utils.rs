use core::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

use crate::OrderedSet;

pub(crate) fn cmp_points(a: &f64, b: &f64) -> Ordering {
	// stored points are never NaN so this is a total order
	a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub(crate) fn invalid_point_panic(point: f64) {
	if point.is_nan() {
		panic!(
			"invalid point: NaN has no position in an ascending order, see the \
			 crate-level docs on NaN"
		);
	}
}

/// Walks both sets in ascending order at the same time, pairing up equal
/// points. Neither cursor ever moves backwards.
pub(crate) fn merge_walk<'a>(
	a: &'a OrderedSet,
	b: &'a OrderedSet,
) -> impl Iterator<Item = EitherOrBoth<f64, f64>> + 'a {
	a.iter().copied().merge_join_by(b.iter().copied(), cmp_points)
}

/// Like [`merge_walk`] but only yields entries up to and including
/// `last`, nothing if there is no `last`.
pub(crate) fn merge_walk_through<'a>(
	a: &'a OrderedSet,
	b: &'a OrderedSet,
	last: Option<f64>,
) -> impl Iterator<Item = EitherOrBoth<f64, f64>> + 'a {
	merge_walk(a, b).take_while(move |entry| {
		last.is_some_and(|last| cmp_points(&leading_point(entry), &last).is_le())
	})
}

fn leading_point(entry: &EitherOrBoth<f64, f64>) -> f64 {
	match entry {
		EitherOrBoth::Left(point)
		| EitherOrBoth::Right(point)
		| EitherOrBoth::Both(point, _) => *point,
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn cmp_points_tests() {
		assert_eq!(cmp_points(&1.0, &2.0), Ordering::Less);
		assert_eq!(cmp_points(&2.0, &1.0), Ordering::Greater);
		assert_eq!(cmp_points(&-0.0, &0.0), Ordering::Equal);
	}

	#[test]
	#[should_panic(expected = "invalid point")]
	fn nan_panics() {
		invalid_point_panic(f64::NAN);
	}

	#[test]
	fn merge_walk_tests() {
		let a = OrderedSet::from_slice([1.0, 2.0, 3.0]);
		let b = OrderedSet::from_slice([3.0, 4.0]);

		assert_eq!(
			merge_walk(&a, &b).collect::<Vec<_>>(),
			[
				EitherOrBoth::Left(1.0),
				EitherOrBoth::Left(2.0),
				EitherOrBoth::Both(3.0, 3.0),
				EitherOrBoth::Right(4.0),
			]
		);
		assert_eq!(merge_walk(&a, &OrderedSet::new()).count(), 3);
	}

	#[test]
	fn merge_walk_through_tests() {
		let single = OrderedSet::from_slice([2.0]);
		let big = OrderedSet::from_slice([1.0, 2.0, 3.0, 4.0, 5.0]);

		//nothing past the last point of the single set is walked
		assert_eq!(
			merge_walk_through(&single, &big, single.last()).collect::<Vec<_>>(),
			[EitherOrBoth::Right(1.0), EitherOrBoth::Both(2.0, 2.0)]
		);
		assert_eq!(
			merge_walk_through(&big, &single, Some(3.0)).collect::<Vec<_>>(),
			[
				EitherOrBoth::Left(1.0),
				EitherOrBoth::Both(2.0, 2.0),
				EitherOrBoth::Left(3.0),
			]
		);
		assert_eq!(merge_walk_through(&big, &single, None).count(), 0);
	}
}
