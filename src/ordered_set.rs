//! A module containing [`OrderedSet`].

use alloc::vec::Vec;
use core::fmt;

use itertools::EitherOrBoth;
use smallvec::SmallVec;

use crate::utils::{
	cmp_points, invalid_point_panic, merge_walk, merge_walk_through,
};

/// An ordered set of real numbers stored as a strictly ascending
/// sequence.
///
/// Points are kept in a [`SmallVec`] that is scanned linearly from the
/// smallest point, so `insert()`, `search()` and `delete()` are all
/// `O(n)` in the worst case, with `search()` and `delete()` stopping
/// early as soon as they pass the point they are looking for.
///
/// The binary operations ([`OrderedSet::union()`],
/// [`OrderedSet::intersection()`], [`OrderedSet::difference()`],
/// [`OrderedSet::symmetric_difference()`] and
/// [`OrderedSet::is_subset()`]) each make a single forward pass over
/// both sets and never modify either of them.
///
/// # Examples
/// ```
/// use ordset::OrderedSet;
///
/// let mut set = OrderedSet::new();
///
/// set.insert(5.0);
/// set.insert(3.0);
/// set.insert(7.0);
/// set.insert(3.0);
///
/// assert_eq!(set.to_ordered_sequence(), [3.0, 5.0, 7.0]);
///
/// if set.search(5.0) {
/// 	println!("Set contains 5 :)");
/// }
///
/// assert_eq!(set.to_string(), "{ 3 5 7 }");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedSet {
	inner: SmallVec<[f64; 8]>,
}

/// The error returned when deleting a point that is not in the set.
/// Contains the point that was not found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotFoundError {
	/// The point which was not deleted, because it was not in the set.
	pub value: f64,
}

impl fmt::Display for NotFoundError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} not found", self.value)
	}
}

impl core::error::Error for NotFoundError {}

impl OrderedSet {
	/// Makes a new, empty `OrderedSet`.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let set = OrderedSet::new();
	///
	/// assert!(set.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn from_ascending(points: impl Iterator<Item = f64>) -> Self {
		OrderedSet {
			inner: points.collect(),
		}
	}

	/// Index of the first stored point not less than `point`, scanning
	/// up from the smallest.
	fn scan_to(&self, point: f64) -> Option<usize> {
		self.inner.iter().position(|existing| *existing >= point)
	}

	/// Adds a point to the set, keeping the points in ascending order.
	///
	/// If a point equal to the given point is already in the set then
	/// nothing happens. Note that `0.0` and `-0.0` are equal.
	///
	/// # Panics
	///
	/// Panics if the given point is NaN. See [`NaN`](crate#nan) for more
	/// details.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let mut set = OrderedSet::new();
	///
	/// set.insert(2.5);
	/// set.insert(-1.0);
	/// set.insert(2.5);
	///
	/// assert_eq!(set.to_ordered_sequence(), [-1.0, 2.5]);
	/// ```
	pub fn insert(&mut self, point: f64) {
		invalid_point_panic(point);

		match self.scan_to(point) {
			Some(index) if self.inner[index] == point => {}
			Some(index) => self.inner.insert(index, point),
			None => self.inner.push(point),
		}
	}

	/// Returns `true` if the given point is in the set, and `false` if
	/// not.
	///
	/// The scan stops at the first point greater than the given point.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([3.0, 5.0, 7.0]);
	///
	/// assert_eq!(set.search(5.0), true);
	/// assert_eq!(set.search(10.0), false);
	/// assert_eq!(set.search(f64::NAN), false);
	/// ```
	pub fn search(&self, point: f64) -> bool {
		self.scan_to(point)
			.is_some_and(|index| self.inner[index] == point)
	}

	/// Removes the given point from the set.
	///
	/// If the point is not in the set then a [`NotFoundError`] is
	/// returned and the set is not updated.
	///
	/// # Examples
	/// ```
	/// use ordset::{NotFoundError, OrderedSet};
	///
	/// let mut set = OrderedSet::from_slice([3.0, 5.0, 7.0]);
	///
	/// assert_eq!(set.delete(3.0), Ok(()));
	/// assert_eq!(set.delete(3.0), Err(NotFoundError { value: 3.0 }));
	/// assert_eq!(set.to_ordered_sequence(), [5.0, 7.0]);
	/// ```
	pub fn delete(&mut self, point: f64) -> Result<(), NotFoundError> {
		match self.scan_to(point) {
			Some(index) if self.inner[index] == point => {
				self.inner.remove(index);
				Ok(())
			}
			_ => Err(NotFoundError { value: point }),
		}
	}

	/// Removes every point from the set.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let mut set = OrderedSet::from_slice([1.0, 2.0]);
	///
	/// set.clear();
	///
	/// assert!(set.is_empty());
	/// assert_eq!(set.search(1.0), false);
	/// ```
	pub fn clear(&mut self) {
		self.inner.clear();
	}

	/// Returns the number of points in the set.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the set contains no points.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over every point in the set in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([2.0, 1.0]);
	///
	/// let mut iter = set.iter();
	///
	/// assert_eq!(iter.next(), Some(&1.0));
	/// assert_eq!(iter.next(), Some(&2.0));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &f64> {
		self.inner.iter()
	}

	/// Returns the smallest point in the set, if any.
	pub fn first(&self) -> Option<f64> {
		self.inner.first().copied()
	}

	/// Returns the largest point in the set, if any.
	pub fn last(&self) -> Option<f64> {
		self.inner.last().copied()
	}

	/// Returns the points of the set as a [`Vec`] in ascending order.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([7.0, 3.0, 5.0]);
	///
	/// assert_eq!(set.to_ordered_sequence(), [3.0, 5.0, 7.0]);
	/// ```
	pub fn to_ordered_sequence(&self) -> Vec<f64> {
		self.inner.to_vec()
	}

	/// Returns a new set containing every point that is in `self`, in
	/// `other`, or in both.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let a = OrderedSet::from_slice([1.0, 2.0, 3.0]);
	/// let b = OrderedSet::from_slice([3.0, 4.0]);
	///
	/// assert_eq!(
	/// 	OrderedSet::union(&a, &b).to_ordered_sequence(),
	/// 	[1.0, 2.0, 3.0, 4.0]
	/// );
	/// ```
	pub fn union(&self, other: &OrderedSet) -> OrderedSet {
		OrderedSet::from_ascending(merge_walk(self, other).map(|entry| {
			match entry {
				EitherOrBoth::Left(point)
				| EitherOrBoth::Right(point)
				| EitherOrBoth::Both(point, _) => point,
			}
		}))
	}

	/// Returns a new set containing every point that is in both `self`
	/// and `other`.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let a = OrderedSet::from_slice([1.0, 2.0, 3.0]);
	/// let b = OrderedSet::from_slice([3.0, 4.0]);
	///
	/// assert_eq!(a.intersection(&b).to_ordered_sequence(), [3.0]);
	/// ```
	pub fn intersection(&self, other: &OrderedSet) -> OrderedSet {
		// stops once either set runs out
		let last = match (self.last(), other.last()) {
			(Some(a), Some(b)) => Some(a.min(b)),
			_ => None,
		};
		OrderedSet::from_ascending(merge_walk_through(self, other, last).filter_map(
			|entry| match entry {
				EitherOrBoth::Both(point, _) => Some(point),
				_ => None,
			},
		))
	}

	/// Returns a new set containing every point that is in `self` but not
	/// in `other`.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let a = OrderedSet::from_slice([1.0, 2.0, 3.0]);
	/// let b = OrderedSet::from_slice([3.0, 4.0]);
	///
	/// assert_eq!(a.difference(&b).to_ordered_sequence(), [1.0, 2.0]);
	/// assert!(a.difference(&a).is_empty());
	/// ```
	pub fn difference(&self, other: &OrderedSet) -> OrderedSet {
		// stops once `self` runs out
		let walk = merge_walk_through(self, other, self.last());
		OrderedSet::from_ascending(walk.filter_map(
			|entry| match entry {
				EitherOrBoth::Left(point) => Some(point),
				_ => None,
			},
		))
	}

	/// Returns a new set containing every point that is in exactly one
	/// of `self` and `other`.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let a = OrderedSet::from_slice([1.0, 2.0, 3.0]);
	/// let b = OrderedSet::from_slice([3.0, 4.0]);
	///
	/// assert_eq!(
	/// 	a.symmetric_difference(&b).to_ordered_sequence(),
	/// 	[1.0, 2.0, 4.0]
	/// );
	/// ```
	pub fn symmetric_difference(&self, other: &OrderedSet) -> OrderedSet {
		OrderedSet::from_ascending(merge_walk(self, other).filter_map(
			|entry| match entry {
				EitherOrBoth::Left(point) | EitherOrBoth::Right(point) => {
					Some(point)
				}
				EitherOrBoth::Both(_, _) => None,
			},
		))
	}

	/// Returns `true` if every point in `self` is also in `other`, and
	/// `false` if not.
	///
	/// While a point of `self` is greater than the current point of
	/// `other` only the `other` cursor moves on. A point of `self` that is
	/// smaller than the current point of `other`, or that is left over
	/// once `other` runs out, cannot be in `other`.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let a = OrderedSet::from_slice([1.0, 2.0, 3.0]);
	/// let b = OrderedSet::from_slice([3.0, 4.0]);
	///
	/// assert_eq!(a.is_subset(&b), false);
	/// assert_eq!(OrderedSet::from_slice([3.0]).is_subset(&b), true);
	/// assert_eq!(OrderedSet::new().is_subset(&b), true);
	/// ```
	pub fn is_subset(&self, other: &OrderedSet) -> bool {
		let mut others = other.iter();
		self.iter().all(|point| {
			others.find(|candidate| cmp_points(point, candidate).is_le())
				== Some(point)
		})
	}

	/// Makes a new set from an array of points, in any order.
	///
	/// # Panics
	///
	/// Panics if any of the given points is NaN. See [`NaN`](crate#nan) for
	/// more details.
	///
	/// # Examples
	/// ```
	/// use ordset::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([4.0, 1.0, 4.0, 2.0]);
	///
	/// assert_eq!(set.to_ordered_sequence(), [1.0, 2.0, 4.0]);
	/// ```
	pub fn from_slice<const N: usize>(slice: [f64; N]) -> OrderedSet {
		slice.into_iter().collect()
	}
}

// Trait Impls ==========================

impl fmt::Display for OrderedSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{ ")?;
		for point in self.iter() {
			write!(f, "{point} ")?;
		}
		f.write_str("}")
	}
}

impl FromIterator<f64> for OrderedSet {
	fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
		let mut set = OrderedSet::new();
		set.extend(iter);
		set
	}
}

impl Extend<f64> for OrderedSet {
	fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
		for point in iter {
			self.insert(point);
		}
	}
}

impl IntoIterator for OrderedSet {
	type Item = f64;
	type IntoIter = IntoIter;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.inner.into_iter(),
		}
	}
}
/// An owning iterator over the points of an [`OrderedSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`OrderedSet`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter {
	inner: smallvec::IntoIter<[f64; 8]>,
}
impl Iterator for IntoIter {
	type Item = f64;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl DoubleEndedIterator for IntoIter {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}

impl<'a> IntoIterator for &'a OrderedSet {
	type Item = &'a f64;
	type IntoIter = core::slice::Iter<'a, f64>;
	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::OrderedSet;

	impl Serialize for OrderedSet {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for point in self.iter() {
				seq.serialize_element(point)?;
			}
			seq.end()
		}
	}

	impl<'de> Deserialize<'de> for OrderedSet {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(OrderedSetVisitor)
		}
	}

	struct OrderedSetVisitor;

	impl<'de> Visitor<'de> for OrderedSetVisitor {
		type Value = OrderedSet;

		fn expecting(
			&self,
			formatter: &mut alloc::fmt::Formatter,
		) -> alloc::fmt::Result {
			formatter.write_str("a sequence of non-NaN numbers")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = OrderedSet::new();
			while let Some(point) = access.next_element::<f64>()? {
				if point.is_nan() {
					return Err(serde::de::Error::custom(
						"NaN is not a valid point",
					));
				}
				set.insert(point);
			}
			Ok(set)
		}
	}
}
