// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Contiguous interval over any totally ordered type.
//!
//! A [`Range`] is a pair of [`Bound`]s. Each side is included or excluded, and missing sides are the infinite sentinels, so `[0, 10)`, `(-inf, 3]` or `(-inf, +inf)` are all ranges. A range is empty when both bounds sit on the same value and at least one of them is excluded; all empty ranges are equal to each other whatever that value is.
//!
//! Ranges are ordered by inclusion: `a <= b` holds when `a` is a sub-range of `b`, and two overlapping ranges where none contains the other are incomparable.
//!
//! # Examples
//!
//! ```rust
//! use domain::Range;
//!
//! let a = Range::closed(Some(0), Some(10)).unwrap();
//! let b = Range::closed(Some(5), Some(15)).unwrap();
//! assert_eq!(&a & &b, Range::closed(Some(5), Some(10)).unwrap());
//! assert!(a.contains(&10));
//! assert_eq!(a.diff(&b), vec![Range::open_right(Some(0), Some(5)).unwrap()]);
//!
//! let joined = Range::join(vec![
//!   Range::open_right(Some(0), Some(5)).unwrap(),
//!   Range::open_right(Some(5), Some(10)).unwrap()]);
//! assert_eq!(joined, vec![Range::open_right(Some(0), Some(10)).unwrap()]);
//! ```

use crate::bound::{Bound, BoundKind, Extended};
use crate::error::Error;
use crate::ops::{inclusion_order, Hull, Sample, Whole};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::{max, min, Ordering};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::BitAnd;

/// Shape of a range, read from the kinds of its two bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
  /// `[a, b]`
  Closed,
  /// `(a, b)`
  Open,
  /// `(a, b]`
  OpenLeft,
  /// `[a, b)`
  OpenRight,
}

#[derive(Debug, Clone, Copy)]
pub struct Range<T> {
  lower: Bound<T>,
  upper: Bound<T>,
}

impl<T> Range<T>
{
  /// The canonical empty range.
  pub fn empty() -> Range<T> {
    Range {
      lower: Bound::neg_infinity(),
      upper: Bound::neg_infinity()
    }
  }

  pub fn lower(&self) -> &Bound<T> {
    &self.lower
  }

  pub fn upper(&self) -> &Bound<T> {
    &self.upper
  }

  pub fn into_bounds(self) -> (Bound<T>, Bound<T>) {
    (self.lower, self.upper)
  }

  pub fn kind(&self) -> Kind {
    match (self.lower.kind(), self.upper.kind()) {
      (BoundKind::Included, BoundKind::Included) => Kind::Closed,
      (BoundKind::Excluded, BoundKind::Excluded) => Kind::Open,
      (BoundKind::Excluded, BoundKind::Included) => Kind::OpenLeft,
      (BoundKind::Included, BoundKind::Excluded) => Kind::OpenRight
    }
  }
}

impl<T: PartialEq> Range<T>
{
  pub fn is_empty(&self) -> bool {
    self.lower.value() == self.upper.value()
      && (self.lower.is_excluded() || self.upper.is_excluded())
  }
}

impl<T: Ord> Range<T>
{
  /// Builds a range from two bounds.
  ///
  /// Fails with [`Error::InvalidRange`] when the lower value lies above the upper value. Equal values are accepted and may yield an empty range.
  pub fn new(lower: Bound<T>, upper: Bound<T>) -> Result<Range<T>, Error> {
    if lower.value() > upper.value() {
      Err(Error::InvalidRange)
    }
    else {
      Ok(Range { lower, upper })
    }
  }

  // Callers guarantee the ordering of the values.
  pub(crate) fn from_bounds(lower: Bound<T>, upper: Bound<T>) -> Range<T> {
    debug_assert!(lower.value() <= upper.value(), "Range bounds out of order.");
    Range { lower, upper }
  }

  fn with_kinds(lower: Option<T>, lower_kind: BoundKind, upper: Option<T>, upper_kind: BoundKind) -> Result<Range<T>, Error> {
    let lower = Bound::safe(lower.map_or(Extended::NegInfinity, Extended::Finite), lower_kind);
    let upper = Bound::safe(upper.map_or(Extended::PosInfinity, Extended::Finite), upper_kind);
    Range::new(lower, upper)
  }

  /// `[lower, upper]`, a missing side is unbounded.
  pub fn closed(lower: Option<T>, upper: Option<T>) -> Result<Range<T>, Error> {
    Range::with_kinds(lower, BoundKind::Included, upper, BoundKind::Included)
  }

  /// `(lower, upper)`, a missing side is unbounded.
  pub fn open(lower: Option<T>, upper: Option<T>) -> Result<Range<T>, Error> {
    Range::with_kinds(lower, BoundKind::Excluded, upper, BoundKind::Excluded)
  }

  /// `(lower, upper]`, a missing side is unbounded.
  pub fn open_left(lower: Option<T>, upper: Option<T>) -> Result<Range<T>, Error> {
    Range::with_kinds(lower, BoundKind::Excluded, upper, BoundKind::Included)
  }

  /// `[lower, upper)`, a missing side is unbounded.
  pub fn open_right(lower: Option<T>, upper: Option<T>) -> Result<Range<T>, Error> {
    Range::with_kinds(lower, BoundKind::Included, upper, BoundKind::Excluded)
  }

  pub fn contains(&self, value: &T) -> bool {
    self.lower.lower_admits(value) && self.upper.upper_admits(value)
  }

  // The tighter lower bound and the tighter upper bound of the two ranges.
  fn meet<'a>(&'a self, other: &'a Range<T>) -> (&'a Bound<T>, &'a Bound<T>) {
    let lower = max(&self.lower, &other.lower);
    let upper =
      match self.upper.cmp_as_upper(&other.upper) {
        Ordering::Greater => &other.upper,
        _ => &self.upper
      };
    (lower, upper)
  }

  pub fn overlaps(&self, other: &Range<T>) -> bool {
    let (lower, upper) = self.meet(other);
    match lower.value().cmp(upper.value()) {
      Ordering::Less => true,
      Ordering::Equal => lower.is_included() && upper.is_included(),
      Ordering::Greater => false
    }
  }

  /// `self` is empty or lies entirely inside `other`.
  pub fn is_subset(&self, other: &Range<T>) -> bool {
    self.is_empty() || (
      other.lower <= self.lower
      && self.upper.cmp_as_upper(&other.upper) != Ordering::Greater)
  }

  pub fn is_proper_subset(&self, other: &Range<T>) -> bool {
    self.is_subset(other) && self != other
  }

  // Ranges are sorted on their lower bounds and `other` does not start before `self`.
  fn joinable(&self, other: &Range<T>) -> bool {
    self.overlaps(other)
      || (self.upper.value() == other.lower.value()
        && (self.upper.is_included() || other.lower.is_included()))
  }

  // Extends `self` so it covers `other`, keeping the more inclusive bound on each side.
  fn absorb(&mut self, other: Range<T>) {
    let (lower, upper) = other.into_bounds();
    if lower < self.lower {
      self.lower = lower;
    }
    if upper.cmp_as_upper(&self.upper) == Ordering::Greater {
      self.upper = upper;
    }
  }

  /// Merges `ranges` into the minimal sorted sequence of disjoint, non-touching ranges covering the same values.
  ///
  /// Empty ranges are dropped. The result does not depend on the order of `ranges`.
  pub fn join<I>(ranges: I) -> Vec<Range<T>> where
   I: IntoIterator<Item=Range<T>>
  {
    let mut sorted: Vec<Range<T>> = ranges.into_iter()
      .filter(|r| !r.is_empty())
      .collect();
    sorted.sort_by(|a, b| a.lower.cmp(&b.lower));
    let mut joined: Vec<Range<T>> = Vec::with_capacity(sorted.len());
    for next in sorted {
      match joined.last_mut() {
        Some(current) if current.joinable(&next) => current.absorb(next),
        _ => joined.push(next)
      }
    }
    joined
  }
}

impl<T: Ord + Clone> Range<T>
{
  pub fn singleton(value: T) -> Range<T> {
    let bound = Bound::safe_included(Extended::Finite(value));
    Range::from_bounds(bound.clone(), bound)
  }

  fn empty_at(value: Extended<T>) -> Range<T> {
    Range::from_bounds(Bound::excluded(value.clone()), Bound::excluded(value))
  }

  /// The values present in both ranges.
  ///
  /// At equal values the excluded bound wins on both sides. When the ranges are disjoint, the result is an empty range.
  pub fn intersection(&self, other: &Range<T>) -> Range<T> {
    let (lower, upper) = self.meet(other);
    if lower.value() > upper.value() {
      Range::empty_at(upper.value().clone())
    }
    else {
      Range::from_bounds(lower.clone(), upper.clone())
    }
  }

  /// The values of `self` absent from `other`, as at most two ranges (the part before `other`, then the part after it).
  pub fn diff(&self, other: &Range<T>) -> Vec<Range<T>> {
    let x = self.intersection(other);
    if x == *self {
      vec![]
    }
    else if x.is_empty() {
      vec![self.clone()]
    }
    else {
      let (x_lower, x_upper) = x.into_bounds();
      let before = Range::from_bounds(self.lower.clone(), !x_lower);
      let after = Range::from_bounds(!x_upper, self.upper.clone());
      vec![before, after].into_iter()
        .filter(|r| !r.is_empty())
        .collect()
    }
  }
}

impl<T> Whole for Range<T>
{
  fn whole() -> Range<T> {
    Range {
      lower: Bound::neg_infinity(),
      upper: Bound::pos_infinity()
    }
  }
}

impl<T: Ord + Clone> Hull for Range<T>
{
  type Output = Range<T>;

  fn hull(&self, other: &Range<T>) -> Range<T> {
    if self.is_empty() { other.clone() }
    else if other.is_empty() { self.clone() }
    else {
      let upper =
        match self.upper.cmp_as_upper(&other.upper) {
          Ordering::Less => &other.upper,
          _ => &self.upper
        };
      Range::from_bounds(min(&self.lower, &other.lower).clone(), upper.clone())
    }
  }
}

impl<T: PartialEq> Sample for Range<T>
{
  type Item = T;

  /// The included endpoint of the range, `None` for open and empty ranges.
  fn sample(&self) -> Option<&T> {
    if self.is_empty() {
      return None;
    }
    match self.kind() {
      Kind::Closed | Kind::OpenRight => self.lower.value().finite(),
      Kind::OpenLeft => self.upper.value().finite(),
      Kind::Open => None
    }
  }
}

impl<T: PartialEq> PartialEq for Range<T>
{
  fn eq(&self, other: &Range<T>) -> bool {
    (self.is_empty() && other.is_empty())
      || (self.lower == other.lower && self.upper == other.upper)
  }
}

impl<T: Eq> Eq for Range<T> {}

impl<T: Hash + PartialEq> Hash for Range<T>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    if self.is_empty() {
      state.write_u8(0);
    }
    else {
      state.write_u8(1);
      self.lower.hash(state);
      self.upper.hash(state);
    }
  }
}

impl<T: Ord> PartialOrd for Range<T>
{
  fn partial_cmp(&self, other: &Range<T>) -> Option<Ordering> {
    inclusion_order(self.is_subset(other), other.is_subset(self))
  }
}

forward_all_binop!(impl[Ord + Clone] BitAnd, bitand for Range => intersection);

impl<T> Collection for Range<T>
{
  type Item = T;
}

impl<T: Ord> Contains for Range<T>
{
  fn contains(&self, value: &T) -> bool {
    Range::contains(self, value)
  }
}

set_op_impl!(impl[Ord + Clone] Intersection, intersection for Range);

impl<T: Ord> Subset for Range<T>
{
  fn is_subset(&self, other: &Range<T>) -> bool {
    Range::is_subset(self, other)
  }
}

impl<T: Ord> ProperSubset for Range<T>
{
  fn is_proper_subset(&self, other: &Range<T>) -> bool {
    Range::is_proper_subset(self, other)
  }
}

impl<T: Ord> Overlap for Range<T>
{
  fn overlap(&self, other: &Range<T>) -> bool {
    self.overlaps(other)
  }
}

impl<T: Ord> Disjoint for Range<T>
{
  fn is_disjoint(&self, other: &Range<T>) -> bool {
    !self.overlaps(other)
  }
}

impl<T> Empty for Range<T>
{
  fn empty() -> Range<T> {
    Range::empty()
  }
}

impl<T: PartialEq> IsEmpty for Range<T>
{
  fn is_empty(&self) -> bool {
    Range::is_empty(self)
  }
}

impl<T: Display + PartialEq> Display for Range<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    if self.is_empty() {
      return write!(formatter, "{{}}");
    }
    let open = if self.lower.is_included() { "[" } else { "(" };
    let close = if self.upper.is_included() { "]" } else { ")" };
    write!(formatter, "{}{}, {}{}", open, self.lower.value(), self.upper.value(), close)
  }
}

impl<T: Serialize + PartialEq> Serialize for Range<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    if self.is_empty() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(&self.lower, &self.upper))
    }
  }
}

impl<'de, T> Deserialize<'de> for Range<T> where
 T: Deserialize<'de> + Ord
{
  fn deserialize<D>(deserializer: D) -> Result<Range<T>, D::Error> where
   D: Deserializer<'de>
  {
    match Option::<(Bound<T>, Bound<T>)>::deserialize(deserializer)? {
      Some((lower, upper)) => Range::new(lower, upper).map_err(D::Error::custom),
      None => Ok(Range::empty())
    }
  }
}
