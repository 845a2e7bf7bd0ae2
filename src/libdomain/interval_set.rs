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

//! Arbitrary subset of a totally ordered type, stored as disjoint ranges.
//!
//! It stores ranges in a sorted vector. The main advantage is the exact representation of a domain with "holes". For example `[1, 2] U (5, 6]` is stored as `{[1, 2], (5, 6]}`. The vector is kept canonical: ranges are non-empty, sorted by lower bound, pairwise disjoint and no two neighbours touch in a way that could be merged. Every constructor normalises its input, so two sets holding the same values are always structurally equal.
//!
//! Sets are ordered by inclusion, like [ranges](../range/index.html).
//!
//! # Examples
//!
//! ```rust
//! use domain::{IntervalSet, Range};
//!
//! let a: IntervalSet<i32> = vec![
//!   Range::closed(Some(0), Some(4)).unwrap(),
//!   Range::closed(Some(2), Some(6)).unwrap(),
//!   Range::closed(Some(9), Some(9)).unwrap()].into_iter().collect();
//! assert_eq!(a.interval_count(), 2);
//!
//! let b = IntervalSet::from(Range::closed(Some(5), Some(10)).unwrap());
//! assert_eq!((&a - &b).ranges(), &[Range::open_right(Some(0), Some(5)).unwrap()]);
//! assert!(&a & &b <= a);
//! ```

use crate::ops::{inclusion_order, Hull, Sample, Whole};
use crate::range::Range;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Sub};
use std::slice;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet<T> {
  ranges: Vec<Range<T>>,
}

impl<T> IntervalSet<T>
{
  pub fn empty() -> IntervalSet<T> {
    IntervalSet { ranges: vec![] }
  }

  /// The canonical ranges, sorted in ascending order.
  pub fn ranges(&self) -> &[Range<T>] {
    &self.ranges
  }

  pub fn iter(&self) -> slice::Iter<Range<T>> {
    self.ranges.iter()
  }

  pub fn interval_count(&self) -> usize {
    self.ranges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ranges.is_empty()
  }

  pub fn into_ranges(self) -> Vec<Range<T>> {
    self.ranges
  }
}

impl<T: Ord> IntervalSet<T>
{
  /// Builds the canonical set covering the values of `ranges`, which may be empty, overlapping or unsorted.
  pub fn new<I>(ranges: I) -> IntervalSet<T> where
   I: IntoIterator<Item=Range<T>>
  {
    let ranges = Range::join(ranges);
    trace!(ranges = ranges.len(), "normalised interval set");
    IntervalSet { ranges }
  }

  pub fn contains(&self, value: &T) -> bool {
    let idx = self.ranges.partition_point(|r| !r.upper().upper_admits(value));
    self.ranges.get(idx)
      .map_or(false, |r| r.contains(value))
  }

  /// Every range of `self` lies inside a single range of `other`.
  ///
  /// Testing range by range is enough because `other` is canonical: two of its ranges never need to cover one range of `self` jointly.
  pub fn is_subset(&self, other: &IntervalSet<T>) -> bool {
    self.ranges.iter()
      .all(|r| other.ranges.iter().any(|o| r.is_subset(o)))
  }

  pub fn is_proper_subset(&self, other: &IntervalSet<T>) -> bool {
    self.is_subset(other) && self != other
  }
}

// Pops the front of both queues, or nothing when one of them is exhausted.
fn pop_pair<T>(lhs: &mut VecDeque<T>, rhs: &mut VecDeque<T>) -> Option<(T, T)> {
  if lhs.is_empty() || rhs.is_empty() {
    None
  }
  else {
    Some((lhs.pop_front()?, rhs.pop_front()?))
  }
}

impl<T: Ord + Clone> IntervalSet<T>
{
  pub fn union(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
    IntervalSet::new(self.ranges.iter().chain(other.ranges.iter()).cloned())
  }

  pub fn intersection(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
    // Two disjoint products can still touch, so the products are joined again.
    let products = self.ranges.iter()
      .flat_map(|a| other.ranges.iter().map(move |b| a.intersection(b)));
    IntervalSet::new(products)
  }

  pub fn difference(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
    let mut lhs: VecDeque<Range<T>> = self.ranges.iter().cloned().collect();
    let mut rhs: VecDeque<Range<T>> = other.ranges.iter().cloned().collect();
    let mut res = Vec::with_capacity(lhs.len());
    while let Some((a, b)) = pop_pair(&mut lhs, &mut rhs) {
      if a == b {
        continue;
      }
      if a.overlaps(&b) {
        if a.lower() < b.lower() {
          let left = Range::from_bounds(a.lower().clone(), !b.lower().clone());
          if !left.is_empty() {
            res.push(left);
          }
        }
        match a.upper().cmp_as_upper(b.upper()) {
          Ordering::Greater => lhs.push_front(Range::from_bounds(!b.upper().clone(), a.upper().clone())),
          Ordering::Less => rhs.push_front(b),
          Ordering::Equal => ()
        }
      }
      else if a.lower() < b.lower() {
        res.push(a);
        rhs.push_front(b);
      }
      else {
        lhs.push_front(a);
      }
    }
    res.extend(lhs);
    IntervalSet::new(res)
  }

  /// The smallest range covering the whole set.
  pub fn span(&self) -> Range<T> {
    match (self.ranges.first(), self.ranges.last()) {
      (Some(front), Some(back)) => front.hull(back),
      _ => Range::empty()
    }
  }
}

impl<T> Whole for IntervalSet<T>
{
  fn whole() -> IntervalSet<T> {
    IntervalSet { ranges: vec![Range::whole()] }
  }
}

impl<T: Ord + Clone> Complement for IntervalSet<T>
{
  fn complement(&self) -> IntervalSet<T> {
    IntervalSet::whole().difference(self)
  }
}

impl<T: PartialEq> Sample for IntervalSet<T>
{
  type Item = T;

  /// The first sample found among the ranges, in ascending order.
  fn sample(&self) -> Option<&T> {
    self.ranges.iter().find_map(|r| r.sample())
  }
}

impl<T: Hash + PartialEq> Hash for IntervalSet<T>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.ranges.hash(state);
  }
}

impl<T: Ord> PartialOrd for IntervalSet<T>
{
  fn partial_cmp(&self, other: &IntervalSet<T>) -> Option<Ordering> {
    inclusion_order(self.is_subset(other), other.is_subset(self))
  }
}

impl<T: Ord> From<Range<T>> for IntervalSet<T>
{
  fn from(range: Range<T>) -> IntervalSet<T> {
    IntervalSet::new(Some(range))
  }
}

impl<T: Ord> FromIterator<Range<T>> for IntervalSet<T>
{
  fn from_iter<I>(iterable: I) -> IntervalSet<T> where
   I: IntoIterator<Item=Range<T>>
  {
    IntervalSet::new(iterable)
  }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
{
  type Item = &'a Range<T>;
  type IntoIter = slice::Iter<'a, Range<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.ranges.iter()
  }
}

forward_all_binop!(impl[Ord + Clone] BitOr, bitor for IntervalSet => union);
forward_all_binop!(impl[Ord + Clone] BitAnd, bitand for IntervalSet => intersection);
forward_all_binop!(impl[Ord + Clone] Sub, sub for IntervalSet => difference);

set_op_impl!(impl[Ord + Clone]
  Union, union for IntervalSet;
  Intersection, intersection for IntervalSet;
  Difference, difference for IntervalSet);

impl<T> Collection for IntervalSet<T>
{
  type Item = T;
}

impl<T: Ord> Contains for IntervalSet<T>
{
  fn contains(&self, value: &T) -> bool {
    IntervalSet::contains(self, value)
  }
}

impl<T: Ord> Subset for IntervalSet<T>
{
  fn is_subset(&self, other: &IntervalSet<T>) -> bool {
    IntervalSet::is_subset(self, other)
  }
}

impl<T: Ord> ProperSubset for IntervalSet<T>
{
  fn is_proper_subset(&self, other: &IntervalSet<T>) -> bool {
    IntervalSet::is_proper_subset(self, other)
  }
}

impl<T> Empty for IntervalSet<T>
{
  fn empty() -> IntervalSet<T> {
    IntervalSet::empty()
  }
}

impl<T> IsEmpty for IntervalSet<T>
{
  fn is_empty(&self) -> bool {
    IntervalSet::is_empty(self)
  }
}

impl<T: Display + PartialEq> Display for IntervalSet<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "{{")?;
    for (i, r) in self.ranges.iter().enumerate() {
      if i > 0 {
        write!(formatter, ", ")?;
      }
      write!(formatter, "{}", r)?;
    }
    write!(formatter, "}}")
  }
}

impl<T: Serialize + PartialEq> Serialize for IntervalSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(self.ranges.iter())
  }
}

impl<'de, T> Deserialize<'de> for IntervalSet<T> where
 T: Deserialize<'de> + Ord
{
  fn deserialize<D>(deserializer: D) -> Result<IntervalSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    Vec::<Range<T>>::deserialize(deserializer).map(IntervalSet::new)
  }
}
