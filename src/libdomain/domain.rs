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

//! Domains mixing discrete and interval representations.
//!
//! A [`Domain`] is either an [`EquivalenceSet`] or an [`IntervalSet`]. Operations between two equivalence sets stay discrete; as soon as one operand is an interval set, the equivalence set is converted to singleton ranges first and the interval algorithm runs.
//!
//! The same mixing is available directly on the two set types through the `gcollections` operations with a foreign right-hand side (`Union<IntervalSet<T>> for EquivalenceSet<T>`...) and through `PartialEq`/`PartialOrd` between them.
//!
//! # Examples
//!
//! ```rust
//! use domain::{iter_domain_endpoints, Domain, EquivalenceSet, Extended, IntervalSet, Range};
//!
//! let discrete = Domain::from(EquivalenceSet::new(vec![3, 12]));
//! let dense = Domain::from(IntervalSet::from(Range::closed(Some(0), Some(10)).unwrap()));
//!
//! let meet = &discrete & &dense;
//! assert!(meet.contains(&3));
//! assert!(!meet.contains(&12));
//!
//! let bounds: Vec<_> = iter_domain_endpoints(&[discrete, dense]).collect();
//! assert_eq!(bounds, vec![
//!   Extended::Finite(3), Extended::Finite(12),
//!   Extended::Finite(0), Extended::Finite(10)]);
//! ```

use crate::bound::Extended;
use crate::equivalence_set::EquivalenceSet;
use crate::interval_set::IntervalSet;
use crate::ops::{inclusion_order, Sample};
use gcollections::ops::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Sub};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
  serialize = "T: Serialize + PartialEq",
  deserialize = "T: Deserialize<'de> + Ord + Hash"))]
pub enum Domain<T> {
  Equivalence(EquivalenceSet<T>),
  Interval(IntervalSet<T>),
}

impl<T: Eq + Hash> Domain<T>
{
  pub fn is_empty(&self) -> bool {
    match self {
      Domain::Equivalence(e) => e.is_empty(),
      Domain::Interval(s) => s.is_empty()
    }
  }
}

impl<T: Ord + Hash + Clone> Domain<T>
{
  /// The domain as an interval set, converting an equivalence set to singleton ranges.
  pub fn to_interval_set(&self) -> Cow<IntervalSet<T>> {
    match self {
      Domain::Equivalence(e) => Cow::Owned(e.to_interval_set()),
      Domain::Interval(s) => Cow::Borrowed(s)
    }
  }

  fn combine(&self, other: &Domain<T>,
    discrete: fn(&EquivalenceSet<T>, &EquivalenceSet<T>) -> EquivalenceSet<T>,
    dense: fn(&IntervalSet<T>, &IntervalSet<T>) -> IntervalSet<T>) -> Domain<T>
  {
    match (self, other) {
      (Domain::Equivalence(a), Domain::Equivalence(b)) => Domain::Equivalence(discrete(a, b)),
      _ => Domain::Interval(dense(&self.to_interval_set(), &other.to_interval_set()))
    }
  }

  pub fn union(&self, other: &Domain<T>) -> Domain<T> {
    self.combine(other, EquivalenceSet::union, IntervalSet::union)
  }

  pub fn intersection(&self, other: &Domain<T>) -> Domain<T> {
    self.combine(other, EquivalenceSet::intersection, IntervalSet::intersection)
  }

  pub fn difference(&self, other: &Domain<T>) -> Domain<T> {
    self.combine(other, EquivalenceSet::difference, IntervalSet::difference)
  }

  pub fn contains(&self, value: &T) -> bool {
    match self {
      Domain::Equivalence(e) => e.contains(value),
      Domain::Interval(s) => s.contains(value)
    }
  }

  pub fn is_subset(&self, other: &Domain<T>) -> bool {
    match (self, other) {
      (Domain::Equivalence(a), Domain::Equivalence(b)) => a.is_subset(b),
      _ => self.to_interval_set().is_subset(&other.to_interval_set())
    }
  }

  /// The smallest and the largest endpoint of the domain, a single item when both are the same value and nothing for an empty domain.
  pub fn endpoints(&self) -> Endpoints<T> {
    match self {
      Domain::Equivalence(e) => {
        let low = e.iter().min().cloned().map(Extended::Finite);
        let high = e.iter().max().cloned().map(Extended::Finite);
        Endpoints::new(low, high)
      }
      Domain::Interval(s) => {
        let low = s.ranges().first().map(|r| r.lower().value().clone());
        let high = s.ranges().last().map(|r| r.upper().value().clone());
        Endpoints::new(low, high)
      }
    }
  }
}

impl<T: Eq + Hash + Clone> Sample for Domain<T>
{
  type Item = T;

  fn sample(&self) -> Option<&T> {
    match self {
      Domain::Equivalence(e) => e.sample(),
      Domain::Interval(s) => s.sample()
    }
  }
}

impl<T> From<EquivalenceSet<T>> for Domain<T>
{
  fn from(e: EquivalenceSet<T>) -> Domain<T> {
    Domain::Equivalence(e)
  }
}

impl<T> From<IntervalSet<T>> for Domain<T>
{
  fn from(s: IntervalSet<T>) -> Domain<T> {
    Domain::Interval(s)
  }
}

impl<T: Ord + Hash + Clone> PartialEq for Domain<T>
{
  fn eq(&self, other: &Domain<T>) -> bool {
    match (self, other) {
      (Domain::Equivalence(a), Domain::Equivalence(b)) => a == b,
      (Domain::Interval(a), Domain::Interval(b)) => a == b,
      _ => self.to_interval_set() == other.to_interval_set()
    }
  }
}

impl<T: Ord + Hash + Clone> Eq for Domain<T> {}

impl<T: Ord + Hash + Clone> PartialOrd for Domain<T>
{
  fn partial_cmp(&self, other: &Domain<T>) -> Option<Ordering> {
    inclusion_order(self.is_subset(other), other.is_subset(self))
  }
}

forward_all_binop!(impl[Ord + Hash + Clone] BitOr, bitor for Domain => union);
forward_all_binop!(impl[Ord + Hash + Clone] BitAnd, bitand for Domain => intersection);
forward_all_binop!(impl[Ord + Hash + Clone] Sub, sub for Domain => difference);

set_op_impl!(impl[Ord + Hash + Clone]
  Union, union for Domain;
  Intersection, intersection for Domain;
  Difference, difference for Domain);

// Set operations where one side is an equivalence set and the other an interval set; the result is an interval set.
macro_rules! mixed_op_impl
{
  ( $( $t:ident, $m:ident );* ) =>
  {$(
    impl<T: Ord + Hash + Clone> $t<IntervalSet<T>> for EquivalenceSet<T>
    {
      type Output = IntervalSet<T>;

      fn $m(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        IntervalSet::$m(&self.to_interval_set(), other)
      }
    }

    impl<T: Ord + Hash + Clone> $t<EquivalenceSet<T>> for IntervalSet<T>
    {
      type Output = IntervalSet<T>;

      fn $m(&self, other: &EquivalenceSet<T>) -> IntervalSet<T> {
        IntervalSet::$m(self, &other.to_interval_set())
      }
    }
  )*}
}

mixed_op_impl! {
  Union, union;
  Intersection, intersection;
  Difference, difference
}

impl<T: Ord + Hash + Clone> Subset<IntervalSet<T>> for EquivalenceSet<T>
{
  fn is_subset(&self, other: &IntervalSet<T>) -> bool {
    self.to_interval_set().is_subset(other)
  }
}

impl<T: Ord + Hash + Clone> Subset<EquivalenceSet<T>> for IntervalSet<T>
{
  fn is_subset(&self, other: &EquivalenceSet<T>) -> bool {
    IntervalSet::is_subset(self, &other.to_interval_set())
  }
}

impl<T: Ord + Hash + Clone> PartialEq<IntervalSet<T>> for EquivalenceSet<T>
{
  fn eq(&self, other: &IntervalSet<T>) -> bool {
    self.to_interval_set() == *other
  }
}

impl<T: Ord + Hash + Clone> PartialEq<EquivalenceSet<T>> for IntervalSet<T>
{
  fn eq(&self, other: &EquivalenceSet<T>) -> bool {
    *self == other.to_interval_set()
  }
}

impl<T: Ord + Hash + Clone> PartialOrd<IntervalSet<T>> for EquivalenceSet<T>
{
  fn partial_cmp(&self, other: &IntervalSet<T>) -> Option<Ordering> {
    self.to_interval_set().partial_cmp(other)
  }
}

impl<T: Ord + Hash + Clone> PartialOrd<EquivalenceSet<T>> for IntervalSet<T>
{
  fn partial_cmp(&self, other: &EquivalenceSet<T>) -> Option<Ordering> {
    self.partial_cmp(&other.to_interval_set())
  }
}

/// Iterator over the endpoints of one domain, see [`Domain::endpoints`].
#[derive(Debug, Clone)]
pub struct Endpoints<T> {
  low: Option<Extended<T>>,
  high: Option<Extended<T>>,
}

impl<T: PartialEq> Endpoints<T>
{
  fn new(low: Option<Extended<T>>, high: Option<Extended<T>>) -> Endpoints<T> {
    let high = if high == low { None } else { high };
    Endpoints { low, high }
  }
}

impl<T> Iterator for Endpoints<T>
{
  type Item = Extended<T>;

  fn next(&mut self) -> Option<Extended<T>> {
    self.low.take().or_else(|| self.high.take())
  }
}

/// Lazily yields, for each domain in turn, its smallest and largest endpoint.
///
/// A domain reduced to one value yields it once and an empty domain yields nothing. Interval sets may yield the infinite sentinels. The sequence is computed on demand, call the function again to restart it.
pub fn iter_domain_endpoints<'a, T, I>(domains: I) -> impl Iterator<Item=Extended<T>> + 'a where
 I: IntoIterator<Item=&'a Domain<T>>,
 I::IntoIter: 'a,
 T: Ord + Hash + Clone + 'a
{
  domains.into_iter().flat_map(Domain::endpoints)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::range::Range;

  fn eq(values: Vec<i32>) -> Domain<i32> {
    Domain::from(EquivalenceSet::new(values))
  }

  fn iv(ranges: Vec<(i32, i32)>) -> Domain<i32> {
    Domain::from(ranges.into_iter()
      .map(|(a, b)| Range::closed(Some(a), Some(b)).unwrap())
      .collect::<IntervalSet<i32>>())
  }

  #[test]
  fn discrete_operations_stay_discrete() {
    let u = &eq(vec![1, 2]) | &eq(vec![2, 3]);
    assert!(matches!(u, Domain::Equivalence(_)));
    assert_eq!(u, eq(vec![1, 2, 3]));
    assert_eq!(&eq(vec![1, 2]) & &eq(vec![2, 3]), eq(vec![2]));
    assert_eq!(&eq(vec![1, 2]) - &eq(vec![2, 3]), eq(vec![1]));
  }

  #[test]
  fn mixed_operations_become_intervals() {
    // Note: the first number is the test id, so it should be easy to identify which test has failed.
    let cases = vec![
      (1, eq(vec![1, 5]), iv(vec![(0, 2)]), iv(vec![(0, 2), (5, 5)]), iv(vec![(1, 1)])),
      (2, iv(vec![(0, 2)]), eq(vec![1, 5]), iv(vec![(0, 2), (5, 5)]), iv(vec![(1, 1)])),
      (3, eq(vec![]), iv(vec![(0, 2)]), iv(vec![(0, 2)]), iv(vec![])),
      (4, eq(vec![2, 3]), iv(vec![(2, 3)]), iv(vec![(2, 3)]), iv(vec![(2, 2), (3, 3)])),
    ];
    for (id, a, b, union, inter) in cases {
      let u = &a | &b;
      assert!(matches!(u, Domain::Interval(_)), "test #{}: mixed union is an interval set", id);
      assert_eq!(u, union, "test #{} of union", id);
      assert_eq!(&a & &b, inter, "test #{} of intersection", id);
    }
  }

  #[test]
  fn mixed_difference() {
    let d = &iv(vec![(0, 10)]) - &eq(vec![5]);
    let expected = Domain::from(IntervalSet::new(vec![
      Range::open_right(Some(0), Some(5)).unwrap(),
      Range::open_left(Some(5), Some(10)).unwrap()]));
    assert_eq!(d, expected);
    assert_eq!(&eq(vec![1, 5, 20]) - &iv(vec![(0, 10)]), eq(vec![20]));
  }

  #[test]
  fn mixed_comparisons() {
    assert_eq!(eq(vec![1, 2]), iv(vec![(1, 1), (2, 2)]));
    assert!(eq(vec![1, 2]) < iv(vec![(0, 5)]));
    assert!(iv(vec![(0, 5)]) > eq(vec![1, 2]));
    assert_eq!(eq(vec![1, 9]).partial_cmp(&iv(vec![(0, 5)])), None);
    assert!(eq(vec![]) <= iv(vec![]));
  }

  #[test]
  fn domain_set_traits() {
    assert_eq!(Union::union(&eq(vec![1]), &iv(vec![(2, 3)])), iv(vec![(1, 1), (2, 3)]));
    assert_eq!(Intersection::intersection(&eq(vec![1, 2]), &eq(vec![2, 5])), eq(vec![2]));
    assert_eq!(Difference::difference(&iv(vec![(0, 4)]), &iv(vec![(0, 4)])), iv(vec![]));
  }

  #[test]
  fn mixed_set_traits() {
    let e = EquivalenceSet::new(vec![1, 4]);
    let s: IntervalSet<i32> = IntervalSet::from(Range::closed(Some(0), Some(2)).unwrap());
    assert_eq!(Union::union(&e, &s).interval_count(), 2);
    assert_eq!(Intersection::intersection(&s, &e), EquivalenceSet::new(vec![1]));
    assert!(!Subset::is_subset(&e, &s));
    assert!(Subset::is_subset(&EquivalenceSet::new(vec![2]), &s));
    assert!(e != s);
    assert!(EquivalenceSet::new(vec![1]) < s);
  }

  #[test]
  fn sample() {
    assert_eq!(iv(vec![(3, 4)]).sample(), Some(&3));
    assert_eq!(eq(vec![7]).sample(), Some(&7));
    assert_eq!(eq(vec![]).sample(), None);
  }

  #[test]
  fn endpoints() {
    let cases = vec![
      (1, eq(vec![]), vec![]),
      (2, eq(vec![4]), vec![Extended::Finite(4)]),
      (3, eq(vec![9, 4, 6]), vec![Extended::Finite(4), Extended::Finite(9)]),
      (4, iv(vec![]), vec![]),
      (5, iv(vec![(2, 2)]), vec![Extended::Finite(2)]),
      (6, iv(vec![(2, 3), (7, 8)]), vec![Extended::Finite(2), Extended::Finite(8)]),
      (7, Domain::from(IntervalSet::from(Range::closed(None, Some(1)).unwrap())),
        vec![Extended::NegInfinity, Extended::Finite(1)]),
    ];
    for (id, d, expected) in cases {
      assert_eq!(d.endpoints().collect::<Vec<_>>(), expected, "test #{} of endpoints", id);
    }
  }

  #[test]
  fn iter_endpoints_is_lazy_and_restartable() {
    let domains = vec![eq(vec![5]), iv(vec![]), iv(vec![(0, 1), (3, 9)])];
    let mut it = iter_domain_endpoints(&domains);
    assert_eq!(it.next(), Some(Extended::Finite(5)));
    assert_eq!(it.next(), Some(Extended::Finite(0)));
    let all: Vec<_> = iter_domain_endpoints(&domains).collect();
    assert_eq!(all, vec![Extended::Finite(5), Extended::Finite(0), Extended::Finite(9)]);
  }

  #[test]
  fn json_round_trip() {
    for d in vec![eq(vec![1, 2, 3]), iv(vec![(0, 1), (4, 6)]), iv(vec![])] {
      let json = serde_json::to_string(&d).unwrap();
      let back: Domain<i32> = serde_json::from_str(&json).unwrap();
      assert_eq!(back, d);
    }
  }
}
