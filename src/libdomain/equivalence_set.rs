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

//! Finite domain of discrete values compared by equality only.
//!
//! An [`EquivalenceSet`] is the domain of types that have no meaningful order (labels, identifiers, colours...). When the element type happens to be ordered, the set converts to an [`IntervalSet`] of singleton ranges, which is how it takes part in operations with interval sets (see [`Domain`](crate::Domain)).
//!
//! # Examples
//!
//! ```rust
//! use domain::{EquivalenceSet, Sample};
//!
//! let colours: EquivalenceSet<&str> = vec!["red", "green", "blue"].into_iter().collect();
//! let warm: EquivalenceSet<&str> = vec!["red", "orange"].into_iter().collect();
//! assert_eq!((&colours & &warm).len(), 1);
//! assert!(colours.contains(&"green"));
//!
//! // The sample is picked once, then always the same.
//! let first = colours.sample();
//! assert!(first.is_some());
//! assert_eq!(colours.sample(), first);
//! ```

use crate::interval_set::IntervalSet;
use crate::ops::{inclusion_order, Sample};
use crate::range::Range;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::hash_set::{self, HashSet};
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Sub};
use std::sync::OnceLock;

#[derive(Clone)]
pub struct EquivalenceSet<T> {
  values: HashSet<T>,
  // First read of `sample`, computed at most once.
  sample: OnceLock<Option<T>>,
}

impl<T: Eq + Hash> EquivalenceSet<T>
{
  pub fn new<I>(values: I) -> EquivalenceSet<T> where
   I: IntoIterator<Item=T>
  {
    EquivalenceSet::from(values.into_iter().collect::<HashSet<T>>())
  }

  pub fn empty() -> EquivalenceSet<T> {
    EquivalenceSet::from(HashSet::new())
  }

  pub fn values(&self) -> &HashSet<T> {
    &self.values
  }

  pub fn into_values(self) -> HashSet<T> {
    self.values
  }

  pub fn iter(&self) -> hash_set::Iter<T> {
    self.values.iter()
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn contains(&self, value: &T) -> bool {
    self.values.contains(value)
  }

  pub fn is_subset(&self, other: &EquivalenceSet<T>) -> bool {
    self.values.is_subset(&other.values)
  }

  pub fn is_proper_subset(&self, other: &EquivalenceSet<T>) -> bool {
    self.len() < other.len() && self.is_subset(other)
  }

  pub fn is_disjoint(&self, other: &EquivalenceSet<T>) -> bool {
    self.values.is_disjoint(&other.values)
  }
}

impl<T: Eq + Hash + Clone> EquivalenceSet<T>
{
  pub fn union(&self, other: &EquivalenceSet<T>) -> EquivalenceSet<T> {
    EquivalenceSet::new(self.values.union(&other.values).cloned())
  }

  pub fn intersection(&self, other: &EquivalenceSet<T>) -> EquivalenceSet<T> {
    EquivalenceSet::new(self.values.intersection(&other.values).cloned())
  }

  pub fn difference(&self, other: &EquivalenceSet<T>) -> EquivalenceSet<T> {
    EquivalenceSet::new(self.values.difference(&other.values).cloned())
  }
}

impl<T: Ord + Hash + Clone> EquivalenceSet<T>
{
  /// Every value `v` becomes the singleton range `[v, v]`.
  pub fn to_interval_set(&self) -> IntervalSet<T> {
    IntervalSet::new(self.values.iter().cloned().map(Range::singleton))
  }
}

impl<T: Eq + Hash + Clone> Sample for EquivalenceSet<T>
{
  type Item = T;

  /// An arbitrary member, memoized on first access.
  fn sample(&self) -> Option<&T> {
    self.sample
      .get_or_init(|| self.values.iter().next().cloned())
      .as_ref()
  }
}

impl<T> From<HashSet<T>> for EquivalenceSet<T>
{
  fn from(values: HashSet<T>) -> EquivalenceSet<T> {
    EquivalenceSet {
      values,
      sample: OnceLock::new()
    }
  }
}

impl<T: Eq + Hash> FromIterator<T> for EquivalenceSet<T>
{
  fn from_iter<I>(iterable: I) -> EquivalenceSet<T> where
   I: IntoIterator<Item=T>
  {
    EquivalenceSet::new(iterable)
  }
}

impl<'a, T> IntoIterator for &'a EquivalenceSet<T>
{
  type Item = &'a T;
  type IntoIter = hash_set::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.values.iter()
  }
}

impl<T: Eq + Hash> PartialEq for EquivalenceSet<T>
{
  fn eq(&self, other: &EquivalenceSet<T>) -> bool {
    self.values == other.values
  }
}

impl<T: Eq + Hash> Eq for EquivalenceSet<T> {}

impl<T: Eq + Hash> PartialOrd for EquivalenceSet<T>
{
  fn partial_cmp(&self, other: &EquivalenceSet<T>) -> Option<Ordering> {
    inclusion_order(self.is_subset(other), other.is_subset(self))
  }
}

impl<T: fmt::Debug> fmt::Debug for EquivalenceSet<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.debug_set().entries(self.values.iter()).finish()
  }
}

forward_all_binop!(impl[Eq + Hash + Clone] BitOr, bitor for EquivalenceSet => union);
forward_all_binop!(impl[Eq + Hash + Clone] BitAnd, bitand for EquivalenceSet => intersection);
forward_all_binop!(impl[Eq + Hash + Clone] Sub, sub for EquivalenceSet => difference);

set_op_impl!(impl[Eq + Hash + Clone]
  Union, union for EquivalenceSet;
  Intersection, intersection for EquivalenceSet;
  Difference, difference for EquivalenceSet);

impl<T> Collection for EquivalenceSet<T>
{
  type Item = T;
}

impl<T: Eq + Hash> Contains for EquivalenceSet<T>
{
  fn contains(&self, value: &T) -> bool {
    EquivalenceSet::contains(self, value)
  }
}

impl<T: Eq + Hash> Subset for EquivalenceSet<T>
{
  fn is_subset(&self, other: &EquivalenceSet<T>) -> bool {
    EquivalenceSet::is_subset(self, other)
  }
}

impl<T: Eq + Hash> ProperSubset for EquivalenceSet<T>
{
  fn is_proper_subset(&self, other: &EquivalenceSet<T>) -> bool {
    EquivalenceSet::is_proper_subset(self, other)
  }
}

impl<T: Eq + Hash> Disjoint for EquivalenceSet<T>
{
  fn is_disjoint(&self, other: &EquivalenceSet<T>) -> bool {
    EquivalenceSet::is_disjoint(self, other)
  }
}

impl<T: Eq + Hash> Empty for EquivalenceSet<T>
{
  fn empty() -> EquivalenceSet<T> {
    EquivalenceSet::empty()
  }
}

impl<T: Eq + Hash> Cardinality for EquivalenceSet<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.len()
  }
}

impl<T: Serialize> Serialize for EquivalenceSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(self.values.iter())
  }
}

impl<'de, T> Deserialize<'de> for EquivalenceSet<T> where
 T: Deserialize<'de> + Eq + Hash
{
  fn deserialize<D>(deserializer: D) -> Result<EquivalenceSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    HashSet::<T>::deserialize(deserializer).map(EquivalenceSet::from)
  }
}
