// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use domain::{iter_domain_endpoints, Bound, BoundKind, Cell, Domain, EquivalenceSet, Error, Extended, IntervalSet, IntervalTree, Range, Sample};
use gcollections::ops::{Complement, Contains, Difference, Intersection, Subset, Union};
use std::collections::HashSet;

fn closed(a: i32, b: i32) -> Range<i32> { Range::closed(Some(a), Some(b)).unwrap() }
fn open(a: i32, b: i32) -> Range<i32> { Range::open(Some(a), Some(b)).unwrap() }
fn open_right(a: i32, b: i32) -> Range<i32> { Range::open_right(Some(a), Some(b)).unwrap() }

#[test]
fn degenerate_ranges() {
  let point = closed(0, 0);
  assert!(!point.is_empty());
  assert!(point.contains(&0));
  assert!(!point.contains(&1));
  assert!(!point.contains(&-1));

  assert!(open_right(0, 0).is_empty());
  assert!(open(0, 0).is_empty());
  assert_eq!(open_right(0, 0), open(0, 0));
  assert_eq!(open(0, 0), open_right(5, 5));
  assert_eq!(open_right(5, 5), Range::empty());
}

#[test]
fn range_intersection() {
  assert_eq!(closed(0, 10) & closed(5, 15), closed(5, 10));
}

#[test]
fn join_touching_and_gapped() {
  assert_eq!(Range::join(vec![open_right(0, 5), open_right(5, 10)]), vec![open_right(0, 10)]);
  assert_eq!(Range::join(vec![open_right(0, 5), open_right(6, 10)]),
    vec![open_right(0, 5), open_right(6, 10)]);
}

#[test]
fn stabbing_query() {
  let tree = IntervalTree::from_cells(vec![
    Cell::new(0, 10, "a"),
    Cell::new(5, 15, "b"),
    Cell::new(20, 30, "c")]);
  let stab = |point: i32| -> HashSet<&str> {
    tree.get(&point).into_iter().map(|cell| *cell.data()).collect()
  };
  assert_eq!(stab(7), ["a", "b"].into_iter().collect());
  assert_eq!(stab(25), ["c"].into_iter().collect());
  assert!(stab(17).is_empty());
}

#[test]
fn bound_constructors() {
  assert_eq!(Bound::<i32>::included(Extended::PosInfinity), Err(Error::InvalidBound));
  let safe = Bound::<i32>::safe(Extended::NegInfinity, BoundKind::Included);
  assert!(safe.is_excluded());
  assert!(!safe.is_bounded());
  assert_eq!(!safe, safe);
  let inc = Bound::included(Extended::Finite(3)).unwrap();
  assert!(inc < !inc);
  assert_eq!(Range::new(inc, Bound::excluded(Extended::Finite(2))), Err(Error::InvalidRange));
}

#[test]
fn set_algebra_through_traits() {
  let a = IntervalSet::new(vec![closed(0, 4), closed(8, 10)]);
  let b = IntervalSet::from(closed(3, 9));
  assert_eq!(Union::union(&a, &b), IntervalSet::from(closed(0, 10)));
  assert_eq!(Intersection::intersection(&a, &b), IntervalSet::new(vec![closed(3, 4), closed(8, 9)]));
  assert_eq!(Difference::difference(&a, &b), IntervalSet::new(vec![open_right(0, 3), Range::open_left(Some(9), Some(10)).unwrap()]));
  assert!(Contains::contains(&a, &9));
  assert!(!Subset::is_subset(&a, &b));
  assert_eq!(a.complement().complement(), a);
  assert_eq!(a.span(), closed(0, 10));
}

#[test]
fn equivalence_and_domains() {
  let colours: EquivalenceSet<i32> = vec![1, 2, 3].into_iter().collect();
  let first = colours.sample().cloned();
  assert!(first.is_some());
  assert_eq!(colours.sample().cloned(), first);

  let mixed = Domain::from(colours) & Domain::from(IntervalSet::from(open(1, 5)));
  assert_eq!(mixed, Domain::from(IntervalSet::new(vec![closed(2, 2), closed(3, 3)])));
  assert_eq!(mixed, Domain::from(EquivalenceSet::new(vec![2, 3])));

  let endpoints: Vec<_> = iter_domain_endpoints(&[mixed]).collect();
  assert_eq!(endpoints, vec![Extended::Finite(2), Extended::Finite(3)]);
}

#[test]
fn persistence() {
  let set = IntervalSet::new(vec![closed(0, 1), open(4, 6)]);
  let json = serde_json::to_string(&set).unwrap();
  assert_eq!(serde_json::from_str::<IntervalSet<i32>>(&json).unwrap(), set);

  let empty = serde_json::to_string(&open(3, 3)).unwrap();
  assert_eq!(empty, "null");
  assert_eq!(serde_json::from_str::<Range<i32>>(&empty).unwrap(), Range::empty());

  let inverted = r#"[{"value":{"Finite":5},"kind":"Included"},{"value":{"Finite":1},"kind":"Included"}]"#;
  assert!(serde_json::from_str::<Range<i32>>(inverted).is_err());
}
