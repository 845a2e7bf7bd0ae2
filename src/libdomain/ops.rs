// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Domain specific operations, complementing the set operations of `gcollections::ops`.

use std::cmp::Ordering;

/// Smallest value of `Output` containing both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The value covering the whole order, from `-inf` to `+inf`.
pub trait Whole
{
  fn whole() -> Self;
}

/// A representative member of a domain.
///
/// `None` means that no member can be derived generically, which is not an error (an open range `(0, 1)` over a dense type is not empty, yet has no bound to offer).
pub trait Sample
{
  type Item;
  fn sample(&self) -> Option<&Self::Item>;
}

/// Maps the two inclusion tests `a <= b` and `b <= a` onto the ordering of `a` and `b` in the subset order.
pub(crate) fn inclusion_order(a_in_b: bool, b_in_a: bool) -> Option<Ordering> {
  match (a_in_b, b_in_a) {
    (true, true) => Some(Ordering::Equal),
    (true, false) => Some(Ordering::Less),
    (false, true) => Some(Ordering::Greater),
    (false, false) => None
  }
}
