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

//! Endpoints of a range.
//!
//! A [`Bound`] is a value of the extended order [`Extended`] (any ordered type plus the two infinite sentinels) tagged as included or excluded. Bounds are totally ordered: first by value, then an included bound comes before an excluded one at the same value. An included bound can never sit at infinity.
//!
//! # Examples
//!
//! ```rust
//! use domain::{Bound, Extended};
//!
//! let a = Bound::included(Extended::Finite(3)).unwrap();
//! let b = Bound::excluded(Extended::Finite(3));
//! assert!(a < b);
//! assert_eq!(!a, b);
//! assert!(Bound::<i32>::included(Extended::PosInfinity).is_err());
//! assert!(Bound::<i32>::safe_included(Extended::PosInfinity).is_excluded());
//! ```

use crate::error::Error;
use num_traits::Bounded as NumBounded;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::Not;

/// A value of `T` extended with the two infinite sentinels.
///
/// Variants are ordered as declared: `NegInfinity < Finite(_) < PosInfinity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Extended<T> {
  NegInfinity,
  Finite(T),
  PosInfinity,
}

impl<T> Extended<T>
{
  pub fn is_finite(&self) -> bool {
    matches!(self, Extended::Finite(_))
  }

  pub fn is_infinite(&self) -> bool {
    !self.is_finite()
  }

  /// The finite value, if any.
  pub fn finite(&self) -> Option<&T> {
    match self {
      Extended::Finite(v) => Some(v),
      _ => None
    }
  }

  pub fn into_finite(self) -> Option<T> {
    match self {
      Extended::Finite(v) => Some(v),
      _ => None
    }
  }
}

impl<T: Ord> Extended<T>
{
  /// Compares `self` with a finite value without wrapping it.
  pub fn cmp_finite(&self, value: &T) -> Ordering {
    match self {
      Extended::NegInfinity => Ordering::Less,
      Extended::Finite(v) => v.cmp(value),
      Extended::PosInfinity => Ordering::Greater
    }
  }
}

impl<T: NumBounded + Clone + PartialEq> Extended<T>
{
  /// Projects the sentinels onto the representable limits of `T`.
  ///
  /// ```rust
  /// use domain::Extended;
  ///
  /// assert_eq!(Extended::<u8>::PosInfinity.saturate(), 255);
  /// assert_eq!(Extended::Finite(7u8).saturate(), 7);
  /// ```
  pub fn saturate(&self) -> T {
    match self {
      Extended::NegInfinity => T::min_value(),
      Extended::Finite(v) => v.clone(),
      Extended::PosInfinity => T::max_value()
    }
  }

  /// Inverse of [`saturate`](Extended::saturate): the limits of `T` are read back as infinities.
  pub fn from_saturated(value: T) -> Extended<T> {
    if value == T::min_value() {
      Extended::NegInfinity
    }
    else if value == T::max_value() {
      Extended::PosInfinity
    }
    else {
      Extended::Finite(value)
    }
  }
}

impl<T> From<T> for Extended<T>
{
  fn from(value: T) -> Extended<T> {
    Extended::Finite(value)
  }
}

impl<T: Display> Display for Extended<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Extended::NegInfinity => write!(formatter, "-inf"),
      Extended::Finite(v) => v.fmt(formatter),
      Extended::PosInfinity => write!(formatter, "+inf")
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundKind {
  Included,
  Excluded,
}

impl Not for BoundKind
{
  type Output = BoundKind;

  fn not(self) -> BoundKind {
    match self {
      BoundKind::Included => BoundKind::Excluded,
      BoundKind::Excluded => BoundKind::Included
    }
  }
}

/// An included or excluded endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bound<T> {
  value: Extended<T>,
  kind: BoundKind,
}

impl<T> Bound<T>
{
  /// Builds a bound, rejecting an included bound at infinity.
  pub fn new(value: Extended<T>, kind: BoundKind) -> Result<Bound<T>, Error> {
    if kind == BoundKind::Included && value.is_infinite() {
      Err(Error::InvalidBound)
    }
    else {
      Ok(Bound { value, kind })
    }
  }

  pub fn included(value: Extended<T>) -> Result<Bound<T>, Error> {
    Bound::new(value, BoundKind::Included)
  }

  pub fn excluded(value: Extended<T>) -> Bound<T> {
    Bound { value, kind: BoundKind::Excluded }
  }

  /// Like [`new`](Bound::new) but an included infinite bound is silently downgraded to excluded.
  pub fn safe(value: Extended<T>, kind: BoundKind) -> Bound<T> {
    let kind =
      if value.is_infinite() { BoundKind::Excluded }
      else { kind };
    Bound { value, kind }
  }

  pub fn safe_included(value: Extended<T>) -> Bound<T> {
    Bound::safe(value, BoundKind::Included)
  }

  pub fn neg_infinity() -> Bound<T> {
    Bound::excluded(Extended::NegInfinity)
  }

  pub fn pos_infinity() -> Bound<T> {
    Bound::excluded(Extended::PosInfinity)
  }

  pub fn value(&self) -> &Extended<T> {
    &self.value
  }

  pub fn into_value(self) -> Extended<T> {
    self.value
  }

  pub fn kind(&self) -> BoundKind {
    self.kind
  }

  pub fn is_included(&self) -> bool {
    self.kind == BoundKind::Included
  }

  pub fn is_excluded(&self) -> bool {
    self.kind == BoundKind::Excluded
  }

  /// `false` only for the two infinite sentinels.
  pub fn is_bounded(&self) -> bool {
    self.is_included() || self.value.is_finite()
  }

  fn tie_code(&self) -> u8 {
    match self.kind {
      BoundKind::Included => 0,
      BoundKind::Excluded => 1
    }
  }
}

impl<T: Ord> Bound<T>
{
  /// Orders two bounds read as upper bounds: at the same value the excluded one is smaller.
  pub fn cmp_as_upper(&self, other: &Bound<T>) -> Ordering {
    self.value.cmp(&other.value)
      .then_with(|| other.tie_code().cmp(&self.tie_code()))
  }

  /// Does `value` lie on the right side of `self` read as a lower bound?
  pub(crate) fn lower_admits(&self, value: &T) -> bool {
    match self.value.cmp_finite(value) {
      Ordering::Less => true,
      Ordering::Equal => self.is_included(),
      Ordering::Greater => false
    }
  }

  /// Does `value` lie on the left side of `self` read as an upper bound?
  pub(crate) fn upper_admits(&self, value: &T) -> bool {
    match self.value.cmp_finite(value) {
      Ordering::Less => false,
      Ordering::Equal => self.is_included(),
      Ordering::Greater => true
    }
  }
}

impl<T> Not for Bound<T>
{
  type Output = Bound<T>;

  /// Flips the bound kind at the same value; the infinite sentinels are their own inverse.
  fn not(self) -> Bound<T> {
    if self.value.is_infinite() {
      self
    }
    else {
      Bound { value: self.value, kind: !self.kind }
    }
  }
}

impl<T: Ord> PartialOrd for Bound<T>
{
  fn partial_cmp(&self, other: &Bound<T>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: Ord> Ord for Bound<T>
{
  fn cmp(&self, other: &Bound<T>) -> Ordering {
    self.value.cmp(&other.value)
      .then_with(|| self.tie_code().cmp(&other.tie_code()))
  }
}

#[derive(Deserialize)]
#[serde(rename = "Bound")]
struct BoundRepr<T> {
  value: Extended<T>,
  kind: BoundKind,
}

impl<'de, T> Deserialize<'de> for Bound<T> where
 T: Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<Bound<T>, D::Error> where
   D: Deserializer<'de>
  {
    let BoundRepr { value, kind } = BoundRepr::deserialize(deserializer)?;
    Bound::new(value, kind).map_err(D::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};

  fn inc(v: i32) -> Bound<i32> {
    Bound::included(Extended::Finite(v)).unwrap()
  }

  fn exc(v: i32) -> Bound<i32> {
    Bound::excluded(Extended::Finite(v))
  }

  #[test]
  fn extended_order() {
    let values = vec![
      Extended::NegInfinity,
      Extended::Finite(i32::min_value()),
      Extended::Finite(0),
      Extended::Finite(i32::max_value()),
      Extended::PosInfinity
    ];
    for w in values.windows(2) {
      assert!(w[0] < w[1], "{:?} should be smaller than {:?}", w[0], w[1]);
    }
  }

  #[test]
  fn bound_order() {
    let ordered = vec![
      Bound::neg_infinity(),
      inc(-1),
      exc(-1),
      inc(0),
      exc(0),
      inc(5),
      Bound::pos_infinity()
    ];
    for w in ordered.windows(2) {
      assert!(w[0] < w[1], "{:?} should be smaller than {:?}", w[0], w[1]);
    }
    assert_eq!(inc(3).cmp(&inc(3)), Ordering::Equal);
  }

  #[test]
  fn upper_order_prefers_excluded() {
    assert_eq!(exc(3).cmp_as_upper(&inc(3)), Ordering::Less);
    assert_eq!(inc(3).cmp_as_upper(&exc(3)), Ordering::Greater);
    assert_eq!(inc(2).cmp_as_upper(&exc(3)), Ordering::Less);
    assert_eq!(exc(3).cmp_as_upper(&exc(3)), Ordering::Equal);
  }

  #[test]
  fn included_rejects_infinity() {
    assert_eq!(Bound::<i32>::included(Extended::PosInfinity), Err(Error::InvalidBound));
    assert_eq!(Bound::<i32>::included(Extended::NegInfinity), Err(Error::InvalidBound));
    assert_eq!(Bound::<i32>::safe_included(Extended::NegInfinity), Bound::neg_infinity());
    assert_eq!(Bound::safe_included(Extended::Finite(4)), inc(4));
  }

  #[test]
  fn truthiness() {
    assert!(inc(0).is_bounded());
    assert!(exc(0).is_bounded());
    assert!(!Bound::<i32>::neg_infinity().is_bounded());
    assert!(!Bound::<i32>::pos_infinity().is_bounded());
  }

  #[test]
  fn inversion() {
    assert_eq!(!inc(2), exc(2));
    assert_eq!(!exc(2), inc(2));
    assert_eq!(!!inc(2), inc(2));
    assert_eq!(!Bound::<i32>::pos_infinity(), Bound::pos_infinity());
    assert_eq!(!Bound::<i32>::neg_infinity(), Bound::neg_infinity());
  }

  #[test]
  fn admits() {
    assert!(inc(2).lower_admits(&2));
    assert!(!exc(2).lower_admits(&2));
    assert!(exc(2).lower_admits(&3));
    assert!(!inc(2).lower_admits(&1));
    assert!(Bound::neg_infinity().lower_admits(&i32::min_value()));
    assert!(inc(2).upper_admits(&2));
    assert!(!exc(2).upper_admits(&2));
    assert!(Bound::pos_infinity().upper_admits(&i32::max_value()));
  }

  #[test]
  fn saturation() {
    assert_eq!(Extended::<i8>::NegInfinity.saturate(), -128);
    assert_eq!(Extended::<i8>::PosInfinity.saturate(), 127);
    assert_eq!(Extended::from_saturated(-128i8), Extended::NegInfinity);
    assert_eq!(Extended::from_saturated(127i8), Extended::PosInfinity);
    assert_eq!(Extended::from_saturated(3i8), Extended::Finite(3));
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", Extended::Finite(3)), "3");
    assert_eq!(format!("{}", Extended::<i32>::NegInfinity), "-inf");
    assert_eq!(format!("{}", Extended::<i32>::PosInfinity), "+inf");
  }

  #[test]
  fn test_ser_de_bound() {
    assert_tokens(&inc(1), &[
      Token::Struct { name: "Bound", len: 2 },
      Token::Str("value"),
      Token::NewtypeVariant { name: "Extended", variant: "Finite" },
      Token::I32(1),
      Token::Str("kind"),
      Token::UnitVariant { name: "BoundKind", variant: "Included" },
      Token::StructEnd,
    ]);
    assert_tokens(&Bound::<i32>::pos_infinity(), &[
      Token::Struct { name: "Bound", len: 2 },
      Token::Str("value"),
      Token::UnitVariant { name: "Extended", variant: "PosInfinity" },
      Token::Str("kind"),
      Token::UnitVariant { name: "BoundKind", variant: "Excluded" },
      Token::StructEnd,
    ]);
  }

  #[test]
  fn test_de_rejects_included_infinity() {
    assert_de_tokens_error::<Bound<i32>>(&[
      Token::Struct { name: "Bound", len: 2 },
      Token::Str("value"),
      Token::UnitVariant { name: "Extended", variant: "NegInfinity" },
      Token::Str("kind"),
      Token::UnitVariant { name: "BoundKind", variant: "Included" },
      Token::StructEnd,
    ], "an included bound cannot be placed at infinity");
  }
}
