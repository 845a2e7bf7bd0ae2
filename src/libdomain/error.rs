// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised when building bounds and ranges.

use thiserror::Error;

/// Construction failures of [`Bound`](crate::Bound) and [`Range`](crate::Range).
///
/// Every operation on an already built value is total, so these are only
/// returned by constructors (and reported by deserialisation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  /// An included bound was requested at one of the infinite sentinels.
  #[error("an included bound cannot be placed at infinity")]
  InvalidBound,
  /// The lower bound value lies strictly above the upper bound value.
  #[error("the lower bound of a range must not exceed its upper bound")]
  InvalidRange,
}
