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

//! This library proposes an algebra of domains over any totally ordered type. A [range](range/index.html) is one contiguous interval whose bounds are included, excluded or infinite; an [interval set](interval_set/index.html) is an arbitrary subset of the order kept as a minimal sequence of disjoint ranges; an [equivalence set](equivalence_set/index.html) is a finite set of discrete values. The [domain module](domain/index.html) mixes the two set representations and the [tree module](tree/index.html) provides a stabbing index over data-carrying intervals.
//!
//! Set operations are exposed as inherent methods, as operators (`|`, `&`, `-`) and through the traits of `gcollections::ops`. Sets are compared by inclusion with `<=`, `<`, `>=` and `>`.
//!
//! # Examples
//!
//! ```rust
//! use domain::{IntervalSet, Range, Sample};
//!
//! let weekdays = IntervalSet::from(Range::closed(Some(1), Some(5)).unwrap());
//! let busy = IntervalSet::new(vec![
//!   Range::closed(Some(2), Some(3)).unwrap(),
//!   Range::open(Some(3), Some(4)).unwrap()]);
//! let free = &weekdays - &busy;
//! assert_eq!(free.to_string(), "{[1, 2), [4, 5]}");
//! assert_eq!(free.sample(), Some(&1));
//! ```
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//! * [Centered interval tree](https://en.wikipedia.org/wiki/Interval_tree#Centered_interval_tree)

#![forbid(unsafe_code)]

mod macros;

pub mod bound;
pub mod error;
pub mod ops;
pub mod range;
pub mod interval_set;
pub mod equivalence_set;
pub mod domain;
pub mod tree;

pub use crate::bound::{Bound, BoundKind, Extended};
pub use crate::error::Error;
pub use crate::ops::{Hull, Sample, Whole};
pub use crate::range::{Kind, Range};
pub use crate::interval_set::IntervalSet;
pub use crate::equivalence_set::EquivalenceSet;
pub use crate::domain::{iter_domain_endpoints, Domain, Endpoints};
pub use crate::tree::{Cell, IntervalTree};
