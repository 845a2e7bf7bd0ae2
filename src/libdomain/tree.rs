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

//! Centered interval tree answering point-stabbing queries.
//!
//! The tree indexes a fixed batch of [cells](Cell), half-open intervals `[lower, upper)` carrying a payload. It is built once and never modified: rebuilding is the only way to change its content.
//!
//! Every node picks a `center` key, the lower bound of the median cell of its slice. Cells ending at or before the center go to the left subtree, cells starting after it go to the right subtree and the others span the center and stay at the node. A query at a point `p` only visits one path from the root, and at each node stops scanning at the first spanning cell that does not contain `p`, hence a complexity of `O(log n + k)` for `k` results.
//!
//! # Examples
//!
//! ```rust
//! use domain::{Cell, IntervalTree};
//!
//! let tree: IntervalTree<&str, i32> = vec![
//!   Cell::new(0, 10, "a"),
//!   Cell::new(5, 15, "b"),
//!   Cell::new(20, 30, "c")].into_iter().collect();
//!
//! let mut found: Vec<_> = tree.get(&7).into_iter().map(|c| *c.data()).collect();
//! found.sort();
//! assert_eq!(found, vec!["a", "b"]);
//! assert!(tree.get(&17).is_empty());
//! ```

use crate::bound::Extended;
use crate::range::Range;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// A half-open interval `[lower, upper)` with a payload.
///
/// A cell with `lower >= upper` is empty: it can be built but never matches a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell<T, K> {
  lower: K,
  upper: K,
  data: T,
}

impl<T, K> Cell<T, K>
{
  pub fn new(lower: K, upper: K, data: T) -> Cell<T, K> {
    Cell { lower, upper, data }
  }

  pub fn lower(&self) -> &K {
    &self.lower
  }

  pub fn upper(&self) -> &K {
    &self.upper
  }

  pub fn data(&self) -> &T {
    &self.data
  }

  pub fn into_data(self) -> T {
    self.data
  }
}

impl<T, K: Ord> Cell<T, K>
{
  pub fn is_empty(&self) -> bool {
    self.lower >= self.upper
  }

  pub fn contains(&self, point: &K) -> bool {
    self.lower <= *point && *point < self.upper
  }
}

impl<T, K: Clone> Cell<T, Extended<K>>
{
  /// Casts `range` to the half-open cell spanning the same two bound values, the inclusion of the bounds is forgotten.
  pub fn from_range(range: &Range<K>, data: T) -> Cell<T, Extended<K>> {
    Cell::new(range.lower().value().clone(), range.upper().value().clone(), data)
  }
}

#[derive(Debug, Clone)]
struct Node<T, K> {
  center: K,
  // Cells spanning `center`, ascending by lower bound.
  cells: Vec<Cell<T, K>>,
  // Indices into `cells`, descending by upper bound.
  by_upper: Vec<usize>,
  left: Option<Box<Node<T, K>>>,
  right: Option<Box<Node<T, K>>>,
}

impl<T, K: Ord + Clone> Node<T, K>
{
  // `cells` must be non-empty cells sorted by lower bound.
  fn build(cells: Vec<Cell<T, K>>) -> Option<Box<Node<T, K>>> {
    if cells.is_empty() {
      return None;
    }
    let center = cells[cells.len() / 2].lower.clone();
    let mut left = vec![];
    let mut right = vec![];
    let mut spanning = vec![];
    for cell in cells {
      if cell.upper <= center {
        left.push(cell);
      }
      else if cell.lower > center {
        right.push(cell);
      }
      else {
        spanning.push(cell);
      }
    }
    trace!(left = left.len(), spanning = spanning.len(), right = right.len(), "partitioned interval tree node");
    let mut by_upper: Vec<usize> = (0..spanning.len()).collect();
    by_upper.sort_by(|&a, &b| spanning[b].upper.cmp(&spanning[a].upper));
    Some(Box::new(Node {
      center,
      cells: spanning,
      by_upper,
      left: Node::build(left),
      right: Node::build(right)
    }))
  }
}

impl<T, K: Ord> Node<T, K>
{
  // Pushes the cells of this node containing `point` and returns the child to search next.
  fn stab<'a>(&'a self, point: &K, found: &mut Vec<&'a Cell<T, K>>) -> Option<&'a Node<T, K>> {
    match point.cmp(&self.center) {
      Ordering::Greater => {
        found.extend(self.by_upper.iter()
          .map(|&i| &self.cells[i])
          .take_while(|cell| *point < cell.upper));
        self.right.as_deref()
      }
      ordering => {
        found.extend(self.cells.iter().take_while(|cell| cell.lower <= *point));
        if ordering == Ordering::Less { self.left.as_deref() } else { None }
      }
    }
  }
}

impl<T, K> Node<T, K>
{
  fn depth(node: Option<&Node<T, K>>) -> usize {
    match node {
      None => 0,
      Some(node) => 1 + Node::depth(node.left.as_deref()).max(Node::depth(node.right.as_deref()))
    }
  }
}

/// Immutable stabbing index over a batch of cells.
#[derive(Debug, Clone)]
pub struct IntervalTree<T, K> {
  root: Option<Box<Node<T, K>>>,
  len: usize,
}

impl<T, K: Ord + Clone> IntervalTree<T, K>
{
  /// Builds the tree, empty cells are discarded.
  pub fn from_cells<I>(cells: I) -> IntervalTree<T, K> where
   I: IntoIterator<Item=Cell<T, K>>
  {
    let mut cells: Vec<_> = cells.into_iter().collect();
    let received = cells.len();
    cells.retain(|cell| !cell.is_empty());
    cells.sort_by(|a, b| a.lower.cmp(&b.lower));
    let len = cells.len();
    let tree = IntervalTree { root: Node::build(cells), len };
    debug!(cells = len, discarded = received - len, depth = tree.depth(), "built interval tree");
    tree
  }
}

impl<T, K: Ord + Clone> IntervalTree<T, Extended<K>>
{
  /// Builds the tree from `(range, data)` pairs, each range being cast with [`Cell::from_range`].
  pub fn from_ranges<I>(pairs: I) -> IntervalTree<T, Extended<K>> where
   I: IntoIterator<Item=(Range<K>, T)>
  {
    IntervalTree::from_cells(pairs.into_iter()
      .map(|(range, data)| Cell::from_range(&range, data)))
  }
}

impl<T, K: Ord> IntervalTree<T, K>
{
  /// Cells containing `point`: first those of the root, then those of the visited descendants. The order inside one node is unspecified and an empty vector means that no cell matches.
  pub fn get(&self, point: &K) -> Vec<&Cell<T, K>> {
    let mut found = vec![];
    let mut node = self.root.as_deref();
    while let Some(current) = node {
      node = current.stab(point, &mut found);
    }
    found
  }
}

impl<T, K> IntervalTree<T, K>
{
  pub fn empty() -> IntervalTree<T, K> {
    IntervalTree { root: None, len: 0 }
  }

  /// Number of non-empty cells indexed.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn center(&self) -> Option<&K> {
    self.root.as_ref().map(|root| &root.center)
  }

  pub fn depth(&self) -> usize {
    Node::depth(self.root.as_deref())
  }
}

impl<T, K: Ord + Clone> FromIterator<Cell<T, K>> for IntervalTree<T, K>
{
  fn from_iter<I>(cells: I) -> IntervalTree<T, K> where
   I: IntoIterator<Item=Cell<T, K>>
  {
    IntervalTree::from_cells(cells)
  }
}
