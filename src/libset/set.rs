// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hash set with an explicit uninitialized representation.
//!
//! A `Set` either owns no table at all (the *uninitialized* form, built by `Set::new()`, `Set::default()` or an empty `Set::make`) or owns a `HashSet`, possibly empty (the *allocated* form). Both empty forms have the same membership and compare equal, they are only told apart by `is_allocated()`. Each operation normalizes its empty result in a fixed way:
//!
//! * `add` always leaves the receiver allocated, `remove` never allocates.
//! * `make`, `minus`, `copy`, `union`, `intersect` and `symmetric_difference` return the uninitialized form when the result has no element.
//! * `clone` keeps the representation of its source.
//!
//! Iteration order is unspecified. A `Set` is not internally synchronized, mutating it from several threads requires an external lock.
//!
//! # Examples
//!
//! ```rust
//! use set::Set;
//!
//! let mut a = Set::make(vec!["a"]);
//! a.add(vec!["b"]);
//! assert_eq!(a.len(), 2);
//! assert!(a.is_equal(&Set::make(vec!["a", "b"])));
//!
//! let b = a.minus(&Set::make(vec!["a"]));
//! assert_eq!(b.elements(), vec!["b"]);
//! assert_eq!(a.len(), 2);
//!
//! let none: Set<&str> = Set::make(vec![]);
//! assert!(!none.is_allocated());
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, Flatten};
use std::option;

pub type Iter<'a, E, S> = Flatten<option::Iter<'a, HashSet<E, S>>>;
pub type IntoIter<E, S> = Flatten<option::IntoIter<HashSet<E, S>>>;

#[derive(Clone)]
pub struct Set<E, S = RandomState>
{
  table: Option<HashSet<E, S>>
}

impl<E> Set<E, RandomState>
{
  /// Uninitialized set, nothing is allocated.
  pub fn new() -> Set<E, RandomState> {
    Set::default()
  }

  /// Allocated empty set with room for at least `capacity` elements.
  pub fn with_capacity(capacity: usize) -> Set<E, RandomState> {
    Set::with_capacity_and_hasher(capacity, RandomState::new())
  }
}

impl<E> Set<E, RandomState> where
  E: Eq + Hash
{
  /// Builds a set from the given elements, duplicates collapse. The result is uninitialized if `elements` is empty.
  pub fn make<I>(elements: I) -> Set<E, RandomState> where
    I: IntoIterator<Item=E>
  {
    FromIterator::from_iter(elements)
  }
}

impl<E, S> Set<E, S>
{
  pub fn with_hasher(hasher: S) -> Set<E, S> {
    Set::wrap(HashSet::with_hasher(hasher))
  }

  pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Set<E, S> {
    Set::wrap(HashSet::with_capacity_and_hasher(capacity, hasher))
  }

  /// Takes ownership of `table`, the result is allocated even if `table` is empty.
  pub fn wrap(table: HashSet<E, S>) -> Set<E, S> {
    Set { table: Some(table) }
  }

  /// `false` only for the uninitialized representation.
  pub fn is_allocated(&self) -> bool {
    self.table.is_some()
  }

  pub fn len(&self) -> usize {
    self.table.as_ref().map_or(0, HashSet::len)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn iter(&self) -> Iter<'_, E, S> {
    self.table.iter().flatten()
  }

  /// Removes every element but keeps the representation: an allocated set stays allocated.
  pub fn clear(&mut self) {
    if let Some(table) = self.table.as_mut() {
      table.clear();
    }
  }
}

impl<E, S> Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher
{
  pub fn has<Q: ?Sized>(&self, value: &Q) -> bool where
    E: Borrow<Q>,
    Q: Eq + Hash
  {
    self.table.as_ref().map_or(false, |table| table.contains(value))
  }

  /// Removes the given elements, absent ones are ignored. An uninitialized set is left untouched.
  pub fn remove<I>(&mut self, elements: I) -> &mut Set<E, S> where
    I: IntoIterator<Item=E>
  {
    if let Some(table) = self.table.as_mut() {
      for e in elements {
        table.remove(&e);
      }
    }
    self
  }

  pub fn is_subset_of(&self, other: &Set<E, S>) -> bool {
    if self.len() > other.len() {
      false
    }
    else {
      self.iter().all(|e| other.has(e))
    }
  }

  pub fn is_proper_subset_of(&self, other: &Set<E, S>) -> bool {
    self.len() < other.len() && self.is_subset_of(other)
  }

  /// Same membership, regardless of the representation of empty sets.
  pub fn is_equal(&self, other: &Set<E, S>) -> bool {
    self.len() == other.len() && self.is_subset_of(other)
  }

  pub fn is_disjoint(&self, other: &Set<E, S>) -> bool {
    let (small, large) =
      if self.len() <= other.len() { (self, other) }
      else { (other, self) };
    small.iter().all(|e| !large.has(e))
  }
}

impl<E, S> Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher + Default
{
  /// Inserts the given elements. The receiver is allocated afterwards, even if `elements` is empty.
  pub fn add<I>(&mut self, elements: I) -> &mut Set<E, S> where
    I: IntoIterator<Item=E>
  {
    self.table.get_or_insert_with(HashSet::default).extend(elements);
    self
  }

  /// Union reusing the storage of its operands.
  ///
  /// If `self` is not empty, the elements of `other` are moved into it. Otherwise `other` itself is returned when it is not empty, and the uninitialized set when both are.
  pub fn into_union(mut self, other: Set<E, S>) -> Set<E, S> {
    if !self.is_empty() {
      self.add(other);
      self
    }
    else if !other.is_empty() {
      other
    }
    else {
      Set::default()
    }
  }

  pub fn into_hash_set(self) -> HashSet<E, S> {
    self.table.unwrap_or_default()
  }
}

impl<E, S> Set<E, S> where
  E: Eq + Hash + Clone,
  S: BuildHasher + Default
{
  /// Elements of `self` that are not in `other`. `s.minus(&Set::new())` copies `s`.
  pub fn minus(&self, other: &Set<E, S>) -> Set<E, S> {
    self.iter()
      .filter(|e| !other.has(*e))
      .cloned()
      .collect()
  }

  /// Members in unspecified order. Nothing is allocated for an empty set.
  pub fn elements(&self) -> Vec<E> {
    if self.is_empty() {
      return Vec::new();
    }
    let mut rv = Vec::with_capacity(self.len());
    rv.extend(self.iter().cloned());
    rv
  }

  /// Independent set with the same members. Unlike `clone`, an empty set of either representation is copied to the uninitialized one.
  pub fn copy(&self) -> Set<E, S> {
    self.iter().cloned().collect()
  }

  pub fn union(&self, other: &Set<E, S>) -> Set<E, S> {
    if self.is_empty() {
      other.copy()
    }
    else {
      let mut rv = self.copy();
      rv.add(other.iter().cloned());
      rv
    }
  }

  /// Elements in both sets. Uninitialized if either operand is uninitialized, even when the other is allocated.
  pub fn intersect(&self, other: &Set<E, S>) -> Set<E, S> {
    match (&self.table, &other.table) {
      (Some(lhs), Some(_)) =>
        lhs.iter()
          .filter(|e| other.has(*e))
          .cloned()
          .collect(),
      _ => Set::default()
    }
  }

  pub fn symmetric_difference(&self, other: &Set<E, S>) -> Set<E, S> {
    self.iter()
      .filter(|e| !other.has(*e))
      .chain(other.iter().filter(|e| !self.has(*e)))
      .cloned()
      .collect()
  }
}

impl<E, S> Default for Set<E, S>
{
  fn default() -> Set<E, S> {
    Set { table: None }
  }
}

impl<E, S> FromIterator<E> for Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher + Default
{
  fn from_iter<I>(iterable: I) -> Set<E, S> where
    I: IntoIterator<Item=E>
  {
    let mut elements = iterable.into_iter().peekable();
    if elements.peek().is_none() {
      Set::default()
    }
    else {
      let rv = Set::wrap(elements.collect());
      debug_assert!(!rv.is_empty());
      rv
    }
  }
}

impl<E, S> Extend<E> for Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher + Default
{
  fn extend<I>(&mut self, iterable: I) where
    I: IntoIterator<Item=E>
  {
    self.add(iterable);
  }
}

impl<E, S> IntoIterator for Set<E, S>
{
  type Item = E;
  type IntoIter = IntoIter<E, S>;

  fn into_iter(self) -> IntoIter<E, S> {
    self.table.into_iter().flatten()
  }
}

impl<'a, E, S> IntoIterator for &'a Set<E, S>
{
  type Item = &'a E;
  type IntoIter = Iter<'a, E, S>;

  fn into_iter(self) -> Iter<'a, E, S> {
    self.iter()
  }
}

impl<E, S> From<HashSet<E, S>> for Set<E, S>
{
  fn from(table: HashSet<E, S>) -> Set<E, S> {
    Set::wrap(table)
  }
}

impl<E, const N: usize> From<[E; N]> for Set<E, RandomState> where
  E: Eq + Hash
{
  fn from(elements: [E; N]) -> Set<E, RandomState> {
    Set::make(elements)
  }
}

impl<E, S> PartialEq for Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher
{
  fn eq(&self, other: &Set<E, S>) -> bool {
    self.is_equal(other)
  }
}

impl<E, S> Eq for Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher
{}

impl<E, S> fmt::Debug for Set<E, S> where
  E: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn sorted(s: &Set<&'static str>) -> Vec<&'static str> {
    let mut elements = s.elements();
    elements.sort();
    elements
  }

  fn allocated_empty() -> Set<&'static str> {
    Set::with_capacity(0)
  }

  #[test]
  fn make_test() {
    let none: Set<&str> = Set::make(vec![]);
    assert!(!none.is_allocated());
    assert!(none.is_empty());

    let single = Set::make(vec!["a"]);
    assert!(single.is_allocated());
    assert_eq!(single.len(), 1);
    assert!(single.has("a"));

    let dup = Set::make(vec!["a", "b", "a", "b"]);
    assert_eq!(sorted(&dup), vec!["a", "b"]);

    let collected: Set<i32> = (0..0).collect();
    assert!(!collected.is_allocated());
    let from_array = Set::from([3, 1, 3]);
    assert_eq!(from_array.len(), 2);
  }

  #[test]
  fn empty_forms_test() {
    let nil: Set<&str> = Set::new();
    let empty = allocated_empty();
    assert!(!nil.is_allocated());
    assert!(empty.is_allocated());
    assert!(nil.is_equal(&empty) && empty.is_equal(&nil));
    assert!(nil.is_subset_of(&empty) && empty.is_subset_of(&nil));
    assert!(nil.is_subset_of(&nil));
    assert_eq!(nil, empty);
    assert!(!nil.has("a"));
    assert!(!empty.has("a"));
    assert_eq!(nil.len(), 0);
    assert_eq!(nil.iter().count(), 0);
  }

  #[test]
  fn add_test() {
    let mut s = Set::make(vec!["a"]);
    s.add(vec!["b"]);
    assert_eq!(s.len(), 2);
    assert!(s.has("b"));
    assert!(s.is_equal(&Set::make(vec!["a", "b"])));

    s.add(vec!["b", "a"]);
    assert_eq!(s.len(), 2);

    let mut sa: Set<&str> = Set::new();
    sa.add(vec!["a"]);
    assert!(sa.is_allocated());
    assert_eq!(sa.len(), 1);
    assert!(sa.has("a"));

    let mut nothing: Set<&str> = Set::new();
    nothing.add(vec![]);
    assert!(nothing.is_allocated());
    assert!(nothing.is_empty());
  }

  #[test]
  fn remove_test() {
    let mut s = Set::make(vec!["a", "b"]);
    s.remove(vec!["c"]);
    assert_eq!(s.len(), 2);
    s.remove(vec!["b"]);
    assert_eq!(sorted(&s), vec!["a"]);

    let mut nil: Set<&str> = Set::new();
    nil.remove(vec!["a", "b", "c"]);
    assert!(!nil.is_allocated());

    let mut empty = allocated_empty();
    empty.remove(vec!["b"]);
    assert!(empty.is_allocated());

    let mut chained: Set<&str> = Set::new();
    chained.add(vec!["a"]).remove(vec!["a"]);
    assert!(chained.is_allocated());
    assert!(chained.is_empty());
    assert_eq!(chained.elements().capacity(), 0);
  }

  #[test]
  fn subset_and_equal_test() {
    let ab = Set::make(vec!["a", "b"]);
    let a = Set::make(vec!["a"]);
    let c = Set::make(vec!["c"]);
    let nil: Set<&str> = Set::new();
    let cases = vec![
      // x,    y,    x ⊆ y, y ⊆ x, x = y
      (&a,    &ab,  true,  false, false),
      (&ab,   &ab,  true,  true,  true),
      (&c,    &ab,  false, false, false),
      (&c,    &a,   false, false, false),
      (&nil,  &ab,  true,  false, false),
      (&nil,  &nil, true,  true,  true)
    ];

    for (x, y, sub, sup, eq) in cases.into_iter() {
      assert!(x.is_subset_of(y) == sub, "{:?} subset {:?} is not equal to {:?}", x, y, sub);
      assert!(y.is_subset_of(x) == sup, "{:?} subset {:?} is not equal to {:?}", y, x, sup);
      assert!(x.is_equal(y) == eq, "{:?} equal {:?} is not equal to {:?}", x, y, eq);
      assert!(y.is_equal(x) == eq, "{:?} equal {:?} is not equal to {:?}", y, x, eq);
    }
    assert!(a.is_proper_subset_of(&ab));
    assert!(!ab.is_proper_subset_of(&ab));
  }

  #[test]
  fn copy_test() {
    let ab = Set::make(vec!["a", "b"]);
    let mut copy = ab.copy();
    assert_eq!(copy.len(), ab.len());
    assert!(ab.is_subset_of(&copy));
    assert!(ab.is_equal(&copy));

    copy.remove(vec!["a", "b"]);
    assert_eq!(ab.len(), 2);
    assert!(copy.is_allocated());
    assert!(!copy.copy().is_allocated());

    let nil: Set<&str> = Set::new();
    assert!(!nil.copy().is_allocated());

    let cloned = allocated_empty().clone();
    assert!(cloned.is_allocated());
  }

  #[test]
  fn minus_test() {
    let ab = Set::make(vec!["a", "b"]);
    let a = Set::make(vec!["a"]);

    let mut copy = ab.minus(&Set::new());
    assert_eq!(copy.len(), ab.len());
    copy.remove(vec!["a"]);
    assert_eq!(ab.len(), 2);

    let b = ab.minus(&a);
    assert_eq!(sorted(&b), vec!["b"]);
    assert_eq!(ab.len(), 2);

    let nothing = a.minus(&ab);
    assert!(nothing.is_empty());
    assert!(!nothing.is_allocated());
  }

  #[test]
  fn elements_test() {
    let ab = Set::make(vec!["a", "b"]);
    assert_eq!(sorted(&ab), vec!["a", "b"]);
    assert_eq!(Set::<&str>::new().elements(), Vec::<&str>::new());
    assert_eq!(allocated_empty().elements().capacity(), 0);
  }

  #[test]
  fn union_test() {
    let a = Set::make(vec!["a"]);
    let bc = Set::make(vec!["b", "c"]);
    let nil: Set<&str> = Set::new();
    let empty = allocated_empty();

    let abc = a.union(&bc);
    assert_eq!(sorted(&abc), vec!["a", "b", "c"]);
    assert_eq!(bc.union(&a), abc);
    assert_eq!(a.len(), 1);

    let from_empty = empty.union(&bc);
    assert_eq!(from_empty, bc);
    assert!(!nil.union(&empty).is_allocated());
    assert!(!empty.union(&nil).is_allocated());
    assert_eq!(a.union(&nil), a);
  }

  #[test]
  fn into_union_test() {
    let mut bc = Set::with_capacity(64);
    bc.add(vec!["b", "c"]);

    let moved = Set::new().into_union(bc);
    assert_eq!(sorted(&moved), vec!["b", "c"]);
    assert!(moved.into_hash_set().capacity() >= 64);

    let grown = Set::make(vec!["a"]).into_union(Set::make(vec!["b"]));
    assert_eq!(sorted(&grown), vec!["a", "b"]);

    let nothing = allocated_empty().into_union(allocated_empty());
    assert!(!nothing.is_allocated());
  }

  #[test]
  fn intersect_test() {
    let ab = Set::make(vec!["a", "b"]);
    let bc = Set::make(vec!["b", "c"]);
    let nil: Set<&str> = Set::new();
    let empty = allocated_empty();

    assert_eq!(sorted(&ab.intersect(&bc)), vec!["b"]);
    assert_eq!(ab.intersect(&bc), bc.intersect(&ab));
    assert!(!ab.intersect(&nil).is_allocated());
    assert!(!nil.intersect(&ab).is_allocated());
    assert!(!nil.intersect(&empty).is_allocated());
    assert!(!empty.intersect(&ab).is_allocated());
    assert!(!ab.intersect(&Set::make(vec!["z"])).is_allocated());
  }

  #[test]
  fn symmetric_difference_and_disjoint_test() {
    let ab = Set::make(vec!["a", "b"]);
    let bc = Set::make(vec!["b", "c"]);
    let d = Set::make(vec!["d"]);

    assert_eq!(sorted(&ab.symmetric_difference(&bc)), vec!["a", "c"]);
    assert!(!ab.symmetric_difference(&ab).is_allocated());
    assert!(!ab.is_disjoint(&bc));
    assert!(ab.is_disjoint(&d));
    assert!(Set::<&str>::new().is_disjoint(&ab));
  }

  #[test]
  fn clear_and_iter_test() {
    let mut ab = Set::make(vec!["a", "b"]);
    let mut seen: Vec<&str> = (&ab).into_iter().cloned().collect();
    seen.sort();
    assert_eq!(seen, vec!["a", "b"]);

    ab.clear();
    assert!(ab.is_empty());
    assert!(ab.is_allocated());

    let mut nil: Set<&str> = Set::new();
    nil.clear();
    assert!(!nil.is_allocated());
    assert!(Set::<&str>::new().into_hash_set().is_empty());
  }

  #[test]
  fn debug_test() {
    assert_eq!(format!("{:?}", Set::make(vec![1])), "{1}");
    assert_eq!(format!("{:?}", Set::<i32>::new()), "{}");
  }
}
