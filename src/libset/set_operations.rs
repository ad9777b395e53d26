// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic collection operations on `Set`.
//!
//! `Set` implements the traits of [gcollections](https://docs.rs/gcollections) so it can be given to algorithms written against them. The methods delegate to the inherent ones and keep their normalization of empty results. The binary operators `|`, `&`, `-` and `^` are respectively union, intersection, difference and symmetric difference, for any mix of owned and borrowed operands.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::{Difference, Intersection, Union};
//! use set::Set;
//!
//! fn symmetric_difference<A>(a: &A, b: &A) -> A where
//!  A: Intersection<Output=A> + Union<Output=A> + Difference<Output=A>
//! {
//!   let union = a.union(b);
//!   let intersect = a.intersection(b);
//!   union.difference(&intersect)
//! }
//!
//! let a: Set<i32> = [1, 2, 3, 4].iter().cloned().collect();
//! let b: Set<i32> = [3, 4, 5, 6].iter().cloned().collect();
//! let res: Set<i32> = [1, 2, 5, 6].iter().cloned().collect();
//! assert_eq!(symmetric_difference(&a, &b), res);
//! assert_eq!(&a ^ &b, res);
//! ```

use crate::set::Set;
use gcollections::kind::*;
use gcollections::ops::*;
use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

impl<E, S> Collection for Set<E, S>
{
  type Item = E;
}

impl<E, S> Cardinality for Set<E, S>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.len()
  }
}

impl<E, S> Empty for Set<E, S>
{
  fn empty() -> Set<E, S> {
    Set::default()
  }
}

impl<E, S> Singleton for Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher + Default
{
  fn singleton(value: E) -> Set<E, S> {
    Some(value).into_iter().collect()
  }
}

impl<E, S> Contains for Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher
{
  fn contains(&self, value: &E) -> bool {
    self.has(value)
  }
}

macro_rules! set_op_impl
{
  ( $( $t:ident, $m:ident, $v:ident );* ) =>
  {$(
    impl<E, S> $t for Set<E, S> where
      E: Eq + Hash + Clone,
      S: BuildHasher + Default
    {
      type Output = Set<E, S>;

      fn $m(&self, other: &Set<E, S>) -> Set<E, S> {
        Set::$v(self, other)
      }
    }
  )*}
}

set_op_impl! {
  Union, union, union;
  Intersection, intersection, intersect;
  Difference, difference, minus;
  SymmetricDifference, symmetric_difference, symmetric_difference
}

macro_rules! set_predicate_impl
{
  ( $( $t:ident, $m:ident, $v:ident );* ) =>
  {$(
    impl<E, S> $t for Set<E, S> where
      E: Eq + Hash,
      S: BuildHasher
    {
      fn $m(&self, other: &Set<E, S>) -> bool {
        Set::$v(self, other)
      }
    }
  )*}
}

set_predicate_impl! {
  Subset, is_subset, is_subset_of;
  ProperSubset, is_proper_subset, is_proper_subset_of;
  Disjoint, is_disjoint, is_disjoint
}

impl<E, S> Overlap for Set<E, S> where
  E: Eq + Hash,
  S: BuildHasher
{
  fn overlap(&self, other: &Set<E, S>) -> bool {
    !Set::is_disjoint(self, other)
  }
}

macro_rules! set_binop_impl
{
  ( $( $imp:ident, $method:ident, $v:ident );* ) =>
  {$(
    impl<'a, 'b, E, S> $imp<&'b Set<E, S>> for &'a Set<E, S> where
      E: Eq + Hash + Clone,
      S: BuildHasher + Default
    {
      type Output = Set<E, S>;

      fn $method(self, other: &'b Set<E, S>) -> Set<E, S> {
        Set::$v(self, other)
      }
    }

    forward_set_binop!($imp, $method);
  )*}
}

set_binop_impl! {
  BitOr, bitor, union;
  BitAnd, bitand, intersect;
  Sub, sub, minus;
  BitXor, bitxor, symmetric_difference
}
