// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides a generic hash set with value semantics for set algebra (union, intersection, difference, subset and equality tests). Unlike `std::collections::HashSet`, an empty `Set` exists in two forms: an uninitialized one holding no table, and an allocated one. Both are equal as sets, and each operation documents which form it returns when its result is empty.
//!
//! `Set` also implements the generic collection traits of [gcollections](https://docs.rs/gcollections), so it can be used by algorithms written over these traits.
//!
//! # Examples
//!
//! For examples see the [set module](set/index.html) or the [set_operations module](set_operations/index.html).

mod macros;
pub mod set;
pub mod set_operations;

pub use crate::set::Set;
