// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Derives the owned/borrowed operand mixes of `$imp` on `Set` from `&Set $imp &Set`.
macro_rules! forward_set_binop {
  ($imp:ident, $method:ident) => {
    impl<E, S> $imp<Set<E, S>> for Set<E, S> where
      E: Eq + Hash + Clone,
      S: BuildHasher + Default
    {
      type Output = Set<E, S>;

      fn $method(self, other: Set<E, S>) -> Set<E, S> {
        $imp::$method(&self, &other)
      }
    }

    impl<'a, E, S> $imp<Set<E, S>> for &'a Set<E, S> where
      E: Eq + Hash + Clone,
      S: BuildHasher + Default
    {
      type Output = Set<E, S>;

      fn $method(self, other: Set<E, S>) -> Set<E, S> {
        $imp::$method(self, &other)
      }
    }

    impl<'b, E, S> $imp<&'b Set<E, S>> for Set<E, S> where
      E: Eq + Hash + Clone,
      S: BuildHasher + Default
    {
      type Output = Set<E, S>;

      fn $method(self, other: &'b Set<E, S>) -> Set<E, S> {
        $imp::$method(&self, other)
      }
    }
  }
}
