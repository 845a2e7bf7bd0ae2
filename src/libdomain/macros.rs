// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Forwards a `std::ops` operator on every owned/borrowed operand combination to a by-reference method.
// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
macro_rules! forward_all_binop {
  (impl[$($bs:tt)+] $imp:ident, $method:ident for $res:ident => $inner:ident) => {
    impl<'a, 'b, T: $($bs)+> $imp<&'b $res<T>> for &'a $res<T> {
      type Output = $res<T>;

      fn $method(self, other: &'b $res<T>) -> $res<T> {
        $res::$inner(self, other)
      }
    }

    impl<T: $($bs)+> $imp<$res<T>> for $res<T> {
      type Output = $res<T>;

      fn $method(self, other: $res<T>) -> $res<T> {
        $res::$inner(&self, &other)
      }
    }

    impl<'a, T: $($bs)+> $imp<$res<T>> for &'a $res<T> {
      type Output = $res<T>;

      fn $method(self, other: $res<T>) -> $res<T> {
        $res::$inner(self, &other)
      }
    }

    impl<'b, T: $($bs)+> $imp<&'b $res<T>> for $res<T> {
      type Output = $res<T>;

      fn $method(self, other: &'b $res<T>) -> $res<T> {
        $res::$inner(&self, other)
      }
    }
  };
}

// Implements a binary `gcollections` set operation by delegating to the inherent method of the same name.
macro_rules! set_op_impl {
  (impl $bs:tt $($t:ident, $m:ident for $res:ident);+) => {$(
    set_op_impl!(@one $bs $t, $m for $res);
  )+};
  (@one [$($bs:tt)+] $t:ident, $m:ident for $res:ident) => {
    impl<T: $($bs)+> $t for $res<T> {
      type Output = $res<T>;

      fn $m(&self, other: &$res<T>) -> $res<T> {
        $res::$m(self, other)
      }
    }
  };
}
