// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Utilities to assist with comparing based on resolved order values. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`PartialOrd`].

The comparators here are stateless unit structs constructed per use. There are no global
comparator singletons and hence no reliance on runtime initialization order.
*/

use std::cmp::Ordering;

use crate::ordered::AsOrdered;
use crate::resolve::order_of;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(a: &T, b: &T) -> Ordering;
}

/// Compares two values by their resolved order values, ascending. Values without an explicit
/// order resolve to the lowest precedence and hence compare greater than any value with one.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderComparator;

impl<T: AsOrdered + ?Sized> Comparator<T> for OrderComparator {
    fn compare(a: &T, b: &T) -> Ordering {
        order_of(a).cmp(&order_of(b))
    }
}

/**
Compares two values by their resolved order values, descending.

This is the exact functional inverse of [`OrderComparator`] obtained by reversing its result.
The order values are never re-ranked, so a stable sort under this comparator mirrors the tie
behavior of a stable ascending sort.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrderComparator;

impl<T: AsOrdered + ?Sized> Comparator<T> for ReverseOrderComparator {
    fn compare(a: &T, b: &T) -> Ordering {
        OrderComparator::compare(a, b).reverse()
    }
}
