/*!
This module contains the sorting entry points. All in-place sorts are stable, so values with
equal order values keep their relative input order. Slices are the unit of mutation which covers
vectors and fixed-size arrays alike through coercion.

None of the operations here synchronize. A sequence being sorted must not be shared across
threads, consistent with the usual contract of non-synchronized in-place sorts.
*/

use std::fmt;
use std::vec;

use crate::comparator::{Comparator, OrderComparator, ReverseOrderComparator};
use crate::ordered::{AsOrdered, Ordered};

/**
Sort the given sequence in place, ascending by resolved order value.

The sort is stable. Values without an explicit order resolve to the lowest precedence and hence
end up last.
*/
pub fn sort<T>(sequence: &mut [T])
where
    T: AsOrdered,
{
    log::trace!("Sorting {} elements ascending by order value", sequence.len());
    sequence.sort_by(|a, b| OrderComparator::compare(a, b));
}

/**
Sort the given sequence in place, descending by resolved order value.

The comparator used is the exact inverse of the ascending one, so ties mirror the tie behavior
of a stable ascending sort rather than being re-ranked.
*/
pub fn reverse_sort<T>(sequence: &mut [T])
where
    T: AsOrdered,
{
    log::trace!(
        "Sorting {} elements descending by order value",
        sequence.len()
    );
    sequence.sort_by(|a, b| ReverseOrderComparator::compare(a, b));
}

/// Sort a sequence whose element type statically guarantees the [`Ordered`] capability. This
/// skips the per-element capability query that [`sort`] performs.
pub fn sort_ordered<T>(sequence: &mut [T])
where
    T: Ordered,
{
    sequence.sort_by(|a, b| a.order().cmp(&b.order()));
}

/**
Return an iterator yielding the elements of the given iterable, ascending by resolved order
value.

The input is not mutated. The source is buffered and sorted lazily on the first call to `next`,
so constructing the adapter is free. The adapter is single-pass: once drained it is exhausted
and cannot be restarted.
*/
pub fn sort_iter<I>(iterable: I) -> SortedByOrder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsOrdered,
{
    SortedByOrder {
        source: Some(iterable.into_iter()),
        sorted: Vec::new().into_iter(),
    }
}

/// An iterator adapter yielding the elements of a wrapped iterator in ascending order by
/// resolved order value. Created by [`sort_iter`].
pub struct SortedByOrder<I: Iterator> {
    /// The wrapped iterator. Consumed in whole on the first call to `next`.
    source: Option<I>,
    /// The sorted elements remaining to be yielded.
    sorted: vec::IntoIter<I::Item>,
}

impl<I> Iterator for SortedByOrder<I>
where
    I: Iterator,
    I::Item: AsOrdered,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.take() {
            let mut buffered: Vec<I::Item> = source.collect();
            sort(&mut buffered);
            self.sorted = buffered.into_iter();
        }

        self.sorted.next()
    }
}

impl<I: Iterator> fmt::Debug for SortedByOrder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedByOrder")
            .field("materialized", &self.source.is_none())
            .field("remaining", &self.sorted.len())
            .finish()
    }
}
