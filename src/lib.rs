/*!
Precedence orders collections of values by explicit integer order values. Lower order values have
higher precedence and sort first in ascending order. Values participate either by implementing
the [`Ordered`] capability directly or by carrying an integer `"Order"` annotation in attached
[`metadata`]; values exposing neither resolve to [`LOWEST_PRECEDENCE`] and sort last.

Resolution is total so there are no error paths: every input, including absent values, resolves
deterministically to a default order. With regard to code clarity, we have configured the project
such that `rustdoc` generates output even for private methods.
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod comparator;
pub use comparator::{Comparator, OrderComparator, ReverseOrderComparator};

pub mod metadata;
pub use metadata::{AnnotationMetadata, AnnotationValues, EmptyMetadata, ORDER_ANNOTATION};

pub mod ordered;
pub use ordered::{AsOrdered, Ordered, HIGHEST_PRECEDENCE, LOWEST_PRECEDENCE};

mod resolve;
pub use resolve::{annotated_order, order_of, order_of_annotated};

mod sort;
pub use sort::{reverse_sort, sort, sort_iter, sort_ordered, SortedByOrder};
