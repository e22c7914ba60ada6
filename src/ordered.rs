/*!
This module contains the `Ordered` capability that values implement to expose an explicit order
value as well as the `AsOrdered` query used to discover the capability at runtime.

Order values are plain signed integers where lower values have higher precedence i.e. they sort
earlier in ascending order. Values that do not expose an order are treated as having
[`LOWEST_PRECEDENCE`] and sort last.
*/

use std::rc::Rc;
use std::sync::Arc;

/// The order value denoting the highest precedence i.e. sorts first.
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;

/// The order value denoting "no preference, sort last".
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;

/**
A capability for values that expose an explicit order value.

The default order is 0. Implementors override [`Ordered::order`] to claim a different position
relative to their peers.
*/
pub trait Ordered {
    /// Returns the order value of this value. Lower values sort first.
    fn order(&self) -> i32 {
        0
    }
}

/**
A query for discovering the [`Ordered`] capability of an arbitrary value.

This is the seam that lets ordering operations accept values that may or may not expose an
explicit order. The provided default reports no capability, so opting a type out is a one line
`impl AsOrdered for MyType {}`. Types implementing [`Ordered`] opt in by returning `Some(self)`.

The query is total. There is no error path; callers substitute a default order when `None` is
returned.
*/
pub trait AsOrdered {
    /// Returns a view of this value as an [`Ordered`] if it exposes an explicit order.
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        None
    }
}

impl<'a> AsOrdered for dyn Ordered + 'a {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        Some(self)
    }
}

impl<'a> AsOrdered for dyn Ordered + Send + Sync + 'a {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        Some(self)
    }
}

impl<T: AsOrdered + ?Sized> AsOrdered for &T {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        (**self).as_ordered()
    }
}

impl<T: AsOrdered + ?Sized> AsOrdered for &mut T {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        (**self).as_ordered()
    }
}

impl<T: AsOrdered + ?Sized> AsOrdered for Box<T> {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        (**self).as_ordered()
    }
}

impl<T: AsOrdered + ?Sized> AsOrdered for Rc<T> {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        (**self).as_ordered()
    }
}

impl<T: AsOrdered + ?Sized> AsOrdered for Arc<T> {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        (**self).as_ordered()
    }
}

/// Absent values report no capability and hence resolve to the default order.
impl<T: AsOrdered> AsOrdered for Option<T> {
    fn as_ordered(&self) -> Option<&dyn Ordered> {
        self.as_ref().and_then(AsOrdered::as_ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Handler {
        order: i32,
    }

    impl Ordered for Handler {
        fn order(&self) -> i32 {
            self.order
        }
    }

    impl AsOrdered for Handler {
        fn as_ordered(&self) -> Option<&dyn Ordered> {
            Some(self)
        }
    }

    struct Plain;

    impl AsOrdered for Plain {}

    struct DefaultOrdered;

    impl Ordered for DefaultOrdered {}

    #[test]
    fn an_implementing_value_reports_its_capability() {
        let handler = Handler { order: 7 };
        assert_eq!(handler.as_ordered().map(Ordered::order), Some(7));
    }

    #[test]
    fn a_value_without_the_capability_reports_none() {
        assert!(Plain.as_ordered().is_none());
    }

    #[test]
    fn the_default_order_is_zero() {
        assert_eq!(DefaultOrdered.order(), 0);
    }

    #[test]
    fn wrapped_values_forward_the_capability_query() {
        let boxed: Box<Handler> = Box::new(Handler { order: 3 });
        assert_eq!(boxed.as_ordered().map(Ordered::order), Some(3));

        let trait_object: Box<dyn Ordered> = Box::new(Handler { order: 4 });
        assert_eq!(trait_object.as_ordered().map(Ordered::order), Some(4));

        let shared = Arc::new(Handler { order: 5 });
        assert_eq!(shared.as_ordered().map(Ordered::order), Some(5));
    }

    #[test]
    fn absent_values_report_no_capability() {
        let absent: Option<Handler> = None;
        assert!(absent.as_ordered().is_none());

        let present = Some(Handler { order: 9 });
        assert_eq!(present.as_ordered().map(Ordered::order), Some(9));
    }
}
