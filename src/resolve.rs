/*!
This module contains the order resolution entry points. Resolution is layered:

1. A value implementing the [`Ordered`] capability always answers with its own order value
1. Otherwise, the metadata-aware entry point consults the `"Order"` annotation on the supplied
   metadata
1. Otherwise, a defined default is substituted

Resolution is total over any input. Note that the two entry points substitute different
defaults: [`order_of`] falls back to [`LOWEST_PRECEDENCE`] while [`order_of_annotated`] falls
back to 0. The asymmetry is deliberate and load-bearing for callers that treat annotated values
as a distinct registration tier, so the two must not be unified.
*/

use crate::metadata::{AnnotationMetadata, ORDER_ANNOTATION};
use crate::ordered::{AsOrdered, Ordered, LOWEST_PRECEDENCE};

/**
Resolve the order of the given value.

Returns the value's own order when it exposes the [`Ordered`] capability and
[`LOWEST_PRECEDENCE`] otherwise.
*/
pub fn order_of<T>(value: &T) -> i32
where
    T: AsOrdered + ?Sized,
{
    match value.as_ordered() {
        Some(ordered) => ordered.order(),
        None => LOWEST_PRECEDENCE,
    }
}

/**
Resolve the order of the given value, falling back to annotation metadata.

The [`Ordered`] capability has precedence over annotation metadata. When the capability is
absent, the `"Order"` annotation on the supplied metadata is consulted and 0 is substituted if
the annotation is not attached.
*/
pub fn order_of_annotated<M, T>(metadata: &M, value: &T) -> i32
where
    M: AnnotationMetadata + ?Sized,
    T: AsOrdered + ?Sized,
{
    match value.as_ordered() {
        Some(ordered) => ordered.order(),
        None => annotated_order(metadata),
    }
}

/// Resolve an order from annotation metadata alone. Defaults to 0 when no `"Order"` annotation
/// is attached.
pub fn annotated_order<M>(metadata: &M) -> i32
where
    M: AnnotationMetadata + ?Sized,
{
    metadata.int_value(ORDER_ANNOTATION).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AnnotationValues, EmptyMetadata};
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

    #[test]
    fn values_with_the_capability_resolve_to_their_own_order() {
        assert_eq!(order_of(&Handler { order: -100 }), -100);
    }

    #[test]
    fn values_without_the_capability_resolve_to_the_lowest_precedence() {
        assert_eq!(order_of(&Plain), LOWEST_PRECEDENCE);
    }

    #[test]
    fn absent_values_resolve_to_the_lowest_precedence() {
        let absent: Option<Handler> = None;
        assert_eq!(order_of(&absent), LOWEST_PRECEDENCE);
    }

    #[test]
    fn the_capability_has_precedence_over_annotation_metadata() {
        let metadata = AnnotationValues::new().with_value(ORDER_ANNOTATION, 99);

        assert_eq!(order_of_annotated(&metadata, &Handler { order: 5 }), 5);
    }

    #[test]
    fn an_attached_order_annotation_is_used_when_the_capability_is_absent() {
        let metadata = AnnotationValues::new().with_value(ORDER_ANNOTATION, 99);

        assert_eq!(order_of_annotated(&metadata, &Plain), 99);
    }

    #[test]
    fn the_annotated_default_is_zero_not_the_lowest_precedence() {
        assert_eq!(order_of_annotated(&EmptyMetadata, &Plain), 0);
        assert_eq!(annotated_order(&EmptyMetadata), 0);
    }
}
