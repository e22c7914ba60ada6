/*!
This module contains the annotation metadata interface used as the fallback source of order
values for values that do not implement the [`Ordered`](crate::Ordered) capability directly.

Metadata lookup is total. A missing annotation is expressed as `None` and callers substitute a
defined default, so there is no failure path.
*/

use std::collections::HashMap;

/// The name of the annotation consulted for a fallback order value.
pub const ORDER_ANNOTATION: &str = "Order";

/// An interface for carriers of integer-valued annotations.
pub trait AnnotationMetadata {
    /// Returns the integer value of the named annotation if one is attached.
    fn int_value(&self, annotation: &str) -> Option<i32>;
}

/// Metadata carrying no annotation values.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyMetadata;

impl AnnotationMetadata for EmptyMetadata {
    fn int_value(&self, _annotation: &str) -> Option<i32> {
        None
    }
}

/**
A map-backed carrier of integer-valued annotations.

This is the concrete [`AnnotationMetadata`] used when annotation values are assembled in-process
e.g. by a scanner that reads declarative order markers off of registered values.
*/
#[derive(Clone, Debug, Default)]
pub struct AnnotationValues {
    /// Annotation names mapped to their attached integer values.
    values: HashMap<String, i32>,
}

impl AnnotationValues {
    /// Construct an empty set of annotation values.
    pub fn new() -> Self {
        AnnotationValues {
            values: HashMap::new(),
        }
    }

    /// Attach an annotation value, replacing any previous value for the same annotation.
    pub fn set_value(&mut self, annotation: impl Into<String>, value: i32) {
        self.values.insert(annotation.into(), value);
    }

    /// Builder-style variant of [`AnnotationValues::set_value`].
    pub fn with_value(mut self, annotation: impl Into<String>, value: i32) -> Self {
        self.set_value(annotation, value);
        self
    }
}

impl AnnotationMetadata for AnnotationValues {
    fn int_value(&self, annotation: &str) -> Option<i32> {
        self.values.get(annotation).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_metadata_has_no_values() {
        assert_eq!(EmptyMetadata.int_value(ORDER_ANNOTATION), None);
    }

    #[test]
    fn attached_values_can_be_looked_up() {
        let metadata = AnnotationValues::new().with_value(ORDER_ANNOTATION, 42);

        assert_eq!(metadata.int_value(ORDER_ANNOTATION), Some(42));
        assert_eq!(metadata.int_value("Replaces"), None);
    }

    #[test]
    fn setting_a_value_replaces_the_previous_value() {
        let mut metadata = AnnotationValues::new();
        metadata.set_value(ORDER_ANNOTATION, 1);
        metadata.set_value(ORDER_ANNOTATION, 2);

        assert_eq!(metadata.int_value(ORDER_ANNOTATION), Some(2));
    }
}
