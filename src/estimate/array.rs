//! Array estimation.

use crate::{
    estimate::Estimator,
    model::{ArrayElement, ArrayValue, ARRAY_BYTES, OBJECT_BYTES},
    Result,
};

impl Estimator {
    /// Array contribution: the array-header cost plus element count times
    /// the declared element width.
    ///
    /// Null-tolerant: an absent array contributes nothing, not even a
    /// header. Callers on the field path skip absent arrays themselves, but
    /// the estimator accepts `None` for reuse inside collection sampling.
    pub(crate) fn array_size(&self, array: Option<&ArrayValue>, depth: usize) -> Result<u64> {
        let Some(array) = array else {
            return Ok(0);
        };

        let element_width = match &array.element {
            // A boxed-scalar array is charged as if unboxed, a deliberate
            // approximation of the model.
            ArrayElement::Primitive(kind) | ArrayElement::Boxed(kind) => kind.width(),
            ArrayElement::Str | ArrayElement::Object => OBJECT_BYTES,
            // Homogeneous-element assumption: one class-only estimate of the
            // element type models every slot, with no per-element
            // inspection.
            ArrayElement::Composite(name) => self.class_only_size(name, depth + 1)?,
        };

        // Saturating: an absurd length clamps at the numeric ceiling, it
        // never wraps a non-negative estimate.
        Ok(ARRAY_BYTES.saturating_add(array.len.saturating_mul(element_width)))
    }
}
