//! Collection and boxed-type estimation.
//!
//! Lists and maps are costed from a single sampled element (and, for maps,
//! one key and one value): the homogeneous-element assumption models every
//! other entry at the sampled size, avoiding a full traversal. Sampled
//! elements are costed by the boxed-type estimator, which also resolves the
//! two arbitrary-precision numeric shapes.

use log::debug;

use crate::{
    estimate::Estimator,
    model::{
        ArrayElement, ArrayValue, BigDecimalValue, BigIntValue, PrimitiveKind, Value,
        ARRAY_BYTES, COUNTER_BYTES, OBJECT_BYTES,
    },
    Result,
};

use super::instance::char_count;

impl Estimator {
    /// Ordered-list contribution: the backing object, its storage array
    /// header and one length counter, plus count times the sampled element
    /// size.
    pub(crate) fn list_size(&self, items: &[Value], depth: usize) -> Result<u64> {
        let base = OBJECT_BYTES + ARRAY_BYTES + COUNTER_BYTES;

        let Some(first) = items.first() else {
            return Ok(base);
        };

        let element = self.boxed_size(Some(first), depth)?;
        Ok(base.saturating_add((items.len() as u64).saturating_mul(element)))
    }

    /// Hashed-map contribution: the map object with three bookkeeping
    /// counters and a load-factor slot; when non-empty, the table header
    /// plus count times (key + value + per-entry overhead) at the sampled
    /// entry sizes.
    pub(crate) fn map_size(&self, entries: &[(Value, Value)], depth: usize) -> Result<u64> {
        let base = OBJECT_BYTES + 3 * COUNTER_BYTES + PrimitiveKind::R4.width();

        let Some((key, value)) = entries.first() else {
            return Ok(base);
        };

        let key_size = self.boxed_size(Some(key), depth)?;
        let value_size = self.boxed_size(Some(value), depth)?;
        let entry = key_size
            .saturating_add(value_size)
            .saturating_add(COUNTER_BYTES);
        Ok((base + ARRAY_BYTES).saturating_add((entries.len() as u64).saturating_mul(entry)))
    }

    /// Cost of one sampled collection element, key or value.
    ///
    /// Absent input charges zero. Scalars charge their unboxed width, big
    /// numbers their fixed slots plus length-dependent parts, array-shaped
    /// values go through the array estimator. Other reference shapes
    /// reached through a collection are not separately modeled and charge
    /// zero.
    pub(crate) fn boxed_size(&self, value: Option<&Value>, depth: usize) -> Result<u64> {
        let Some(value) = value else {
            return Ok(0);
        };

        if let Some(kind) = value.primitive_kind() {
            return Ok(kind.width());
        }

        match value {
            Value::Array(array) => self.array_size(Some(array), depth),
            Value::BigInt(big) => self.big_int_size(big, depth),
            Value::BigDecimal(decimal) => self.big_decimal_size(decimal, depth),
            other => {
                debug!("unmodeled element shape charged zero: {other:?}");
                Ok(0)
            }
        }
    }

    /// Arbitrary-precision integer: header, the signum and four cached
    /// counters, and the magnitude word array.
    fn big_int_size(&self, value: &BigIntValue, depth: usize) -> Result<u64> {
        let magnitude = ArrayValue::new(
            ArrayElement::Primitive(PrimitiveKind::I4),
            value.magnitude.len() as u64,
        );
        Ok(OBJECT_BYTES + 5 * COUNTER_BYTES + self.array_size(Some(&magnitude), depth)?)
    }

    /// Arbitrary-precision decimal: the unscaled integer, precision and
    /// hash counters, the 8-byte scale field and the encoded canonical
    /// text.
    fn big_decimal_size(&self, value: &BigDecimalValue, depth: usize) -> Result<u64> {
        Ok(self.big_int_size(&value.unscaled, depth)?
            + 2 * COUNTER_BYTES
            + PrimitiveKind::I8.width()
            + self.char_width() * char_count(&value.text))
    }
}
