//! Class-only estimation: a footprint bound from field declarations alone.
//!
//! Used when a field's value is absent but its declared composite type is
//! registered, and for the public type-only entry point. With no instance
//! to inspect, anything length-dependent is charged at its fixed floor:
//! arrays contribute their header only, collections their empty-collection
//! base, big numbers their fixed slots.

use crate::{
    estimate::Estimator,
    model::{DeclaredType, PrimitiveKind, ARRAY_BYTES, COUNTER_BYTES, OBJECT_BYTES},
    Error, Result,
};

impl Estimator {
    /// Estimate a type's footprint from its registered declarations.
    ///
    /// Unlike instance estimation this path always propagates resolution
    /// failures: once a declared type cannot be resolved there is no
    /// fallback left.
    pub(crate) fn class_only_size(&self, type_name: &str, depth: usize) -> Result<u64> {
        self.check_depth(depth)?;
        let descriptor = self.registry().get(type_name)?;

        let mut size = OBJECT_BYTES;
        for field in descriptor.fields() {
            size += self.declared_size(&field.declared, depth)?;
        }

        Ok(size)
    }

    /// Fixed cost of one declared field with no value available.
    fn declared_size(&self, declared: &DeclaredType, depth: usize) -> Result<u64> {
        Ok(match declared {
            // Boxed scalars are charged at the unboxed width throughout the
            // model.
            DeclaredType::Primitive(kind) | DeclaredType::Boxed(kind) => kind.width(),
            // One reference slot; string content length is unknowable here.
            DeclaredType::Str | DeclaredType::Object => OBJECT_BYTES,
            // Element count unknowable without an instance, so elements are
            // not charged.
            DeclaredType::Array(_) => ARRAY_BYTES,
            DeclaredType::List => OBJECT_BYTES + ARRAY_BYTES + COUNTER_BYTES,
            DeclaredType::Map => OBJECT_BYTES + 3 * COUNTER_BYTES + COUNTER_BYTES,
            DeclaredType::BigInt => OBJECT_BYTES + 5 * COUNTER_BYTES + ARRAY_BYTES,
            DeclaredType::BigDecimal => {
                // The big-integer floor plus precision and hash counters,
                // the 8-byte scale field, and one reference slot for the
                // canonical text.
                OBJECT_BYTES
                    + 5 * COUNTER_BYTES
                    + ARRAY_BYTES
                    + 2 * COUNTER_BYTES
                    + PrimitiveKind::I8.width()
                    + OBJECT_BYTES
            }
            DeclaredType::Composite(name) => self.class_only_size(name, depth + 1)?,
            DeclaredType::Unknown(name) => {
                return Err(Error::UnsupportedFieldType(name.clone()))
            }
        })
    }
}
