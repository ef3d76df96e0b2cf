//! Instance estimation: walking a live value through its declared fields.
//!
//! The core entry point of the library. For every field the probed value's
//! runtime type declares directly, the field slot is read, classified, and
//! dispatched to the matching estimator. Estimation is best effort: under
//! the default `Skip` policy an unreadable field or an unresolvable
//! fallback type is logged and charged zero rather than aborting a result
//! the remaining fields can still provide.

use log::warn;

use crate::{
    estimate::{
        classifier::{classify, EstimatePath},
        Estimator, OnFieldError,
    },
    model::{FieldDescriptor, ObjectValue, Value, OBJECT_BYTES},
    Error, Result,
};

/// Whether an error aborts the estimate regardless of the field-error
/// policy.
fn is_fatal(error: &Error) -> bool {
    matches!(
        error,
        Error::NullArgument(_) | Error::UnsupportedFieldType(_) | Error::DepthExceeded(_)
    )
}

impl Estimator {
    /// Dispatch one live value to its estimation path.
    pub(crate) fn instance_size(&self, value: &Value, depth: usize) -> Result<u64> {
        self.check_depth(depth)?;

        match value {
            // Collection runtime shapes delegate wholly; no field walk.
            Value::List(items) => self.list_size(items, depth),
            Value::Map(entries) => self.map_size(entries, depth),
            Value::Object(object) => self.object_size(object, depth),
            Value::Str(text) => Ok(OBJECT_BYTES + self.char_width() * char_count(text)),
            Value::Array(array) => self.array_size(Some(array), depth),
            other => self.boxed_size(Some(other), depth),
        }
    }

    /// Walk the fields declared directly on the object's runtime type,
    /// starting the accumulator at the object-header cost.
    fn object_size(&self, object: &ObjectValue, depth: usize) -> Result<u64> {
        let descriptor = self.registry().get(object.type_name())?;

        let mut size = OBJECT_BYTES;
        for field in descriptor.fields() {
            match self.field_size(object, field, depth) {
                Ok(bytes) => size += bytes,
                Err(error) if is_fatal(&error) => return Err(error),
                Err(error) => match self.options().on_field_error {
                    OnFieldError::Propagate => return Err(error),
                    OnFieldError::Skip => {
                        warn!(
                            "skipping field '{}' of '{}': {}",
                            field.name,
                            object.type_name(),
                            error
                        );
                    }
                },
            }
        }

        Ok(size)
    }

    /// Contribution of one declared field of a live object.
    fn field_size(
        &self,
        object: &ObjectValue,
        field: &FieldDescriptor,
        depth: usize,
    ) -> Result<u64> {
        // A missing slot models a field that could not be read even after
        // forcing accessibility.
        let value = object
            .get(&field.name)
            .ok_or_else(|| access_error(object, field))?;

        match classify(&field.declared, value)? {
            EstimatePath::Str => match value {
                // An absent string still consumes its reference slot. This
                // is an intentional asymmetry with arrays, which charge
                // nothing when absent.
                None => Ok(OBJECT_BYTES),
                Some(Value::Str(text)) => {
                    Ok(OBJECT_BYTES + self.char_width() * char_count(text))
                }
                Some(_) => Err(access_error(object, field)),
            },
            EstimatePath::Array => match value {
                None => Ok(0),
                Some(Value::Array(array)) => self.array_size(Some(array), depth),
                Some(_) => Err(access_error(object, field)),
            },
            EstimatePath::List => match value {
                Some(Value::List(items)) => self.list_size(items, depth),
                _ => Err(access_error(object, field)),
            },
            EstimatePath::Map => match value {
                Some(Value::Map(entries)) => self.map_size(entries, depth),
                _ => Err(access_error(object, field)),
            },
            EstimatePath::Boxed => self.boxed_size(value, depth),
            EstimatePath::Primitive(kind) => Ok(kind.width()),
            EstimatePath::Recurse => match value {
                Some(nested) => self.instance_size(nested, depth + 1),
                None => Err(access_error(object, field)),
            },
            EstimatePath::ReferenceSlot => Ok(OBJECT_BYTES),
            EstimatePath::ClassOnly(type_name) => self.class_only_size(&type_name, depth + 1),
        }
    }
}

fn access_error(object: &ObjectValue, field: &FieldDescriptor) -> Error {
    Error::FieldAccess {
        type_name: object.type_name().to_string(),
        field: field.name.clone(),
    }
}

/// Character count of a string; the model charges per character, not per
/// UTF-8 byte.
pub(crate) fn char_count(text: &str) -> u64 {
    text.chars().count() as u64
}
