//! Declared-type classification.
//!
//! Given a field's declared type and, where available, its live value, the
//! classifier picks exactly one estimation path. Classification is ordered
//! and first-match-wins: string, collection runtime shape, array shape, big
//! number runtime shape, boxed scalar, primitive scalar, composite.

use crate::{
    model::{DeclaredType, PrimitiveKind, Value},
    Error, Result,
};

/// The estimation path selected for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimatePath {
    /// Character string: reference slot plus per-character cost.
    Str,
    /// Ordered-list runtime shape, costed by the list estimator.
    List,
    /// Hashed-map runtime shape, costed by the map estimator.
    Map,
    /// Array shape, costed by the array estimator.
    Array,
    /// Boxed scalar, big number, or declared collection with no live
    /// collection value; costed by the boxed-type estimator (absent → 0).
    Boxed,
    /// Unboxed scalar of the given kind, costed from the size table.
    Primitive(PrimitiveKind),
    /// Present nested composite: recurse into the instance estimator.
    Recurse,
    /// Absent value of the universal reference type: one reference slot.
    ReferenceSlot,
    /// Absent composite with a resolvable declared type: class-only
    /// fallback on that type.
    ClassOnly(String),
}

/// Classify one field.
///
/// # Errors
/// Returns [`Error::UnsupportedFieldType`] when the declared type is an
/// unrecognized name; this is fatal for the whole estimate.
pub(crate) fn classify(declared: &DeclaredType, value: Option<&Value>) -> Result<EstimatePath> {
    if matches!(declared, DeclaredType::Str) {
        return Ok(EstimatePath::Str);
    }

    // Collection and big-number detection keys off the runtime shape, not
    // the declaration: a field declared as the universal reference type
    // still takes these paths when it holds one of their values.
    match value {
        Some(Value::List(_)) => return Ok(EstimatePath::List),
        Some(Value::Map(_)) => return Ok(EstimatePath::Map),
        _ => {}
    }

    if matches!(declared, DeclaredType::Array(_)) {
        return Ok(EstimatePath::Array);
    }

    if matches!(value, Some(Value::BigInt(_) | Value::BigDecimal(_))) {
        return Ok(EstimatePath::Boxed);
    }

    match declared {
        DeclaredType::List
        | DeclaredType::Map
        | DeclaredType::BigInt
        | DeclaredType::BigDecimal
        | DeclaredType::Boxed(_) => Ok(EstimatePath::Boxed),
        DeclaredType::Primitive(kind) => Ok(EstimatePath::Primitive(*kind)),
        DeclaredType::Object => {
            if value.is_some() {
                Ok(EstimatePath::Recurse)
            } else {
                Ok(EstimatePath::ReferenceSlot)
            }
        }
        DeclaredType::Composite(name) => {
            if value.is_some() {
                Ok(EstimatePath::Recurse)
            } else {
                Ok(EstimatePath::ClassOnly(name.clone()))
            }
        }
        DeclaredType::Unknown(name) => Err(Error::UnsupportedFieldType(name.clone())),
        // Handled above; kept for exhaustiveness.
        DeclaredType::Str => Ok(EstimatePath::Str),
        DeclaredType::Array(_) => Ok(EstimatePath::Array),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArrayElement, BigIntValue};

    #[test]
    fn test_string_wins_first() {
        assert_eq!(classify(&DeclaredType::Str, None).unwrap(), EstimatePath::Str);
        assert_eq!(
            classify(&DeclaredType::Str, Some(&Value::string("x"))).unwrap(),
            EstimatePath::Str
        );
    }

    #[test]
    fn test_runtime_collection_beats_declaration() {
        let list = Value::List(vec![Value::I4(1)]);
        assert_eq!(
            classify(&DeclaredType::Object, Some(&list)).unwrap(),
            EstimatePath::List
        );

        let map = Value::Map(vec![(Value::I4(1), Value::I4(2))]);
        assert_eq!(
            classify(&DeclaredType::Composite("T".into()), Some(&map)).unwrap(),
            EstimatePath::Map
        );
    }

    #[test]
    fn test_runtime_big_number() {
        let big = Value::BigInt(BigIntValue::new(1, vec![7]));
        assert_eq!(
            classify(&DeclaredType::Object, Some(&big)).unwrap(),
            EstimatePath::Boxed
        );
    }

    #[test]
    fn test_array_path() {
        let declared = DeclaredType::Array(ArrayElement::Primitive(PrimitiveKind::I4));
        assert_eq!(classify(&declared, None).unwrap(), EstimatePath::Array);
    }

    #[test]
    fn test_primitive_path() {
        assert_eq!(
            classify(&DeclaredType::Primitive(PrimitiveKind::R8), None).unwrap(),
            EstimatePath::Primitive(PrimitiveKind::R8)
        );
    }

    #[test]
    fn test_composite_fallback_on_absent_value() {
        assert_eq!(
            classify(&DeclaredType::Composite("Engineer".into()), None).unwrap(),
            EstimatePath::ClassOnly("Engineer".to_string())
        );
        assert_eq!(
            classify(&DeclaredType::Object, None).unwrap(),
            EstimatePath::ReferenceSlot
        );
    }

    #[test]
    fn test_unknown_type_is_fatal() {
        match classify(&DeclaredType::Unknown("vector3".into()), None) {
            Err(Error::UnsupportedFieldType(name)) => assert_eq!(name, "vector3"),
            other => panic!("expected UnsupportedFieldType, got {other:?}"),
        }
    }
}
