//! The probed-value model: dynamic values paired with their declared shapes.
//!
//! A [`Value`] is a runtime value as the estimator sees it. Object values
//! carry named field slots holding `Option<Value>`: absence (`None`) is a
//! first-class state, distinct from a present value of size zero. A field
//! slot that does not exist at all models a field that could not be read.

use crate::model::{ArrayElement, PrimitiveKind};

/// A runtime value in the probed-value model.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean scalar
    Boolean(bool),
    /// 8-bit signed integer scalar
    I1(i8),
    /// 16-bit signed integer scalar
    I2(i16),
    /// Character scalar
    Char(char),
    /// 32-bit signed integer scalar
    I4(i32),
    /// 32-bit floating point scalar
    R4(f32),
    /// 64-bit floating point scalar
    R8(f64),
    /// 64-bit signed integer scalar
    I8(i64),
    /// Character string
    Str(String),
    /// Array-shaped value (element kind and length)
    Array(ArrayValue),
    /// Ordered-list collection
    List(Vec<Value>),
    /// Hashed-map collection
    Map(Vec<(Value, Value)>),
    /// Arbitrary-precision integer
    BigInt(BigIntValue),
    /// Arbitrary-precision decimal
    BigDecimal(BigDecimalValue),
    /// Composite object with named field slots
    Object(ObjectValue),
}

impl Value {
    /// Create a string value.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    /// The primitive kind when this value is a scalar (the boxed-scalar
    /// detection used for sampled collection elements).
    #[must_use]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Value::Boolean(_) => Some(PrimitiveKind::Boolean),
            Value::I1(_) => Some(PrimitiveKind::I1),
            Value::I2(_) => Some(PrimitiveKind::I2),
            Value::Char(_) => Some(PrimitiveKind::Char),
            Value::I4(_) => Some(PrimitiveKind::I4),
            Value::R4(_) => Some(PrimitiveKind::R4),
            Value::R8(_) => Some(PrimitiveKind::R8),
            Value::I8(_) => Some(PrimitiveKind::I8),
            _ => None,
        }
    }
}

/// An array-shaped value: the declared element kind and the element count.
///
/// Element payloads are not stored; the model charges arrays from their
/// declared element kind alone (homogeneous-element assumption).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayValue {
    /// Declared element kind.
    pub element: ArrayElement,
    /// Number of elements.
    pub len: u64,
}

impl ArrayValue {
    /// Create an array value.
    #[must_use]
    pub fn new(element: ArrayElement, len: u64) -> Self {
        ArrayValue { element, len }
    }
}

/// An arbitrary-precision integer: a sign and a magnitude word array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigIntValue {
    /// Sign of the value (-1, 0 or 1).
    pub signum: i8,
    /// Magnitude as 32-bit words, most significant first.
    pub magnitude: Vec<u32>,
}

impl BigIntValue {
    /// Create a big integer from its sign and magnitude words.
    #[must_use]
    pub fn new(signum: i8, magnitude: Vec<u32>) -> Self {
        BigIntValue { signum, magnitude }
    }
}

/// An arbitrary-precision decimal: an unscaled big integer, a scale and the
/// canonical text form the model charges for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigDecimalValue {
    /// Unscaled value.
    pub unscaled: BigIntValue,
    /// Decimal scale.
    pub scale: i64,
    /// Canonical string form.
    pub text: String,
}

impl BigDecimalValue {
    /// Create a big decimal from its parts.
    #[must_use]
    pub fn new(unscaled: BigIntValue, scale: i64, text: impl Into<String>) -> Self {
        BigDecimalValue {
            unscaled,
            scale,
            text: text.into(),
        }
    }
}

/// A composite object: its runtime type name and named field slots.
///
/// Slots are ordered but looked up by name. A slot holding `None` is an
/// absent (null) field value; a field with no slot at all is unreadable.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    type_name: String,
    slots: Vec<(String, Option<Value>)>,
}

impl ObjectValue {
    /// Create an object value of the named runtime type with no slots.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        ObjectValue {
            type_name: type_name.into(),
            slots: Vec::new(),
        }
    }

    /// The runtime type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Add a present field value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.slots.push((name.into(), Some(value)));
        self
    }

    /// Add an absent (null) field value.
    #[must_use]
    pub fn with_absent(mut self, name: impl Into<String>) -> Self {
        self.slots.push((name.into(), None));
        self
    }

    /// Read a field slot. The outer `None` means the slot does not exist
    /// (the field is unreadable); `Some(None)` is a readable absent value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&Value>> {
        self.slots
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, value)| value.as_ref())
    }
}

impl From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Value::Object(value)
    }
}

impl From<ArrayValue> for Value {
    fn from(value: ArrayValue) -> Self {
        Value::Array(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I4(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I8(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::R8(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_kind_detection() {
        assert_eq!(
            Value::Boolean(true).primitive_kind(),
            Some(PrimitiveKind::Boolean)
        );
        assert_eq!(Value::I4(42).primitive_kind(), Some(PrimitiveKind::I4));
        assert_eq!(Value::R8(1.5).primitive_kind(), Some(PrimitiveKind::R8));
        assert_eq!(Value::string("x").primitive_kind(), None);
        assert_eq!(Value::List(Vec::new()).primitive_kind(), None);
    }

    #[test]
    fn test_object_slots() {
        let object = ObjectValue::new("Sample")
            .with_field("present", Value::I4(1))
            .with_absent("absent");

        assert_eq!(object.type_name(), "Sample");
        assert_eq!(object.get("present"), Some(Some(&Value::I4(1))));
        assert_eq!(object.get("absent"), Some(None));
        // No slot at all: the field is unreadable, not merely absent.
        assert_eq!(object.get("missing"), None);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(7i32), Value::I4(7));
        assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
        assert!(matches!(
            Value::from(ObjectValue::new("T")),
            Value::Object(_)
        ));
    }
}
