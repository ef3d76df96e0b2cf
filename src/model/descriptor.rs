//! Field and type descriptors: the registered stand-in for reflective field
//! enumeration.
//!
//! Instead of reading field lists from a runtime reflection facility, every
//! estimable composite type is registered once as a [`TypeDescriptor`]: an
//! ordered table of the fields the type declares *directly*. Inherited state
//! is never part of a descriptor. [`TypeDescriptorBuilder`] mirrors the
//! one-time registration step.

use crate::model::PrimitiveKind;

/// Declared element kind of an array-shaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayElement {
    /// Unboxed scalars, charged at the size-table width
    Primitive(PrimitiveKind),
    /// Boxed scalars, charged at the unboxed width (a deliberate
    /// approximation of the model, not per-element reference cost)
    Boxed(PrimitiveKind),
    /// Strings, each slot charged at the reference-slot cost
    Str,
    /// Universal references, each slot charged at the reference-slot cost
    Object,
    /// A registered composite type; one class-only estimate models every
    /// slot (homogeneous-element assumption)
    Composite(String),
}

/// Declared static type of a field, as known from the owning type.
///
/// This is the declaration-site annotation, distinct from the runtime shape
/// of whatever value currently occupies the field slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// Unboxed primitive scalar
    Primitive(PrimitiveKind),
    /// Boxed scalar wrapper
    Boxed(PrimitiveKind),
    /// Character string
    Str,
    /// Array of the given element kind
    Array(ArrayElement),
    /// Ordered-list collection shape
    List,
    /// Hashed-map collection shape
    Map,
    /// Arbitrary-precision integer
    BigInt,
    /// Arbitrary-precision decimal
    BigDecimal,
    /// The universal reference type; an absent value charges exactly one
    /// reference slot, a present value is estimated by its runtime type
    Object,
    /// A user-defined composite type, resolved through the registry
    Composite(String),
    /// A declared-type name no shape matched. Reaching it during estimation
    /// is fatal and reports the offending name.
    Unknown(String),
}

/// One directly declared field of a registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, used as the slot key on probed object values.
    pub name: String,
    /// Declared static type of the field.
    pub declared: DeclaredType,
    /// Whether reading the field requires forcing accessibility. Kept for
    /// traceability; the computed estimate does not depend on it.
    pub force_access: bool,
}

/// Ordered field table of one registered composite type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Start building a descriptor for the named type.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The registered type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directly declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Builder for the one-time registration of a type's field table.
///
/// ```rust
/// use footprint::model::{DeclaredType, PrimitiveKind, TypeDescriptor};
///
/// let engineer = TypeDescriptor::builder("Engineer")
///     .private_field("name", DeclaredType::Str)
///     .private_field("age", DeclaredType::Primitive(PrimitiveKind::I4))
///     .build();
/// assert_eq!(engineer.fields().len(), 2);
/// ```
pub struct TypeDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptorBuilder {
    /// Append a publicly readable field.
    #[must_use]
    pub fn field(self, name: impl Into<String>, declared: DeclaredType) -> Self {
        self.push(name.into(), declared, false)
    }

    /// Append a field whose read requires forced accessibility.
    #[must_use]
    pub fn private_field(self, name: impl Into<String>, declared: DeclaredType) -> Self {
        self.push(name.into(), declared, true)
    }

    fn push(mut self, name: String, declared: DeclaredType, force_access: bool) -> Self {
        self.fields.push(FieldDescriptor {
            name,
            declared,
            force_access,
        });
        self
    }

    /// Finish the descriptor.
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            fields: self.fields,
        }
    }
}
