//! Data model for footprint estimation.
//!
//! This module provides everything the estimators operate on: the fixed
//! size table, the dynamic probed-value representation, and the registered
//! field-descriptor tables that replace reflective field enumeration.
//!
//! # Key Components
//!
//! - [`PrimitiveKind`]: the eight scalar kinds and their modeled byte widths
//! - [`Value`]: a runtime value as the estimator sees it, including arrays,
//!   the two builtin collection shapes, big numbers and composite objects
//! - [`TypeDescriptor`] / [`FieldDescriptor`]: the per-type registered field
//!   tables, built once via [`TypeDescriptorBuilder`]
//! - [`TypeRegistry`]: concurrent name-to-descriptor lookup
//! - [`StringEncoding`]: explicit character-width configuration for strings
//!
//! # Examples
//!
//! ```rust
//! use footprint::model::{DeclaredType, PrimitiveKind, TypeDescriptor, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! registry.register(
//!     TypeDescriptor::builder("Point")
//!         .field("x", DeclaredType::Primitive(PrimitiveKind::R8))
//!         .field("y", DeclaredType::Primitive(PrimitiveKind::R8))
//!         .build(),
//! );
//! assert!(registry.contains("Point"));
//! ```

mod descriptor;
mod primitives;
mod registry;
mod value;

pub use descriptor::{
    ArrayElement, DeclaredType, FieldDescriptor, TypeDescriptor, TypeDescriptorBuilder,
};
pub use primitives::{
    PrimitiveKind, StringEncoding, ARRAY_BYTES, COUNTER_BYTES, OBJECT_BYTES,
};
pub use registry::TypeRegistry;
pub use value::{ArrayValue, BigDecimalValue, BigIntValue, ObjectValue, Value};
