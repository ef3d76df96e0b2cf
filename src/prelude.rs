//! # footprint Prelude
//!
//! Convenient re-exports of the most commonly used types. Import this
//! module to get quick access to everything needed for registering types
//! and estimating footprints.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all footprint operations
pub use crate::Error;

/// The result type used throughout footprint
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The model-based footprint estimator
pub use crate::estimate::{Estimator, EstimatorOptions, OnFieldError};

// ================================================================================================
// Data Model
// ================================================================================================

/// Size table and layout constants
pub use crate::model::{
    PrimitiveKind, StringEncoding, ARRAY_BYTES, COUNTER_BYTES, OBJECT_BYTES,
};

/// Observed values
pub use crate::model::{ArrayValue, BigDecimalValue, BigIntValue, ObjectValue, Value};

/// Type registration
pub use crate::model::{
    ArrayElement, DeclaredType, FieldDescriptor, TypeDescriptor, TypeDescriptorBuilder,
    TypeRegistry,
};
