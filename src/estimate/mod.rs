//! Recursive, model-based size estimation.
//!
//! The estimator walks a probed value's declared structure and sums
//! per-field byte costs using the fixed layout model of
//! [`crate::model`]. It produces a deterministic approximation, never a
//! measured allocation: allocator overhead, alignment padding and collector
//! metadata are out of scope.
//!
//! # Key Components
//!
//! - [`Estimator`]: the public entry points [`Estimator::estimate_size`]
//!   (live value) and [`Estimator::estimate_size_from_type`] (declarations
//!   only)
//! - [`EstimatorOptions`]: string encoding, recursion guard and the
//!   field-error policy
//! - [`EstimatePath`]: the classification a field resolves to
//!
//! # Modeling choices
//!
//! Several costs are deliberate approximations and are preserved as such:
//! boxed-scalar arrays are charged at the unboxed element width, collections
//! are costed from a single sampled element (homogeneous-element
//! assumption), and an absent array field charges nothing while an absent
//! string field still charges its reference slot.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use footprint::prelude::*;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! registry.register(
//!     TypeDescriptor::builder("Engineer")
//!         .private_field("name", DeclaredType::Str)
//!         .private_field("age", DeclaredType::Primitive(PrimitiveKind::I4))
//!         .build(),
//! );
//!
//! let engineer = Value::from(
//!     ObjectValue::new("Engineer")
//!         .with_field("name", Value::string("Ann"))
//!         .with_field("age", Value::I4(30)),
//! );
//!
//! let estimator = Estimator::new(registry);
//! assert_eq!(estimator.estimate_size(Some(&engineer))?, 23);
//! # Ok::<(), footprint::Error>(())
//! ```

mod array;
mod class_only;
mod classifier;
mod collection;
mod instance;

pub use classifier::EstimatePath;

use std::sync::Arc;

use crate::{
    model::{StringEncoding, TypeRegistry, Value},
    Error, Result,
};

/// Field-failure policy for instance estimation.
///
/// Instance estimation is best effort: with a live value available, one
/// unreadable or unresolvable field should not abort the whole estimate.
/// Class-only estimation has no such fallback and always propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnFieldError {
    /// Log the failure, charge zero for the field and continue.
    #[default]
    Skip,
    /// Abort the estimate with the field's error.
    Propagate,
}

/// Tunables for an [`Estimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorOptions {
    /// Modeled character width of string storage.
    pub encoding: StringEncoding,
    /// Maximum recursion depth before failing with
    /// [`Error::DepthExceeded`]. Recursion is bounded only by the reachable
    /// graph otherwise; cyclic declarations would never terminate.
    pub max_depth: usize,
    /// Field-failure policy for instance estimation.
    pub on_field_error: OnFieldError,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        EstimatorOptions {
            encoding: StringEncoding::default(),
            max_depth: 128,
            on_field_error: OnFieldError::default(),
        }
    }
}

/// Model-based footprint estimator over a registry of type descriptors.
///
/// Stateless across calls: each estimation is independent, and concurrent
/// estimations on disjoint inputs never interact.
pub struct Estimator {
    registry: Arc<TypeRegistry>,
    options: EstimatorOptions,
}

impl Estimator {
    /// Create an estimator with default options.
    #[must_use]
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self::with_options(registry, EstimatorOptions::default())
    }

    /// Create an estimator with explicit options.
    #[must_use]
    pub fn with_options(registry: Arc<TypeRegistry>, options: EstimatorOptions) -> Self {
        Estimator { registry, options }
    }

    /// Estimate the footprint of a live value in bytes.
    ///
    /// List- and map-shaped values delegate wholly to the collection
    /// estimators. Objects walk the fields their runtime type declares
    /// directly. Other shapes (strings, arrays, big numbers, bare scalars)
    /// are costed by their natural path.
    ///
    /// # Errors
    /// Returns [`Error::NullArgument`] when `value` is `None`, and the
    /// classification and depth errors described on [`Error`]. Under the
    /// default [`OnFieldError::Skip`] policy, unreadable fields and
    /// unresolvable fallback types are logged and charged zero instead of
    /// failing.
    pub fn estimate_size(&self, value: Option<&Value>) -> Result<u64> {
        let value = value.ok_or(Error::NullArgument("value"))?;
        self.instance_size(value, 0)
    }

    /// Estimate the footprint from a type's field declarations alone.
    ///
    /// Used when no instance exists. Element counts are unknowable without
    /// an instance, so arrays charge their header only and collections
    /// their empty floor.
    ///
    /// # Errors
    /// Returns [`Error::NullArgument`] when `type_name` is `None`. All
    /// resolution failures propagate: a pure type-based estimate has no
    /// fallback left once resolution fails.
    pub fn estimate_size_from_type(&self, type_name: Option<&str>) -> Result<u64> {
        let type_name = type_name.ok_or(Error::NullArgument("type"))?;
        self.class_only_size(type_name, 0)
    }

    pub(crate) fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub(crate) fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    pub(crate) fn char_width(&self) -> u64 {
        self.options.encoding.char_width()
    }

    pub(crate) fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(Error::DepthExceeded(self.options.max_depth));
        }
        Ok(())
    }
}
