use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this
/// library can potentially return.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::NullArgument`] - Required top-level input was absent
///
/// ## Classification Errors
/// - [`Error::UnsupportedFieldType`] - Declared type not recognized by the
///   primitive switch
/// - [`Error::UnresolvedType`] - Declared type name has no registered
///   descriptor
///
/// ## Estimation Errors
/// - [`Error::FieldAccess`] - A declared field slot could not be read
/// - [`Error::DepthExceeded`] - Recursion guard tripped
///
/// [`Error::NullArgument`], [`Error::UnsupportedFieldType`] and
/// [`Error::DepthExceeded`] are always fatal. [`Error::UnresolvedType`] and
/// [`Error::FieldAccess`] are subject to the instance estimator's
/// field-error policy: under `Skip` the field contributes zero and the
/// estimate continues, under `Propagate` they abort it. Class-only
/// estimation always propagates.
#[derive(Error, Debug)]
pub enum Error {
    /// A required top-level input was absent.
    ///
    /// Absent *field* values are tolerated and modeled; an absent top-level
    /// value or type is not. The payload names the missing argument.
    #[error("Required argument was absent - {0}")]
    NullArgument(&'static str),

    /// A field's declared type was not recognized by the primitive switch.
    ///
    /// Carries the offending declared-type name. Always fatal, never
    /// subject to the field-error policy.
    #[error("Field type ({0}) is not recognized by the size model")]
    UnsupportedFieldType(String),

    /// A declared type name has no registered descriptor.
    ///
    /// Propagated by class-only estimation, which has no fallback left once
    /// resolution fails; skippable inside instance estimation, which can
    /// still produce a best-effort result from the remaining fields.
    #[error("No descriptor registered for type - {0}")]
    UnresolvedType(String),

    /// A declared field slot could not be read from the probed value.
    #[error("Field '{field}' of '{type_name}' could not be read")]
    FieldAccess {
        /// Name of the owning type.
        type_name: String,
        /// Name of the unreadable field.
        field: String,
    },

    /// The maximum recursion depth was reached.
    ///
    /// The reachable object graph is deeper than the configured guard, or
    /// the registered type declarations are self-referential. The payload
    /// is the depth limit that was hit.
    #[error("Reached the maximum recursion depth allowed - {0}")]
    DepthExceeded(usize),
}
