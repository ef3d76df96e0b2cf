//! Integration tests for error handling, the field-error policy and the
//! type-only entry point.

use std::sync::Arc;

use footprint::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn estimator_with(
    registry: Arc<TypeRegistry>,
    on_field_error: OnFieldError,
) -> Estimator {
    Estimator::with_options(
        registry,
        EstimatorOptions {
            on_field_error,
            ..EstimatorOptions::default()
        },
    )
}

/// An absent top-level value is a fatal input error, unlike absent field
/// values.
#[test]
fn test_null_value_argument() {
    let estimator = Estimator::new(Arc::new(TypeRegistry::new()));

    match estimator.estimate_size(None) {
        Err(Error::NullArgument(argument)) => assert_eq!(argument, "value"),
        other => panic!("expected NullArgument, got {other:?}"),
    }
}

/// An absent top-level type is equally fatal for the type-only entry point.
#[test]
fn test_null_type_argument() {
    let estimator = Estimator::new(Arc::new(TypeRegistry::new()));

    match estimator.estimate_size_from_type(None) {
        Err(Error::NullArgument(argument)) => assert_eq!(argument, "type"),
        other => panic!("expected NullArgument, got {other:?}"),
    }
}

/// An unrecognized declared type fails with UnsupportedFieldType naming the
/// type, regardless of the field-error policy.
#[test]
fn test_unsupported_field_type_is_always_fatal() {
    let registry = Arc::new(TypeRegistry::new());
    registry.register(
        TypeDescriptor::builder("Odd")
            .field("weird", DeclaredType::Unknown("vector3".into()))
            .build(),
    );
    let estimator = estimator_with(registry, OnFieldError::Skip);

    let value = Value::from(ObjectValue::new("Odd").with_absent("weird"));
    match estimator.estimate_size(Some(&value)) {
        Err(Error::UnsupportedFieldType(name)) => assert_eq!(name, "vector3"),
        other => panic!("expected UnsupportedFieldType, got {other:?}"),
    }
}

/// Type-only estimation propagates resolution failures.
#[test]
fn test_type_only_unresolved_type() {
    let estimator = Estimator::new(Arc::new(TypeRegistry::new()));

    match estimator.estimate_size_from_type(Some("Missing")) {
        Err(Error::UnresolvedType(name)) => assert_eq!(name, "Missing"),
        other => panic!("expected UnresolvedType, got {other:?}"),
    }
}

/// Class-only estimation charges fixed floors for everything
/// length-dependent.
#[test]
fn test_type_only_floors() -> Result<()> {
    let registry = Arc::new(TypeRegistry::new());
    registry.register(
        TypeDescriptor::builder("Ledger")
            .field("entries", DeclaredType::List)
            .field("index", DeclaredType::Map)
            .field("total", DeclaredType::BigInt)
            .field("rate", DeclaredType::BigDecimal)
            .field(
                "tags",
                DeclaredType::Array(ArrayElement::Str),
            )
            .build(),
    );
    let estimator = Estimator::new(registry);

    // 8 + 24 (list floor) + 24 (map floor) + 40 (bigint floor)
    //   + 64 (bigdecimal floor) + 12 (array header only)
    assert_eq!(estimator.estimate_size_from_type(Some("Ledger"))?, 172);

    Ok(())
}

/// Under the default Skip policy an unreadable field is charged zero and
/// the estimate continues; under Propagate it aborts.
#[test]
fn test_unreadable_field_policy() -> Result<()> {
    init_logging();
    let registry = Arc::new(TypeRegistry::new());
    registry.register(
        TypeDescriptor::builder("Partial")
            .field("visible", DeclaredType::Primitive(PrimitiveKind::I4))
            .private_field("hidden", DeclaredType::Primitive(PrimitiveKind::I8))
            .build(),
    );

    // The "hidden" slot does not exist on the observed value at all.
    let value = Value::from(ObjectValue::new("Partial").with_field("visible", Value::I4(1)));

    let skipping = estimator_with(registry.clone(), OnFieldError::Skip);
    assert_eq!(skipping.estimate_size(Some(&value))?, 8 + 4);

    let propagating = estimator_with(registry, OnFieldError::Propagate);
    match propagating.estimate_size(Some(&value)) {
        Err(Error::FieldAccess { type_name, field }) => {
            assert_eq!(type_name, "Partial");
            assert_eq!(field, "hidden");
        }
        other => panic!("expected FieldAccess, got {other:?}"),
    }

    Ok(())
}

/// An absent composite field whose declared type has no registration is
/// skipped under the default policy and fatal under Propagate.
#[test]
fn test_unresolved_fallback_policy() -> Result<()> {
    init_logging();
    let registry = Arc::new(TypeRegistry::new());
    registry.register(
        TypeDescriptor::builder("Holder")
            .field("count", DeclaredType::Primitive(PrimitiveKind::I4))
            .field("extra", DeclaredType::Composite("Unregistered".into()))
            .build(),
    );

    let value = Value::from(
        ObjectValue::new("Holder")
            .with_field("count", Value::I4(1))
            .with_absent("extra"),
    );

    let skipping = estimator_with(registry.clone(), OnFieldError::Skip);
    assert_eq!(skipping.estimate_size(Some(&value))?, 8 + 4);

    let propagating = estimator_with(registry, OnFieldError::Propagate);
    match propagating.estimate_size(Some(&value)) {
        Err(Error::UnresolvedType(name)) => assert_eq!(name, "Unregistered"),
        other => panic!("expected UnresolvedType, got {other:?}"),
    }

    Ok(())
}

/// A value whose own runtime type has no registration cannot be
/// estimated at all.
#[test]
fn test_unregistered_top_level_type() {
    let estimator = Estimator::new(Arc::new(TypeRegistry::new()));

    let value = Value::from(ObjectValue::new("Nowhere"));
    match estimator.estimate_size(Some(&value)) {
        Err(Error::UnresolvedType(name)) => assert_eq!(name, "Nowhere"),
        other => panic!("expected UnresolvedType, got {other:?}"),
    }
}

/// Self-referential declarations trip the depth guard instead of
/// exhausting the stack.
#[test]
fn test_cyclic_declarations_hit_depth_guard() {
    let registry = Arc::new(TypeRegistry::new());
    registry.register(
        TypeDescriptor::builder("Node")
            .field("next", DeclaredType::Composite("Node".into()))
            .build(),
    );
    let estimator = Estimator::new(registry);

    match estimator.estimate_size_from_type(Some("Node")) {
        Err(Error::DepthExceeded(limit)) => assert_eq!(limit, 128),
        other => panic!("expected DepthExceeded, got {other:?}"),
    }
}

/// Deep live object graphs hit the same guard, and the guard is fatal even
/// under the Skip policy.
#[test]
fn test_deep_instance_graph_hits_depth_guard() {
    let registry = Arc::new(TypeRegistry::new());
    registry.register(
        TypeDescriptor::builder("Chain")
            .field("inner", DeclaredType::Object)
            .build(),
    );
    let estimator = Estimator::with_options(
        registry,
        EstimatorOptions {
            max_depth: 4,
            ..EstimatorOptions::default()
        },
    );

    let mut value = ObjectValue::new("Chain").with_absent("inner");
    for _ in 0..8 {
        value = ObjectValue::new("Chain").with_field("inner", value.into());
    }

    match estimator.estimate_size(Some(&Value::from(value))) {
        Err(Error::DepthExceeded(limit)) => assert_eq!(limit, 4),
        other => panic!("expected DepthExceeded, got {other:?}"),
    }
}

/// A shallow graph passes the same guard untouched: the guard is a safe
/// strengthening, not a behavior change for acyclic inputs.
#[test]
fn test_shallow_graph_passes_depth_guard() -> Result<()> {
    let registry = Arc::new(TypeRegistry::new());
    registry.register(
        TypeDescriptor::builder("Chain")
            .field("inner", DeclaredType::Object)
            .build(),
    );
    let estimator = Estimator::with_options(
        registry,
        EstimatorOptions {
            max_depth: 4,
            ..EstimatorOptions::default()
        },
    );

    let leaf = ObjectValue::new("Chain").with_absent("inner");
    let root = ObjectValue::new("Chain").with_field("inner", leaf.into());
    // Two headers plus one absent reference slot and one present recursion.
    assert_eq!(estimator.estimate_size(Some(&root.into()))?, 8 + (8 + 8));

    Ok(())
}
