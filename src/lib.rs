// Copyright 2026 the footprint authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # footprint
//!
//! Deterministic, model-based in-memory footprint estimation for dynamically
//! described values.
//!
//! Given a live value (or, when no instance exists, only a registered type
//! descriptor), `footprint` walks the value's declared structure and sums
//! per-field byte costs using a fixed layout model of how a managed runtime
//! stores primitives, strings, arrays, boxed scalars, two builtin collection
//! shapes and composite objects. The result is a diagnostic approximation:
//! no allocator instrumentation, no alignment or collector metadata, same
//! answer for the same input every time.
//!
//! ## Features
//!
//! - **No reflection facility** - estimable types are registered once as
//!   explicit field-descriptor tables, enumerated dynamically at estimation
//!   time
//! - **Best-effort instance estimation** - one unreadable field is logged
//!   and skipped instead of aborting the estimate (configurable)
//! - **Type-only estimation** - a footprint bound computed from field
//!   declarations alone, with no instance to inspect
//! - **Bounded recursion** - a depth guard turns cyclic object graphs into
//!   an error instead of stack exhaustion
//! - **Thread safe** - the registry is a concurrent map; parallel
//!   estimations never interact
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use footprint::prelude::*;
//!
//! // One-time registration of the estimable type's field table.
//! let registry = Arc::new(TypeRegistry::new());
//! registry.register(
//!     TypeDescriptor::builder("Engineer")
//!         .private_field("name", DeclaredType::Str)
//!         .private_field("age", DeclaredType::Primitive(PrimitiveKind::I4))
//!         .build(),
//! );
//!
//! // A probed value of that type.
//! let engineer = Value::from(
//!     ObjectValue::new("Engineer")
//!         .with_field("name", Value::string("Ann"))
//!         .with_field("age", Value::I4(30)),
//! );
//!
//! // 8 (header) + 8 + 3 (string, compact encoding) + 4 (int) = 23 bytes.
//! let estimator = Estimator::new(registry);
//! assert_eq!(estimator.estimate_size(Some(&engineer))?, 23);
//! # Ok::<(), footprint::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`] - the size table, the probed-value representation and the
//!   registered type descriptors
//! - [`estimate`] - the recursive estimators and their configuration
//! - [`prelude`] - convenient re-exports of the common types
//! - [`Error`] and [`Result`] - crate-wide error handling

pub mod estimate;
pub mod model;
pub mod prelude;

mod error;

pub use error::Error;
pub use estimate::{Estimator, EstimatorOptions, OnFieldError};

/// The result type used throughout this library.
pub type Result<T> = std::result::Result<T, Error>;
