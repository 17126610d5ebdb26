// crates/formwork-core/src/lib.rs
// ============================================================================
// Module: Formwork Root
// Description: Public API surface for the configuration evaluation engine.
// Purpose: Wire together the data model, evaluation runtime, and errors.
// Dependencies: crate::{core, error, runtime}, netblock
// ============================================================================

//! ## Overview
//! Formwork is a pure, fail-soft evaluation engine for declarative
//! configuration forms: condition expressions decide field visibility,
//! ordered rule chains validate values, and compute expressions derive
//! read-only output values (including IPv4 subnet derivation via the
//! [`netblock`] crate). The engine owns no state, performs no I/O, and
//! never panics: every public entry point degrades internal failures to a
//! safe default.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod core;
pub mod error;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::schema::FieldKind;
pub use crate::core::schema::FieldSpec;
pub use crate::core::schema::GroupSpec;
pub use crate::core::schema::slider_bounds;
pub use crate::core::value::Config;
pub use crate::core::value::Value;
pub use error::EngineError;
pub use error::EngineResult;
pub use netblock::Cidr;
pub use netblock::CidrError;
pub use runtime::compute::compute_value;
pub use runtime::compute::try_compute_value;
pub use runtime::condition::evaluate_condition;
pub use runtime::validate::validate_field;
