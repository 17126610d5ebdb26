// crates/formwork-core/src/core/mod.rs
// ============================================================================
// Module: Core Data Model
// Description: Values, configuration map, and schema descriptors.
// Purpose: Define the shapes the evaluation runtime operates over.
// Dependencies: crate::runtime, serde
// ============================================================================

//! ## Overview
//! The core module holds the data model: dynamically typed [`Value`]s with
//! their documented coercions, the caller-owned [`Config`] map, and the
//! immutable schema descriptors ([`FieldSpec`], [`GroupSpec`]) supplied by
//! the external schema source.

pub mod schema;
pub mod value;

pub use schema::FieldKind;
pub use schema::FieldSpec;
pub use schema::GroupSpec;
pub use schema::slider_bounds;
pub use value::Config;
pub use value::Value;
