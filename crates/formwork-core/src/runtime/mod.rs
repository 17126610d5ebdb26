// crates/formwork-core/src/runtime/mod.rs
// ============================================================================
// Module: Evaluation Runtime
// Description: Condition, validation, and compute evaluators.
// Purpose: House the pure, stateless evaluation passes the form layer
//          re-runs against the config map on every change.
// Dependencies: crate::core, crate::error, log, netblock
// ============================================================================

//! ## Overview
//! Three stateless evaluators: conditions decide visibility, validation
//! chains judge one field's value, and compute expressions derive output
//! values. All three are pure functions of the expression/rules and the
//! config map; none retains state across calls or performs I/O.

pub mod compute;
pub mod condition;
pub mod validate;

pub use compute::compute_value;
pub use compute::try_compute_value;
pub use condition::evaluate_condition;
pub use validate::validate_field;
