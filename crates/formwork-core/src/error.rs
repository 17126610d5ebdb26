// crates/formwork-core/src/error.rs
// ============================================================================
// Module: Engine Error Definitions
// Description: Structured failures behind the fail-soft public surface.
// Purpose: Let the internal evaluation layer report why a derivation
//          failed before the public layer degrades it to a default.
// Dependencies: netblock, thiserror
// ============================================================================

//! ## Overview
//! Every public engine entry point is fail-soft: it degrades internal
//! failures to a safe default (`false`, empty string) instead of raising.
//! The internal layer underneath is `Result`-based and reports these
//! structured reasons, which tests and diagnostic callers can observe via
//! [`crate::runtime::compute::try_compute_value`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use netblock::CidrError;
use thiserror::Error;

// ============================================================================
// SECTION: Engine Errors
// ============================================================================

/// Errors reported by the internal evaluation layer.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Expression matched no recognized compute form.
    #[error("compute expression not recognized: {expression:?}")]
    UnknownExpression {
        /// The unrecognized expression text.
        expression: String,
    },
    /// A referenced operand field held no usable value.
    #[error("operand field is unset: {field}")]
    UnsetOperand {
        /// Name of the unset field.
        field: String,
    },
    /// An operand could not be coerced to the number the form requires.
    #[error("operand is not numeric: {text:?}")]
    NotNumeric {
        /// The rejected operand text.
        text: String,
    },
    /// Address arithmetic rejected its input.
    #[error(transparent)]
    Cidr(#[from] CidrError),
}

/// Convenient Result type for internal engine evaluation.
pub type EngineResult<T = ()> = Result<T, EngineError>;
