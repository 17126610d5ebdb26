// crates/netblock/src/error.rs
// ============================================================================
// Module: Netblock Error Definitions
// Description: Structured diagnostics for CIDR parsing and derivation.
// Purpose: Provide stable, serializable failure reasons for address math.
// Dependencies: serde::{Serialize, Deserialize}, std::fmt
// ============================================================================

//! ## Overview
//! Centralizes the address-arithmetic errors, their user-facing messaging,
//! and serialization guarantees so callers that need structured reasons
//! (rather than the fail-closed boolean wrappers) can match on them.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Errors that can occur while parsing or deriving IPv4 blocks
///
/// # Invariants
/// - None. Variants capture structured parse and derivation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CidrError {
    /// Input did not match the `A.B.C.D/prefix` shape
    InvalidCidr {
        /// The rejected input text.
        input: String,
    },

    /// Input did not match the dotted-quad `A.B.C.D` shape
    InvalidAddress {
        /// The rejected input text.
        input: String,
    },

    /// An address octet fell outside `0..=255`
    OctetOutOfRange {
        /// The rejected octet text.
        octet: String,
    },

    /// A prefix length fell outside `0..=32`
    PrefixOutOfRange {
        /// The rejected prefix value.
        prefix: u32,
    },

    /// Subnet derivation would push the prefix past 32 bits
    PrefixTooLong {
        /// Prefix length of the parent block.
        parent_prefix: u8,
        /// Additional bits requested for the derived block.
        extra_bits: u32,
    },
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for CidrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCidr {
                input,
            } => {
                write!(f, "invalid CIDR block: {input:?}")
            }
            Self::InvalidAddress {
                input,
            } => {
                write!(f, "invalid IPv4 address: {input:?}")
            }
            Self::OctetOutOfRange {
                octet,
            } => {
                write!(f, "address octet out of range 0..=255: {octet:?}")
            }
            Self::PrefixOutOfRange {
                prefix,
            } => {
                write!(f, "prefix length out of range 0..=32: {prefix}")
            }
            Self::PrefixTooLong {
                parent_prefix,
                extra_bits,
            } => {
                write!(
                    f,
                    "derived prefix exceeds 32 bits: /{parent_prefix} + {extra_bits} extra bits"
                )
            }
        }
    }
}

// ============================================================================
// SECTION: Standard Trait Implementations
// ============================================================================

impl std::error::Error for CidrError {}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for address-arithmetic operations
pub type CidrResult<T = ()> = Result<T, CidrError>;
