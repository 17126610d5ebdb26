// crates/netblock/src/lib.rs
// ============================================================================
// Module: Netblock Root
// Description: Public API surface for IPv4 block arithmetic.
// Purpose: Wire together the block type, parsing, and fail-closed wrappers.
// Dependencies: crate::{cidr, error}
// ============================================================================

//! ## Overview
//! This crate provides the IPv4 address math behind declarative network
//! configuration: strict CIDR parsing with canonical re-serialization,
//! Nth-subnet derivation, containment, and overlap checks. The typed API
//! returns structured [`CidrError`] values; the string-level wrappers fail
//! closed (unparseable input yields `false`) for callers with a fail-soft
//! contract.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod cidr;
pub mod error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cidr::Cidr;
pub use cidr::contains;
pub use cidr::derive_subnet;
pub use cidr::overlap;
pub use cidr::parse_ipv4;
pub use error::CidrError;
pub use error::CidrResult;
