// crates/netblock/src/cidr.rs
// ============================================================================
// Module: IPv4 Block Arithmetic
// Description: CIDR parsing, formatting, masking, derivation, and overlap.
// Purpose: Provide deterministic unsigned 32-bit address math for block
//          containment and Nth-subnet derivation.
// Dependencies: crate::error, serde
// ============================================================================

//! ## Overview
//! A [`Cidr`] is an IPv4 block held as a canonical unsigned 32-bit address
//! plus a prefix length in `0..=32`. All mask arithmetic stays in `u32`
//! (derivation widens to `u64` before wrapping back) so addresses with the
//! high bit set never sign-extend. Parsing is strict: dotted quad, one to
//! three digits per octet, octets in `0..=255`, prefix of at most two
//! digits in `0..=32`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::CidrError;
use crate::error::CidrResult;

// ============================================================================
// SECTION: Cidr Type
// ============================================================================

/// IPv4 block expressed as an address plus prefix length.
///
/// # Invariants
/// - `prefix` is always in `0..=32`.
/// - `address` is the address as written, not normalized to the network
///   base; [`Cidr::network_address`] applies the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cidr {
    /// Address bits exactly as parsed.
    address: u32,
    /// Prefix length in `0..=32`.
    prefix: u8,
}

impl Cidr {
    /// Creates a block from raw address bits and a prefix length.
    ///
    /// # Errors
    ///
    /// Returns [`CidrError::PrefixOutOfRange`] when `prefix > 32`.
    pub fn new(address: u32, prefix: u8) -> CidrResult<Self> {
        if prefix > 32 {
            return Err(CidrError::PrefixOutOfRange {
                prefix: u32::from(prefix),
            });
        }
        Ok(Self {
            address,
            prefix,
        })
    }

    /// Parses a block from `A.B.C.D/prefix` text.
    ///
    /// # Errors
    ///
    /// Returns [`CidrError`] when the syntax does not match or an octet or
    /// the prefix is out of range.
    pub fn parse(input: &str) -> CidrResult<Self> {
        let Some((address_text, prefix_text)) = input.split_once('/') else {
            return Err(CidrError::InvalidCidr {
                input: input.to_string(),
            });
        };
        let address = parse_ipv4(address_text)?;
        let prefix = parse_prefix(prefix_text).ok_or_else(|| CidrError::InvalidCidr {
            input: input.to_string(),
        })?;
        if prefix > 32 {
            return Err(CidrError::PrefixOutOfRange {
                prefix,
            });
        }
        let prefix = u8::try_from(prefix).unwrap_or(32);
        Ok(Self {
            address,
            prefix,
        })
    }

    /// Returns the address bits exactly as parsed.
    #[must_use]
    pub const fn address(self) -> u32 {
        self.address
    }

    /// Returns the prefix length.
    #[must_use]
    pub const fn prefix(self) -> u8 {
        self.prefix
    }

    /// Returns the network mask for this block's prefix.
    #[must_use]
    pub const fn mask(self) -> u32 {
        mask_for(self.prefix)
    }

    /// Returns the network base address (address masked to the prefix).
    #[must_use]
    pub const fn network_address(self) -> u32 {
        self.address & self.mask()
    }

    /// Derives the `index`-th subnet carved with `extra_bits` additional
    /// prefix bits.
    ///
    /// The derived block keeps the parent's network bits and varies only
    /// the next `extra_bits` bits by `index`; the caller is responsible for
    /// keeping `index` below `2^extra_bits`. The derived address is
    /// computed in 64-bit space and wrapped to 32 bits.
    ///
    /// # Errors
    ///
    /// Returns [`CidrError::PrefixTooLong`] when `prefix + extra_bits`
    /// exceeds 32.
    pub fn subnet(self, extra_bits: u32, index: u32) -> CidrResult<Self> {
        let new_prefix = u32::from(self.prefix) + extra_bits;
        if new_prefix > 32 {
            return Err(CidrError::PrefixTooLong {
                parent_prefix: self.prefix,
                extra_bits,
            });
        }
        let step = 1_u64 << (32 - new_prefix);
        let derived = u64::from(self.network_address()) + u64::from(index) * step;
        let address = u32::try_from(derived & u64::from(u32::MAX)).unwrap_or(0);
        Ok(Self {
            address,
            prefix: u8::try_from(new_prefix).unwrap_or(32),
        })
    }

    /// Returns true when `addr` lies inside this block.
    #[must_use]
    pub const fn contains_addr(self, addr: u32) -> bool {
        (addr & self.mask()) == self.network_address()
    }

    /// Returns true when the two blocks share any address.
    ///
    /// The comparison masks both addresses with the smaller (less specific)
    /// of the two prefixes: if the networks agree under that mask, one
    /// block contains the other.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        let prefix = if self.prefix < other.prefix { self.prefix } else { other.prefix };
        let mask = mask_for(prefix);
        (self.address & mask) == (other.address & mask)
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(input: &str) -> CidrResult<Self> {
        Self::parse(input)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets = self.address.to_be_bytes();
        write!(
            f,
            "{}.{}.{}.{}/{}",
            octets[0], octets[1], octets[2], octets[3], self.prefix
        )
    }
}

// ============================================================================
// SECTION: Address Parsing
// ============================================================================

/// Parses a strict dotted-quad IPv4 address into its 32-bit value.
///
/// # Errors
///
/// Returns [`CidrError::InvalidAddress`] when the shape does not match and
/// [`CidrError::OctetOutOfRange`] when an octet exceeds 255.
pub fn parse_ipv4(input: &str) -> CidrResult<u32> {
    let mut address = 0_u32;
    let mut count = 0_usize;
    for octet_text in input.split('.') {
        count += 1;
        if count > 4 {
            return Err(CidrError::InvalidAddress {
                input: input.to_string(),
            });
        }
        if octet_text.is_empty()
            || octet_text.len() > 3
            || !octet_text.bytes().all(|byte| byte.is_ascii_digit())
        {
            return Err(CidrError::InvalidAddress {
                input: input.to_string(),
            });
        }
        let octet: u32 = octet_text.parse().map_err(|_| CidrError::InvalidAddress {
            input: input.to_string(),
        })?;
        if octet > 255 {
            return Err(CidrError::OctetOutOfRange {
                octet: octet_text.to_string(),
            });
        }
        address = (address << 8) | octet;
    }
    if count != 4 {
        return Err(CidrError::InvalidAddress {
            input: input.to_string(),
        });
    }
    Ok(address)
}

/// Parses a prefix length of at most two digits; range is checked by the
/// caller so the error can carry the full input.
fn parse_prefix(input: &str) -> Option<u32> {
    if input.is_empty() || input.len() > 2 || !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Returns the network mask for a prefix length in `0..=32`.
const fn mask_for(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix as u32)
    }
}

// ============================================================================
// SECTION: Fail-Closed String Wrappers
// ============================================================================

/// Returns true when `ip` lies inside the `cidr` block.
///
/// Fails closed: any input that does not parse yields `false`.
#[must_use]
pub fn contains(cidr: &str, ip: &str) -> bool {
    match (Cidr::parse(cidr), parse_ipv4(ip)) {
        (Ok(block), Ok(addr)) => block.contains_addr(addr),
        _ => false,
    }
}

/// Returns true when the two blocks share any address.
///
/// Fails closed: any input that does not parse yields `false`.
#[must_use]
pub fn overlap(a: &str, b: &str) -> bool {
    match (Cidr::parse(a), Cidr::parse(b)) {
        (Ok(block_a), Ok(block_b)) => block_a.overlaps(block_b),
        _ => false,
    }
}

/// Parses `parent` and derives its `index`-th subnet with `extra_bits`
/// additional prefix bits.
///
/// # Errors
///
/// Returns [`CidrError`] when `parent` does not parse or the derived
/// prefix exceeds 32 bits.
pub fn derive_subnet(parent: &str, extra_bits: u32, index: u32) -> CidrResult<Cidr> {
    Cidr::parse(parent)?.subnet(extra_bits, index)
}
