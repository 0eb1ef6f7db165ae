//! Overflow-checked arithmetic for buffer sizing
//!
//! Sizes that cross the boundary are `u64` on the wire. Every computation that
//! produces a size goes through these helpers so that a pathological input
//! is reported as [`BridgeError::ArithmeticOverflow`] rather than wrapping.

use crate::error::{BridgeError, Result};

/// Add two lengths, failing on overflow
pub fn add_safe(lhs: u64, rhs: u64) -> Result<u64> {
    lhs.checked_add(rhs)
        .ok_or(BridgeError::ArithmeticOverflow { lhs, rhs })
}

/// Multiply two lengths, failing on overflow
pub fn mul_safe(lhs: u64, rhs: u64) -> Result<u64> {
    lhs.checked_mul(rhs)
        .ok_or(BridgeError::ArithmeticOverflow { lhs, rhs })
}

/// Narrow a wire length to a native size
///
/// Only fails on targets where `usize` is narrower than 64 bits.
pub fn to_usize(value: u64) -> Result<usize> {
    usize::try_from(value).map_err(|_| BridgeError::ArithmeticOverflow {
        lhs: value,
        rhs: 0,
    })
}

/// Widen a native size to a wire length
pub fn to_wire(value: usize) -> Result<u64> {
    u64::try_from(value).map_err(|_| BridgeError::ArithmeticOverflow {
        lhs: value as u64,
        rhs: 0,
    })
}
