//! Modulus value type
//!
//! A plain value that the boundary copies out to callers. Only the
//! bookkeeping the boundary needs lives here; modular arithmetic belongs to
//! the numeric engine.

use crate::error::{BridgeError, Result};
use std::fmt;

/// Largest modulus bit width accepted
pub const MAX_MODULUS_BITS: u32 = 61;

/// An unsigned integer modulus of at most [`MAX_MODULUS_BITS`] bits
///
/// Zero is permitted and denotes an unset modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modulus {
    value: u64,
}

impl Modulus {
    /// Create a modulus
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for `1` or for values wider than
    /// [`MAX_MODULUS_BITS`].
    pub fn new(value: u64) -> Result<Self> {
        if value == 1 {
            return Err(BridgeError::invalid_argument("modulus must not be 1"));
        }
        if bit_width(value) > MAX_MODULUS_BITS {
            return Err(BridgeError::invalid_argument(format!(
                "modulus {value} exceeds {MAX_MODULUS_BITS} bits"
            )));
        }
        Ok(Modulus { value })
    }

    /// Numeric value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Significant bits of the value
    pub fn bit_count(&self) -> u32 {
        bit_width(self.value)
    }

    /// True for the unset modulus
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Overwrite the value in place
    pub fn set_value(&mut self, value: u64) -> Result<()> {
        *self = Modulus::new(value)?;
        Ok(())
    }
}

fn bit_width(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
