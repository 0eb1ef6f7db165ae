//! Parameter context published through the registry
//!
//! `Context` is the shared object foreign callers hold handles to. It keeps
//! the parameter set the boundary exposes (degree and modulus chain) and
//! nothing of the engine behind it.

use crate::error::{BridgeError, Result};
use crate::modulus::Modulus;
use std::fmt;

/// Immutable parameter context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    poly_modulus_degree: u64,
    coeff_modulus: Vec<Modulus>,
}

impl Context {
    /// Create a context
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the degree is not a power of two of at
    /// least 2, if the modulus chain is empty, or if it contains a zero
    /// modulus.
    pub fn new(poly_modulus_degree: u64, coeff_modulus: Vec<Modulus>) -> Result<Self> {
        if poly_modulus_degree < 2 || !poly_modulus_degree.is_power_of_two() {
            return Err(BridgeError::invalid_argument(format!(
                "poly_modulus_degree {poly_modulus_degree} is not a power of two >= 2"
            )));
        }
        if coeff_modulus.is_empty() {
            return Err(BridgeError::invalid_argument("coeff_modulus is empty"));
        }
        if coeff_modulus.iter().any(Modulus::is_zero) {
            return Err(BridgeError::invalid_argument(
                "coeff_modulus contains a zero modulus",
            ));
        }
        Ok(Context {
            poly_modulus_degree,
            coeff_modulus,
        })
    }

    /// Polynomial modulus degree
    pub fn poly_modulus_degree(&self) -> u64 {
        self.poly_modulus_degree
    }

    /// Coefficient modulus chain, in order
    pub fn coeff_modulus(&self) -> &[Modulus] {
        &self.coeff_modulus
    }

    /// Sum of the bit counts of the modulus chain
    pub fn total_coeff_modulus_bit_count(&self) -> u32 {
        self.coeff_modulus.iter().map(Modulus::bit_count).sum()
    }

    /// Human-readable summary, emitted through the text fill protocol
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "poly_modulus_degree: {}, coeff_modulus: [",
            self.poly_modulus_degree
        )?;
        for (i, m) in self.coeff_modulus.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{m}")?;
        }
        write!(f, "] ({} bits)", self.total_coeff_modulus_bit_count())
    }
}
