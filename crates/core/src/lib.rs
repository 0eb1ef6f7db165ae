//! Core types for handlebridge
//!
//! This crate defines the foundational types used throughout the boundary layer:
//! - Handle: Opaque non-zero identifier handed to foreign callers
//! - Status: Stable status codes returned across the C boundary
//! - BridgeError: Error type, mapped onto Status
//! - arith: Overflow-checked size arithmetic
//! - Modulus / Context: Value and shared object types published through the registry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arith;
pub mod context;
pub mod error;
pub mod handle;
pub mod modulus;
pub mod status;

pub use arith::{add_safe, mul_safe};
pub use context::Context;
pub use error::{BridgeError, Result};
pub use handle::Handle;
pub use modulus::{Modulus, MAX_MODULUS_BITS};
pub use status::Status;
