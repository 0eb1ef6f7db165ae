//! C ABI for handlebridge
//!
//! Every entry point:
//! - returns a `u32` status code (see [`Status`])
//! - reports a null required pointer as `InvalidPointer`
//! - catches panics and reports them as `Internal`
//!
//! Contexts cross the boundary as opaque `u64` handles (`0` is absent).
//! Moduli and pool descriptors cross as caller-owned heap objects released
//! through their `_destroy` entry point. Text uses the two-phase fill
//! protocol: pass a null buffer to learn the required size, then call again
//! with a buffer of that size.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod guard;

pub mod context;
pub mod lifecycle;
pub mod modulus;
pub mod pool;

pub use context::{
    hb_context_coeff_modulus, hb_context_create, hb_context_destroy, hb_context_is_live,
    hb_context_to_string,
};
pub use handlebridge_core::Status;
pub use lifecycle::{hb_initialize, hb_shutdown, hb_status_name};
pub use modulus::{
    hb_modulus_create, hb_modulus_destroy, hb_modulus_set_value, hb_modulus_to_string,
    hb_modulus_value,
};
pub use pool::{
    hb_pool_alloc_byte_count, hb_pool_create, hb_pool_destroy, hb_pool_is_global,
    hb_pool_resolve,
};
