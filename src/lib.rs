//! handlebridge - handle registry and marshaling for foreign callers
//!
//! Objects handed across a language boundary are published in a registry
//! and referred to by opaque handles. Variable-length results come back
//! through a two-phase protocol: a size query, then a fill into a
//! caller-provided buffer.
//!
//! # Quick Start
//!
//! ```
//! use handlebridge::{BridgeService, Context, Modulus};
//!
//! let service = BridgeService::default();
//! let context = Context::new(8, vec![Modulus::new(17).unwrap()]).unwrap();
//! let handle = service.publish_context(context).unwrap();
//!
//! let mut length = 0;
//! service.context_description(handle, None, &mut length).unwrap();
//! let mut buffer = vec![0u8; length as usize];
//! service
//!     .context_description(handle, Some(&mut buffer[..]), &mut length)
//!     .unwrap();
//! ```
//!
//! # Architecture
//!
//! - `handlebridge-core`: handles, status codes, errors, checked arithmetic
//! - `handlebridge-registry`: the handle registry
//! - `handlebridge-marshal`: pools, handle arrays, the text fill protocol
//! - `handlebridge-service`: configuration, logging, the process-wide service
//! - `handlebridge-ffi`: the C ABI

pub use handlebridge_core::*;
pub use handlebridge_marshal::{
    emit_handles, fill_string, reclaim, resolve_pool, try_fill_string, BoundaryText,
    MemoryPool, PoolHandle, ZeroFill,
};
pub use handlebridge_registry::HandleRegistry;
pub use handlebridge_service::{global, init_tracing, BridgeConfig, BridgeService, CONFIG_FILE_NAME};

/// The C ABI entry points
pub mod ffi {
    pub use handlebridge_ffi::*;
}
