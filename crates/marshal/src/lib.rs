//! Boundary marshaling for handlebridge
//!
//! Conventions for moving values across the foreign boundary:
//! - pool: Resolve an optional pool descriptor, defaulting to the global pool
//! - array: Emit caller-owned copies of value objects (size query, then fill)
//! - text: Two-phase "query size, then fill" protocol for variable-length text

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod pool;
pub mod text;

pub use array::{emit_handles, reclaim};
pub use pool::{resolve_pool, MemoryPool, PoolHandle, GLOBAL_POOL_ID};
pub use text::{fill_string, required_size, try_fill_string, BoundaryText, ZeroFill};
