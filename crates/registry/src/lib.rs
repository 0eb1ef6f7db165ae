//! Handle registry for handlebridge
//!
//! Maps opaque [`Handle`](handlebridge_core::Handle)s to shared references of
//! published objects. Resolution runs under a `parking_lot::RwLock` read
//! lock; registration and removal are exclusive writers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;

pub use registry::HandleRegistry;
