//! Handle registry: opaque handle -> shared object
//!
//! The registry is the canonical answer to "is this handle live, and what
//! does it refer to". Foreign callers only ever see the [`Handle`]; the
//! registry owns one strong reference per published object and hands out
//! additional strong references on resolution.
//!
//! ## Locking
//!
//! - `resolve` takes the read lock, so resolutions of different handles
//!   never contend with each other
//! - `register` / `remove` / `clear` take the write lock
//! - Every lock is held for exactly one map operation and never upgraded
//!
//! ## Lifetime
//!
//! `remove` drops only the registry's own reference. An `Arc` obtained from
//! `resolve` before the removal keeps the object alive for its holder; the
//! object is destroyed when the last holder releases it.

use handlebridge_core::{BridgeError, Handle, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Next identifier to hand out
///
/// Shared by every registry in the process, so a handle is never reissued,
/// not even by a registry created after another was torn down.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Registry of objects published to foreign callers
pub struct HandleRegistry<T> {
    /// Live entries: handle -> registry-held strong reference
    entries: RwLock<FxHashMap<Handle, Arc<T>>>,
}

impl<T> HandleRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty registry with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        HandleRegistry {
            entries: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Publish an object and return its new handle
    ///
    /// Each call inserts exactly one entry under a fresh handle, even when the
    /// same `Arc` is registered twice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` once the identifier space is exhausted.
    pub fn register(&self, object: Arc<T>) -> Result<Handle> {
        let raw = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
        let handle = Handle::from_raw(raw)
            .ok_or_else(|| BridgeError::invalid_state("handle space exhausted"))?;

        self.entries.write().insert(handle, object);
        debug!(handle = %handle, "Registered handle");
        Ok(handle)
    }

    /// Wrap `value` in an `Arc` and publish it
    pub fn publish(&self, value: T) -> Result<Handle> {
        self.register(Arc::new(value))
    }

    /// Remove a handle, returning the registry's reference
    ///
    /// The returned `Arc` is dropped by the caller, outside the lock.
    pub fn remove(&self, handle: Handle) -> Option<Arc<T>> {
        let removed = self.entries.write().remove(&handle);
        if removed.is_some() {
            debug!(handle = %handle, "Removed handle");
        }
        removed
    }

    /// Resolve an optional handle to a new strong reference
    ///
    /// An absent handle returns `None` without touching the lock. A handle
    /// that was never registered, or has been removed, also returns `None`.
    pub fn resolve(&self, handle: Option<Handle>) -> Option<Arc<T>> {
        let handle = handle?;
        let found = self.entries.read().get(&handle).cloned();
        if found.is_none() {
            trace!(handle = %handle, "Handle miss");
        }
        found
    }

    /// Resolve a raw wire value (`0` is absent)
    pub fn resolve_raw(&self, raw: u64) -> Option<Arc<T>> {
        self.resolve(Handle::from_raw(raw))
    }

    /// Resolve a handle that the caller requires to be live
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` on a miss.
    pub fn get(&self, handle: Handle) -> Result<Arc<T>> {
        self.resolve(Some(handle))
            .ok_or(BridgeError::UnknownHandle(handle))
    }

    /// Check whether a handle is currently live
    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.read().contains_key(&handle)
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether no handle is live
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All live handles, sorted
    pub fn handles(&self) -> Vec<Handle> {
        let mut handles: Vec<Handle> = self.entries.read().keys().copied().collect();
        handles.sort();
        handles
    }

    /// Remove every entry, returning how many were removed
    ///
    /// The registry's references are released after the lock is dropped.
    pub fn clear(&self) -> usize {
        let drained = std::mem::take(&mut *self.entries.write());
        let count = drained.len();
        drop(drained);
        if count > 0 {
            debug!(count, "Cleared handle registry");
        }
        count
    }
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HandleRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleRegistry")
            .field("live", &self.len())
            .finish()
    }
}
