//! Memory pool descriptors and their resolution
//!
//! Pool handles are not registry handles. A foreign caller passes either
//! nothing (use the process-wide default pool) or a pointer to a
//! [`PoolHandle`] it obtained earlier; [`resolve_pool`] turns that into an
//! owned descriptor by value, so nothing borrowed from the caller outlives
//! the call.

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifier of the process-wide default pool
pub const GLOBAL_POOL_ID: u64 = 0;

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(GLOBAL_POOL_ID + 1);

/// Process-wide default pool, created on first use
static GLOBAL_POOL: Lazy<Arc<MemoryPool>> =
    Lazy::new(|| Arc::new(MemoryPool::with_id(GLOBAL_POOL_ID)));

/// A byte-accounting allocation pool
pub struct MemoryPool {
    id: u64,
    alloc_byte_count: AtomicU64,
    allocation_count: AtomicU64,
}

impl MemoryPool {
    fn with_id(id: u64) -> Self {
        MemoryPool {
            id,
            alloc_byte_count: AtomicU64::new(0),
            allocation_count: AtomicU64::new(0),
        }
    }

    /// Create a pool with a fresh identifier
    pub fn new() -> Self {
        Self::with_id(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Pool identifier ([`GLOBAL_POOL_ID`] for the default pool)
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Allocate a zeroed block of `bytes` bytes from this pool
    pub fn allocate(&self, bytes: usize) -> Vec<u8> {
        self.alloc_byte_count
            .fetch_add(bytes as u64, Ordering::Relaxed);
        self.allocation_count.fetch_add(1, Ordering::Relaxed);
        vec![0u8; bytes]
    }

    /// Total bytes handed out by this pool
    pub fn alloc_byte_count(&self) -> u64 {
        self.alloc_byte_count.load(Ordering::Relaxed)
    }

    /// Number of allocations served
    pub fn allocation_count(&self) -> u64 {
        self.allocation_count.load(Ordering::Relaxed)
    }
}

impl Default for MemoryPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryPool")
            .field("id", &self.id)
            .field("alloc_byte_count", &self.alloc_byte_count())
            .field("allocation_count", &self.allocation_count())
            .finish()
    }
}

/// Cheaply cloneable descriptor of a pool
///
/// Clones share the pool; a clone stays valid after the original is dropped.
#[derive(Clone, Debug)]
pub struct PoolHandle {
    pool: Arc<MemoryPool>,
}

impl PoolHandle {
    /// Descriptor bound to the process-wide default pool
    pub fn global() -> Self {
        PoolHandle {
            pool: Arc::clone(&*GLOBAL_POOL),
        }
    }

    /// Descriptor bound to a brand new pool
    pub fn new_pool() -> Self {
        PoolHandle {
            pool: Arc::new(MemoryPool::new()),
        }
    }

    /// True if this descriptor refers to the default pool
    pub fn is_global(&self) -> bool {
        Arc::ptr_eq(&self.pool, &*GLOBAL_POOL)
    }

    /// Identifier of the underlying pool
    pub fn pool_id(&self) -> u64 {
        self.pool.id()
    }

    /// Number of descriptors (including this one) sharing the pool
    pub fn use_count(&self) -> usize {
        Arc::strong_count(&self.pool)
    }

    /// Total bytes handed out by the underlying pool
    pub fn alloc_byte_count(&self) -> u64 {
        self.pool.alloc_byte_count()
    }

    /// Allocate a zeroed block from the underlying pool
    pub fn allocate(&self, bytes: usize) -> Vec<u8> {
        self.pool.allocate(bytes)
    }

    /// Shared access to the underlying pool
    pub fn pool(&self) -> &MemoryPool {
        &self.pool
    }
}

impl PartialEq for PoolHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pool, &other.pool)
    }
}

impl Eq for PoolHandle {}

impl Default for PoolHandle {
    fn default() -> Self {
        Self::global()
    }
}

/// Resolve an optional caller-supplied pool descriptor
///
/// `None` yields a fresh descriptor for the default pool; `Some` yields a
/// copy of the caller's descriptor. No registry lookup is involved and the
/// borrow of `handle` ends with the call.
pub fn resolve_pool(handle: Option<&PoolHandle>) -> PoolHandle {
    match handle {
        None => PoolHandle::global(),
        Some(handle) => handle.clone(),
    }
}
