//! Memory pool descriptors
//!
//! A descriptor is a caller-owned heap copy of a [`PoolHandle`]. Every
//! function taking a descriptor accepts null and uses the global pool in
//! its place.

use crate::guard::{give, out_arg, run};
use handlebridge_core::{BridgeError, Result};
use handlebridge_marshal::{reclaim, resolve_pool, PoolHandle};

/// Create a descriptor for a new pool
///
/// # Safety
///
/// `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn hb_pool_create(out: *mut *mut PoolHandle) -> u32 {
    run("hb_pool_create", || -> Result<()> {
        give(out_arg(out, "out")?, PoolHandle::new_pool());
        Ok(())
    })
}

/// Resolve an optional descriptor into a new caller-owned descriptor
///
/// Null resolves to the global pool.
///
/// # Safety
///
/// `pool` must be null or a live descriptor. `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn hb_pool_resolve(pool: *const PoolHandle, out: *mut *mut PoolHandle) -> u32 {
    run("hb_pool_resolve", || -> Result<()> {
        let out = out_arg(out, "out")?;
        give(out, resolve_pool(pool.as_ref()));
        Ok(())
    })
}

/// Release a descriptor; the pool lives on while other descriptors share it
///
/// # Safety
///
/// `pool` must come from `hb_pool_create` or `hb_pool_resolve` and must not
/// be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn hb_pool_destroy(pool: *mut PoolHandle) -> u32 {
    run("hb_pool_destroy", || -> Result<()> {
        reclaim(pool).ok_or(BridgeError::NullPointer("pool"))?;
        Ok(())
    })
}

/// Bytes allocated so far from a pool
///
/// # Safety
///
/// `pool` must be null or a live descriptor. `count_out` must be valid for
/// writes.
#[no_mangle]
pub unsafe extern "C" fn hb_pool_alloc_byte_count(
    pool: *const PoolHandle,
    count_out: *mut u64,
) -> u32 {
    run("hb_pool_alloc_byte_count", || -> Result<()> {
        let count_out = out_arg(count_out, "count_out")?;
        *count_out = resolve_pool(pool.as_ref()).alloc_byte_count();
        Ok(())
    })
}

/// Report whether a descriptor refers to the global pool
///
/// # Safety
///
/// `pool` must be null or a live descriptor. `global_out` must be valid for
/// writes.
#[no_mangle]
pub unsafe extern "C" fn hb_pool_is_global(pool: *const PoolHandle, global_out: *mut bool) -> u32 {
    run("hb_pool_is_global", || -> Result<()> {
        let global_out = out_arg(global_out, "global_out")?;
        *global_out = resolve_pool(pool.as_ref()).is_global();
        Ok(())
    })
}
