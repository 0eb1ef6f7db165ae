//! Context entry points
//!
//! Contexts live in the service's registry and cross the boundary as `u64`
//! handles. `hb_context_destroy` drops the registry's reference only; a call
//! already working with the context finishes normally.
//!
//! Only `hb_context_create` installs a default service. The other calls see
//! no live handle while nothing is installed.

use crate::guard::{buffer_arg, handle_arg, out_arg, run, text_buffer};
use handlebridge_core::arith::to_usize;
use handlebridge_core::{BridgeError, Context, Handle, Modulus, Result};
use handlebridge_marshal::emit_handles;
use handlebridge_service::{global, BridgeService};
use std::os::raw::c_char;
use std::sync::Arc;

/// The installed service; without one no handle is live
fn installed(handle: Handle) -> Result<Arc<BridgeService>> {
    global::try_current().ok_or(BridgeError::UnknownHandle(handle))
}

/// Resolve a handle the call requires to be live
fn live_context(handle: Handle) -> Result<Arc<Context>> {
    installed(handle)?.contexts().get(handle)
}

/// Create a context and publish it
///
/// `coeff_modulus` points to `count` modulus values. The new handle is
/// written to `handle_out`.
///
/// # Safety
///
/// `coeff_modulus` must be valid for reads of `count` values (it may be
/// null when `count` is zero). `handle_out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn hb_context_create(
    poly_modulus_degree: u64,
    coeff_modulus: *const u64,
    count: u64,
    handle_out: *mut u64,
) -> u32 {
    run("hb_context_create", || -> Result<()> {
        let handle_out = out_arg(handle_out, "handle_out")?;
        let count = to_usize(count)?;
        let values: &[u64] = if count == 0 {
            &[]
        } else if coeff_modulus.is_null() {
            return Err(BridgeError::NullPointer("coeff_modulus"));
        } else {
            std::slice::from_raw_parts(coeff_modulus, count)
        };

        let chain = values
            .iter()
            .map(|&value| Modulus::new(value))
            .collect::<Result<Vec<_>>>()?;
        let context = Context::new(poly_modulus_degree, chain)?;
        *handle_out = global::current().publish_context(context)?.as_raw();
        Ok(())
    })
}

/// Release the registry's reference to a context
///
/// Fails with `InvalidHandle` if the handle is not live.
#[no_mangle]
pub extern "C" fn hb_context_destroy(handle: u64) -> u32 {
    run("hb_context_destroy", || -> Result<()> {
        let handle = handle_arg(handle)?;
        if installed(handle)?.release_context(handle) {
            Ok(())
        } else {
            Err(BridgeError::UnknownHandle(handle))
        }
    })
}

/// Report whether a handle resolves to a live context
///
/// An absent (`0`) or unknown handle reports `false` and succeeds.
///
/// # Safety
///
/// `live_out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn hb_context_is_live(handle: u64, live_out: *mut bool) -> u32 {
    run("hb_context_is_live", || -> Result<()> {
        let live_out = out_arg(live_out, "live_out")?;
        *live_out = global::try_current()
            .is_some_and(|service| service.contexts().resolve_raw(handle).is_some());
        Ok(())
    })
}

/// Copy out a context's coefficient modulus chain
///
/// With `out` null, writes the chain length to `length`. Otherwise `out`
/// must hold that many slots; each receives a new modulus the caller
/// releases with `hb_modulus_destroy`.
///
/// # Safety
///
/// `length` must be valid for writes. `out` must be null or valid for
/// writes of as many pointers as the size query reported.
#[no_mangle]
pub unsafe extern "C" fn hb_context_coeff_modulus(
    handle: u64,
    length: *mut u64,
    out: *mut *mut Modulus,
) -> u32 {
    run("hb_context_coeff_modulus", || -> Result<()> {
        let length = out_arg(length, "length")?;
        let context = live_context(handle_arg(handle)?)?;
        let chain = context.coeff_modulus();
        emit_handles(chain, length, buffer_arg(out, chain.len()))
    })
}

/// Write a context's description through the fill protocol
///
/// # Safety
///
/// `length` must be valid for reads and writes. `out` must be null or valid
/// for writes of `*length` bytes.
#[no_mangle]
pub unsafe extern "C" fn hb_context_to_string(
    handle: u64,
    out: *mut c_char,
    length: *mut u64,
) -> u32 {
    run("hb_context_to_string", || -> Result<()> {
        let length = out_arg(length, "length")?;
        let handle = handle_arg(handle)?;
        let buffer = text_buffer(out, *length)?;
        installed(handle)?.context_description(handle, buffer, length)
    })
}
