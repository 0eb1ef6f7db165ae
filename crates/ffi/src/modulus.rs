//! Caller-owned modulus objects

use crate::guard::{give, in_arg, out_arg, run, text_buffer};
use handlebridge_core::{BridgeError, Modulus, Result};
use handlebridge_marshal::{reclaim, try_fill_string};
use handlebridge_service::global;
use std::os::raw::c_char;

/// Create a modulus; release it with `hb_modulus_destroy`
///
/// # Safety
///
/// `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn hb_modulus_create(value: u64, out: *mut *mut Modulus) -> u32 {
    run("hb_modulus_create", || -> Result<()> {
        let out = out_arg(out, "out")?;
        give(out, Modulus::new(value)?);
        Ok(())
    })
}

/// Release a modulus created by this library
///
/// # Safety
///
/// `modulus` must come from `hb_modulus_create` or
/// `hb_context_coeff_modulus` and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn hb_modulus_destroy(modulus: *mut Modulus) -> u32 {
    run("hb_modulus_destroy", || -> Result<()> {
        reclaim(modulus).ok_or(BridgeError::NullPointer("modulus"))?;
        Ok(())
    })
}

/// Read a modulus value
///
/// # Safety
///
/// `modulus` must be a live modulus and `value_out` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn hb_modulus_value(modulus: *const Modulus, value_out: *mut u64) -> u32 {
    run("hb_modulus_value", || -> Result<()> {
        let modulus = in_arg(modulus, "modulus")?;
        *out_arg(value_out, "value_out")? = modulus.value();
        Ok(())
    })
}

/// Replace a modulus value; an invalid value leaves the modulus unchanged
///
/// # Safety
///
/// `modulus` must be a live modulus not used concurrently by other threads.
#[no_mangle]
pub unsafe extern "C" fn hb_modulus_set_value(modulus: *mut Modulus, value: u64) -> u32 {
    run("hb_modulus_set_value", || -> Result<()> {
        out_arg(modulus, "modulus")?.set_value(value)
    })
}

/// Write a modulus value in decimal through the fill protocol
///
/// # Safety
///
/// `modulus` must be a live modulus. `length` must be valid for reads and
/// writes. `out` must be null or valid for writes of `*length` bytes.
#[no_mangle]
pub unsafe extern "C" fn hb_modulus_to_string(
    modulus: *const Modulus,
    out: *mut c_char,
    length: *mut u64,
) -> u32 {
    run("hb_modulus_to_string", || -> Result<()> {
        let modulus = in_arg(modulus, "modulus")?;
        let length = out_arg(length, "length")?;
        let buffer = text_buffer(out, *length)?;
        try_fill_string(&modulus.to_string(), buffer, length, global::zero_fill())
    })
}
