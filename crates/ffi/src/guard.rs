//! Plumbing shared by every entry point
//!
//! - `run` turns a fallible body into a status code and stops panics at
//!   the boundary
//! - the pointer helpers turn raw arguments into references or
//!   `NullPointer` errors

use handlebridge_core::arith::to_usize;
use handlebridge_core::{BridgeError, Handle, Result, Status};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, error};

/// Run an entry point body and encode its outcome
pub(crate) fn run<S, F>(entry: &'static str, body: F) -> u32
where
    S: Into<Status>,
    F: FnOnce() -> S,
{
    let status: Status = match catch_unwind(AssertUnwindSafe(|| -> Status { body().into() })) {
        Ok(status) => status,
        Err(_) => {
            error!(entry, "Panic caught at boundary");
            Status::Internal
        }
    };
    if !matches!(status, Status::Success | Status::InsufficientBuffer) {
        debug!(entry, %status, "Boundary call failed");
    }
    status.code()
}

/// Borrow a required output argument
pub(crate) unsafe fn out_arg<'a, T>(ptr: *mut T, name: &'static str) -> Result<&'a mut T> {
    ptr.as_mut().ok_or(BridgeError::NullPointer(name))
}

/// Borrow a required input argument
pub(crate) unsafe fn in_arg<'a, T>(ptr: *const T, name: &'static str) -> Result<&'a T> {
    ptr.as_ref().ok_or(BridgeError::NullPointer(name))
}

/// Borrow a NUL-terminated UTF-8 string argument
pub(crate) unsafe fn str_arg<'a>(ptr: *const c_char, name: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(BridgeError::NullPointer(name));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| BridgeError::invalid_argument(format!("{name} is not valid UTF-8")))
}

/// View an optional caller buffer of `len` elements
pub(crate) unsafe fn buffer_arg<'a, T>(ptr: *mut T, len: usize) -> Option<&'a mut [T]> {
    if ptr.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts_mut(ptr, len))
    }
}

/// View an optional text buffer whose declared capacity is `capacity` bytes
pub(crate) unsafe fn text_buffer<'a>(ptr: *mut c_char, capacity: u64) -> Result<Option<&'a mut [u8]>> {
    if ptr.is_null() {
        return Ok(None);
    }
    Ok(buffer_arg(ptr as *mut u8, to_usize(capacity)?))
}

/// Decode a handle the call requires to be present
pub(crate) fn handle_arg(raw: u64) -> Result<Handle> {
    Handle::from_raw(raw).ok_or_else(|| BridgeError::invalid_argument("handle is absent"))
}

/// Move a value to the heap and hand its ownership to the caller
pub(crate) fn give<T>(out: &mut *mut T, value: T) {
    *out = Box::into_raw(Box::new(value));
}
