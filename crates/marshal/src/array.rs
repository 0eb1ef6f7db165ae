//! Bulk marshaling of value objects into caller-owned copies
//!
//! The caller first asks for the element count (destination absent), then
//! allocates a pointer array of that size in its own runtime and calls again.
//! Every pointer written on the second call is a separate `Box<T>` that the
//! caller now owns and must hand back through [`reclaim`].

use handlebridge_core::arith::{mul_safe, to_wire};
use handlebridge_core::{BridgeError, Result};
use tracing::debug;

/// Emit one owned copy of each value into `out`, in input order
///
/// `length` always receives the number of values. With `out` absent the call
/// stops there and allocates nothing.
///
/// # Errors
///
/// Returns `InsufficientBuffer` if `out` has fewer slots than there are
/// values; `length` still holds the required count and no copy is made.
pub fn emit_handles<T: Clone>(
    values: &[T],
    length: &mut u64,
    out: Option<&mut [*mut T]>,
) -> Result<()> {
    let count = to_wire(values.len())?;
    *length = count;

    let Some(out) = out else {
        return Ok(());
    };

    if out.len() < values.len() {
        debug!(
            required = count,
            provided = out.len(),
            "Destination array too small"
        );
        return Err(BridgeError::InsufficientBuffer {
            required: count,
            provided: to_wire(out.len())?,
        });
    }

    for (slot, value) in out.iter_mut().zip(values) {
        *slot = Box::into_raw(Box::new(value.clone()));
    }
    debug!(
        count,
        bytes = ?mul_safe(count, std::mem::size_of::<T>() as u64).ok(),
        "Emitted owned copies"
    );
    Ok(())
}

/// Take back ownership of a copy produced by [`emit_handles`]
///
/// Returns `None` for a null pointer.
///
/// # Safety
///
/// `ptr` must be null or a pointer written by `emit_handles::<T>` that has
/// not been reclaimed yet.
pub unsafe fn reclaim<T>(ptr: *mut T) -> Option<Box<T>> {
    if ptr.is_null() {
        return None;
    }
    Some(Box::from_raw(ptr))
}
