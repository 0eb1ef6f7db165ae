//! Two-phase text output across the boundary
//!
//! The callee cannot allocate memory the caller's runtime will manage, so
//! variable-length text is returned in two calls:
//!
//! 1. **Size query** - buffer absent; the required size (text length plus a
//!    terminator) is written to `capacity`
//! 2. **Fill** - the caller passes a buffer of at least that size; the text is
//!    copied in and the terminator is left implicit in zeroed bytes
//!
//! A fill with too little capacity writes the required size back to
//! `capacity` and leaves the buffer untouched, so the caller can retry with
//! a correctly sized buffer.

use handlebridge_core::arith::{add_safe, to_usize, to_wire};
use handlebridge_core::{BridgeError, Result, Status};
use serde::{Deserialize, Serialize};
use std::ffi::{CStr, CString};
use tracing::{debug, warn};

/// Extent of the zero-fill performed before copying text into a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroFill {
    /// Clear the whole caller-declared capacity
    #[default]
    Capacity,
    /// Clear only the bytes the text and its terminator occupy
    Required,
}

/// Text that can be written through the fill protocol
///
/// `text_len` must equal `text_bytes().len()` for real text.
pub trait BoundaryText {
    /// Bytes to copy, without terminator
    fn text_bytes(&self) -> &[u8];

    /// Length of the text in bytes
    fn text_len(&self) -> u64 {
        self.text_bytes().len() as u64
    }
}

impl BoundaryText for str {
    fn text_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl BoundaryText for String {
    fn text_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl BoundaryText for [u8] {
    fn text_bytes(&self) -> &[u8] {
        self
    }
}

impl BoundaryText for Vec<u8> {
    fn text_bytes(&self) -> &[u8] {
        self
    }
}

impl BoundaryText for CStr {
    fn text_bytes(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl BoundaryText for CString {
    fn text_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Size a buffer must have to hold `text` and its terminator
pub fn required_size<S: BoundaryText + ?Sized>(text: &S) -> Result<u64> {
    add_safe(text.text_len(), 1)
}

/// Run one phase of the fill protocol, reporting the outcome as a [`Status`]
///
/// See [`try_fill_string`] for the exact contract.
pub fn fill_string<S: BoundaryText + ?Sized>(
    text: &S,
    out: Option<&mut [u8]>,
    capacity: &mut u64,
    zero_fill: ZeroFill,
) -> Status {
    match try_fill_string(text, out, capacity, zero_fill) {
        Ok(()) => Status::Success,
        Err(e @ BridgeError::ArithmeticOverflow { .. }) => {
            warn!(error = %e, "Text length cannot be represented");
            e.status()
        }
        Err(e) => e.status(),
    }
}

/// Run one phase of the fill protocol
///
/// - `out` absent: writes the required size to `capacity`
/// - `out` present, enough room: zero-fills per `zero_fill`, copies the text
/// - `out` present, too small: writes the required size to `capacity`, buffer
///   untouched
///
/// "Enough room" means both the declared `capacity` and the slice length are
/// at least the required size. Zero-filling never reaches past the slice.
///
/// # Errors
///
/// - `ArithmeticOverflow` if the required size is not representable; neither
///   `capacity` nor the buffer is written
/// - `InsufficientBuffer` as described above
/// - `InvalidArgument` if `text_len` reports fewer bytes than `text_bytes`
///   holds; nothing is written
pub fn try_fill_string<S: BoundaryText + ?Sized>(
    text: &S,
    out: Option<&mut [u8]>,
    capacity: &mut u64,
    zero_fill: ZeroFill,
) -> Result<()> {
    let required = required_size(text)?;
    let bytes = text.text_bytes();
    if to_wire(bytes.len())? > required - 1 {
        return Err(BridgeError::invalid_argument(format!(
            "text_len {} is shorter than the {} text bytes",
            required - 1,
            bytes.len()
        )));
    }

    let Some(out) = out else {
        *capacity = required;
        return Ok(());
    };

    let physical = to_wire(out.len())?;
    if *capacity < required || physical < required {
        let provided = (*capacity).min(physical);
        debug!(required, provided, "Text buffer too small");
        *capacity = required;
        return Err(BridgeError::InsufficientBuffer { required, provided });
    }

    let clear = match zero_fill {
        ZeroFill::Capacity => (*capacity).min(physical),
        ZeroFill::Required => required,
    };
    out[..to_usize(clear)?].fill(0);

    out[..bytes.len()].copy_from_slice(bytes);
    Ok(())
}
