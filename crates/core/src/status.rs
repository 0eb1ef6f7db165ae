//! Status codes returned across the C boundary
//!
//! The far side of the boundary cannot take part in Rust's error
//! propagation, so every entry point reports its outcome as a plain `u32`.
//! The numeric values are stable; new codes are only ever appended.

use std::fmt;

/// Outcome of a boundary-facing operation
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Operation completed
    Success = 0,
    /// Caller-declared capacity too small; the capacity field now holds the
    /// required size
    InsufficientBuffer = 1,
    /// A size computation overflowed
    ArithmeticOverflow = 2,
    /// A required pointer was null
    InvalidPointer = 3,
    /// An argument failed validation
    InvalidArgument = 4,
    /// The handle does not refer to a live object
    InvalidHandle = 5,
    /// The boundary is not in a state that permits the call
    InvalidState = 6,
    /// A panic was caught before it could unwind into the caller
    Internal = 7,
}

impl Status {
    /// Raw code for the wire
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Decode a raw code
    pub const fn from_code(code: u32) -> Option<Status> {
        match code {
            0 => Some(Status::Success),
            1 => Some(Status::InsufficientBuffer),
            2 => Some(Status::ArithmeticOverflow),
            3 => Some(Status::InvalidPointer),
            4 => Some(Status::InvalidArgument),
            5 => Some(Status::InvalidHandle),
            6 => Some(Status::InvalidState),
            7 => Some(Status::Internal),
            _ => None,
        }
    }

    /// True only for [`Status::Success`]
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Stable lowercase name, used in log fields
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::InsufficientBuffer => "insufficient_buffer",
            Status::ArithmeticOverflow => "arithmetic_overflow",
            Status::InvalidPointer => "invalid_pointer",
            Status::InvalidArgument => "invalid_argument",
            Status::InvalidHandle => "invalid_handle",
            Status::InvalidState => "invalid_state",
            Status::Internal => "internal",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> From<crate::Result<T>> for Status {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(e) => e.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BridgeError;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Status::Success.code(), 0);
        assert_eq!(Status::InsufficientBuffer.code(), 1);
        assert_eq!(Status::ArithmeticOverflow.code(), 2);
        assert_eq!(Status::InvalidPointer.code(), 3);
        assert_eq!(Status::InvalidArgument.code(), 4);
        assert_eq!(Status::InvalidHandle.code(), 5);
        assert_eq!(Status::InvalidState.code(), 6);
        assert_eq!(Status::Internal.code(), 7);
    }

    #[test]
    fn test_from_code_inverts_code() {
        for code in 0..=7 {
            let status = Status::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(Status::from_code(8), None);
        assert_eq!(Status::from_code(u32::MAX), None);
    }

    #[test]
    fn test_only_success_is_success() {
        assert!(Status::Success.is_success());
        assert!(!Status::InsufficientBuffer.is_success());
        assert!(!Status::Internal.is_success());
    }

    #[test]
    fn test_status_from_result() {
        let ok: crate::Result<()> = Ok(());
        assert_eq!(Status::from(ok), Status::Success);

        let err: crate::Result<()> = Err(BridgeError::NullPointer("buffer"));
        assert_eq!(Status::from(err), Status::InvalidPointer);
    }

    #[test]
    fn test_display_uses_snake_case_name() {
        assert_eq!(Status::InsufficientBuffer.to_string(), "insufficient_buffer");
    }
}
