//! Error types for the boundary layer
//!
//! Every fallible operation in the workspace returns [`BridgeError`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Errors never cross the C boundary as values: each variant maps onto a
//! [`Status`] code through [`BridgeError::status`].

use crate::handle::Handle;
use crate::status::Status;
use thiserror::Error;

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Error types for the boundary layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Caller-declared capacity is smaller than the required size
    #[error("Insufficient buffer: required {required}, provided {provided}")]
    InsufficientBuffer {
        /// Size the operation needs
        required: u64,
        /// Size the caller declared
        provided: u64,
    },

    /// A length computation could not be represented
    #[error("Arithmetic overflow: {lhs} and {rhs}")]
    ArithmeticOverflow {
        /// Left operand
        lhs: u64,
        /// Right operand
        rhs: u64,
    },

    /// A required pointer argument was null
    #[error("Null pointer: {0}")]
    NullPointer(&'static str),

    /// An argument was rejected by validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The handle does not refer to a live object
    #[error("Unknown handle: {0}")]
    UnknownHandle(Handle),

    /// Lifecycle violation (double install, use after teardown)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        BridgeError::InvalidArgument(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        BridgeError::InvalidState(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        BridgeError::Config(msg.into())
    }

    /// Status code surfaced to foreign callers for this error
    pub fn status(&self) -> Status {
        match self {
            BridgeError::InsufficientBuffer { .. } => Status::InsufficientBuffer,
            BridgeError::ArithmeticOverflow { .. } => Status::ArithmeticOverflow,
            BridgeError::NullPointer(_) => Status::InvalidPointer,
            BridgeError::InvalidArgument(_) | BridgeError::Config(_) => Status::InvalidArgument,
            BridgeError::UnknownHandle(_) => Status::InvalidHandle,
            BridgeError::InvalidState(_) => Status::InvalidState,
        }
    }
}

impl From<BridgeError> for Status {
    fn from(e: BridgeError) -> Self {
        e.status()
    }
}
