//! Opaque handles handed to foreign callers
//!
//! A handle is a generated, non-zero identifier. It carries no address and no
//! meaning outside the registry that issued it, so allocator reuse on either
//! side of the boundary can never make a stale handle alias a new object.
//! `0` is reserved on the wire for "no handle".

use std::fmt;
use std::num::NonZeroU64;

/// Opaque identifier for a published object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(NonZeroU64);

impl Handle {
    /// Wrap a raw wire value; `0` means absent
    pub const fn from_raw(raw: u64) -> Option<Handle> {
        match NonZeroU64::new(raw) {
            Some(id) => Some(Handle(id)),
            None => None,
        }
    }

    /// Raw wire value of this handle (never zero)
    pub const fn as_raw(self) -> u64 {
        self.0.get()
    }

    /// Raw wire value of an optional handle, `0` for `None`
    pub fn to_wire(handle: Option<Handle>) -> u64 {
        handle.map_or(0, Handle::as_raw)
    }
}

impl From<NonZeroU64> for Handle {
    fn from(id: NonZeroU64) -> Self {
        Handle(id)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
