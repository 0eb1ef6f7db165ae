//! Process-wide service slot
//!
//! The C ABI has no place to thread a context object through, so it works
//! against one service installed here. The lifecycle is explicit:
//!
//! 1. `install` once before boundary calls (or let `current` install defaults)
//! 2. calls that publish objects go through `current`; read-only calls use
//!    `try_current` or `zero_fill` and never install
//! 3. `teardown` after all boundary calls have ceased
//!
//! Uses parking_lot::RwLock so a panicking caller can't poison the slot.

use crate::service::BridgeService;
use handlebridge_core::{BridgeError, Result};
use handlebridge_marshal::ZeroFill;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// The installed service, if any
static SERVICE: Lazy<RwLock<Option<Arc<BridgeService>>>> = Lazy::new(|| RwLock::new(None));

/// Install the process-wide service
///
/// # Errors
///
/// Returns `InvalidState` if a service is already installed.
pub fn install(service: BridgeService) -> Result<Arc<BridgeService>> {
    let mut slot = SERVICE.write();
    if slot.is_some() {
        warn!("Bridge service already installed");
        return Err(BridgeError::invalid_state("bridge service already installed"));
    }
    let service = Arc::new(service);
    *slot = Some(Arc::clone(&service));
    info!(zero_fill = ?service.config().zero_fill, "Installed bridge service");
    Ok(service)
}

/// The installed service, installing a default one on first use
pub fn current() -> Arc<BridgeService> {
    if let Some(service) = SERVICE.read().as_ref() {
        return Arc::clone(service);
    }

    let mut slot = SERVICE.write();
    let service = slot.get_or_insert_with(|| {
        info!("Installed default bridge service");
        Arc::new(BridgeService::default())
    });
    Arc::clone(service)
}

/// The installed service, without installing one
pub fn try_current() -> Option<Arc<BridgeService>> {
    SERVICE.read().clone()
}

/// Zero-fill setting of the installed service, or the default when none is
/// installed
///
/// Never installs a service, so read-only boundary calls made before
/// initialization leave the slot free for the host's own configuration.
pub fn zero_fill() -> ZeroFill {
    try_current().map_or_else(ZeroFill::default, |service| service.config().zero_fill)
}

/// Check whether a service is installed
pub fn is_installed() -> bool {
    SERVICE.read().is_some()
}

/// Remove the installed service and release its registry references
///
/// Services already handed out by `current` stay usable by their holders but
/// no longer resolve any handle.
pub fn teardown() -> Option<Arc<BridgeService>> {
    let taken = SERVICE.write().take();
    if let Some(service) = &taken {
        let released = service.shutdown();
        info!(released, "Tore down bridge service");
    }
    taken
}
