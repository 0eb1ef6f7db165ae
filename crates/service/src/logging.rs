//! Tracing subscriber setup for hosts that don't install their own

use crate::config::BridgeConfig;
use handlebridge_core::Result;
use once_cell::sync::OnceCell;
use tracing::debug;

static SUBSCRIBER: OnceCell<bool> = OnceCell::new();

/// Install a fmt subscriber at the configured level
///
/// Only the first call has an effect. If the host already set a global
/// subscriber, that one is kept and `Ok(false)` is returned.
///
/// # Errors
///
/// Returns a config error if the configured level is invalid.
pub fn init_tracing(config: &BridgeConfig) -> Result<bool> {
    let level = config.level()?;
    let installed = *SUBSCRIBER.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .is_ok()
    });
    debug!(installed, %level, "Tracing initialized");
    Ok(installed)
}
