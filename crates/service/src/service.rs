//! The boundary service
//!
//! `BridgeService` is the context object every boundary entry point works
//! against: it owns the context registry and the configuration that shapes
//! marshaling. Tests construct isolated instances; the C ABI goes through
//! the single process-wide instance in [`crate::global`].

use crate::config::BridgeConfig;
use handlebridge_core::{Context, Handle, Modulus, Result, Status};
use handlebridge_marshal::{
    emit_handles, fill_string, resolve_pool, try_fill_string, BoundaryText, PoolHandle,
};
use handlebridge_registry::HandleRegistry;
use std::sync::Arc;
use tracing::debug;

/// Registry plus configuration for one boundary instance
#[derive(Debug)]
pub struct BridgeService {
    config: BridgeConfig,
    contexts: HandleRegistry<Context>,
}

impl BridgeService {
    /// Create a service from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a config error if `config` does not validate.
    pub fn new(config: BridgeConfig) -> Result<Self> {
        config.validate()?;
        let contexts = HandleRegistry::with_capacity(config.registry_capacity);
        Ok(BridgeService { config, contexts })
    }

    /// Configuration this service was built with
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The context registry
    pub fn contexts(&self) -> &HandleRegistry<Context> {
        &self.contexts
    }

    /// Publish a context and return its handle
    pub fn publish_context(&self, context: Context) -> Result<Handle> {
        let handle = self.contexts.publish(context)?;
        debug!(handle = %handle, live = self.contexts.len(), "Published context");
        Ok(handle)
    }

    /// Drop the registry's reference to a context
    ///
    /// Returns `false` if the handle was not live.
    pub fn release_context(&self, handle: Handle) -> bool {
        self.contexts.remove(handle).is_some()
    }

    /// Resolve a context handle; absent and unknown handles give `None`
    pub fn resolve_context(&self, handle: Option<Handle>) -> Option<Arc<Context>> {
        self.contexts.resolve(handle)
    }

    /// Resolve an optional pool descriptor
    pub fn resolve_pool(&self, handle: Option<&PoolHandle>) -> PoolHandle {
        resolve_pool(handle)
    }

    /// Emit caller-owned copies of a context's coefficient modulus chain
    ///
    /// # Errors
    ///
    /// `UnknownHandle` for a dead handle, `InsufficientBuffer` for a short
    /// destination.
    pub fn context_coeff_modulus(
        &self,
        handle: Handle,
        length: &mut u64,
        out: Option<&mut [*mut Modulus]>,
    ) -> Result<()> {
        let context = self.contexts.get(handle)?;
        emit_handles(context.coeff_modulus(), length, out)
    }

    /// Write a context's description through the fill protocol
    ///
    /// # Errors
    ///
    /// `UnknownHandle` for a dead handle, otherwise as [`try_fill_string`].
    pub fn context_description(
        &self,
        handle: Handle,
        out: Option<&mut [u8]>,
        capacity: &mut u64,
    ) -> Result<()> {
        let context = self.contexts.get(handle)?;
        try_fill_string(
            context.description().as_str(),
            out,
            capacity,
            self.config.zero_fill,
        )
    }

    /// Write arbitrary text through the fill protocol with this service's
    /// zero-fill setting
    pub fn fill_text<S: BoundaryText + ?Sized>(
        &self,
        text: &S,
        out: Option<&mut [u8]>,
        capacity: &mut u64,
    ) -> Status {
        fill_string(text, out, capacity, self.config.zero_fill)
    }

    /// Release every registry reference; returns how many were live
    pub fn shutdown(&self) -> usize {
        self.contexts.clear()
    }
}

impl Default for BridgeService {
    fn default() -> Self {
        let config = BridgeConfig::default();
        BridgeService {
            contexts: HandleRegistry::with_capacity(config.registry_capacity),
            config,
        }
    }
}
