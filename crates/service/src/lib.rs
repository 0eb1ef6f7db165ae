//! Boundary service for handlebridge
//!
//! This crate ties the registry and the marshaling layer into one service:
//! - BridgeConfig: `handlebridge.toml` configuration
//! - BridgeService: Injectable context object owning the context registry
//! - global: Process-wide service slot with install/teardown lifecycle
//! - logging: tracing-subscriber setup driven by the config

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod global;
pub mod logging;
pub mod service;

pub use config::{BridgeConfig, CONFIG_FILE_NAME};
pub use logging::init_tracing;
pub use service::BridgeService;
