//! Boundary Integration Tests
//!
//! Drives the C ABI end to end against the process-wide service.

#[path = "../common/mod.rs"]
mod common;

mod arrays;
mod concurrent;
mod lifecycle;
mod text;
