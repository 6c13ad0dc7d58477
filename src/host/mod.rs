//! Host-environment implementations for the HostContext trait
//!
//! This module provides concrete implementations of the `HostContext` trait:
//! - `PackagedHost`: packaging-aware host for processes running inside an
//!   installed application package
//! - `PassthroughHost`: no-op host for everything else (the common case)
//! - `MockHost`: scripted host for testing (in tests module)

mod local;

pub use local::{PackagedHost, PassthroughHost};

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::MockHost;
