/*!
 * MLOps Agent Client
 *
 * A synchronous client facade for the MLOps agent service, covering:
 * - Pipeline lifecycle (register, launch, start/stop, destroy, state)
 * - Model registry (versioned registration, activation, queries, deletion)
 * - Shared resource registry (add, query, deletion)
 * - Endpoint binding with system-then-session scope fallback
 * - Packaged-resource (RPK) path grounding in queried records
 *
 * The service itself is a separate, always-running process; this crate only
 * locates its endpoints, marshals arguments, and post-processes results.
 */

pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod rpk;
pub mod transport;

// Re-export commonly used types
pub use client::AgentClient;
pub use config::{ClientConfig, LogLevel};
pub use error::{AgentError, Result};
pub use mlops_agent_interface::{ServiceFacet, TransportScope};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
