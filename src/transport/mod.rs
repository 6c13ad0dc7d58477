//! Transport binding for the agent service
//!
//! This module provides the scope-fallback binder plus the concrete
//! implementations of the `AgentTransport` trait:
//! - `LocalTransport`: blocking Unix-domain-socket endpoints (production)
//! - `MockTransport`: scripted outcomes for testing (in tests module)

#[cfg(unix)]
mod local;

#[cfg(unix)]
pub use local::LocalTransport;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::MockTransport;

use tracing::debug;

use crate::error::{AgentError, Result};
use mlops_agent_interface::{
    AgentTransport, CallReply, CallRequest, ProxyConnection, ServiceFacet, TransportScope,
};

/// Exclusive ownership of one bound connection to one facet at one scope.
///
/// A handle lives for exactly one remote call: the forwarder binds, calls,
/// and lets the handle go out of scope. `Drop` closes the connection, so
/// every exit path - success, remote failure, delivery failure - releases
/// exactly once. Handles are never cached or shared across calls.
#[derive(Debug)]
pub struct ProxyHandle {
    conn: Box<dyn ProxyConnection>,
    facet: ServiceFacet,
    scope: TransportScope,
}

impl ProxyHandle {
    /// Issue the synchronous call this handle was bound for.
    pub fn call(&mut self, request: &CallRequest) -> Result<CallReply> {
        Ok(self.conn.call(request)?)
    }

    /// Facet this handle is bound to
    pub fn facet(&self) -> ServiceFacet {
        self.facet
    }

    /// Scope the binder ended up connecting at
    pub fn scope(&self) -> TransportScope {
        self.scope
    }
}

impl Drop for ProxyHandle {
    fn drop(&mut self) {
        self.conn.close();
    }
}

/// Bind a proxy to `facet`, probing transport scopes in priority order.
///
/// Probes stop at the first scope that accepts a connection; per-scope
/// failures are logged and discarded. No retries beyond the scope list and
/// no backoff - binding is expected to be fast and local. If every scope
/// fails, the service is unreachable and `AgentError::Unavailable` is
/// returned.
pub fn bind(transport: &dyn AgentTransport, facet: ServiceFacet) -> Result<ProxyHandle> {
    for scope in TransportScope::PRIORITY {
        match transport.connect(scope, facet) {
            Ok(conn) => {
                debug!("bound {} proxy at {} scope", facet, scope);
                return Ok(ProxyHandle { conn, facet, scope });
            }
            Err(err) => {
                debug!("no {} endpoint at {} scope: {}", facet, scope, err);
            }
        }
    }

    Err(AgentError::Unavailable(facet))
}
