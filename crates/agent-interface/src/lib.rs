//! MLOps Agent Interface: the client/service boundary surface
//!
//! This crate defines everything the client facade and the agent service have
//! to agree on, without pulling in either side's implementation:
//!
//! 1. **Identity**: the well-known service name, its three facets, and the
//!    transport scopes a client probes when binding
//! 2. **Wire types**: the request/reply pair carried by one synchronous call
//! 3. **Seams**: the `AgentTransport` and `HostContext` traits implemented by
//!    the client crate (and mocked by its tests)
//!
//! # Example
//!
//! ```rust,no_run
//! use mlops_agent_interface::{AgentTransport, CallRequest, Result, ServiceFacet, TransportScope};
//! use serde_json::json;
//!
//! fn ping<T: AgentTransport>(transport: &T) -> Result<()> {
//!     let mut conn = transport.connect(TransportScope::System, ServiceFacet::Pipeline)?;
//!     let reply = conn.call(&CallRequest::new("get_state", json!({ "id": 1 })))?;
//!     println!("remote status: {}", reply.code);
//!     conn.close();
//!     Ok(())
//! }
//! ```
//!
//! # Thread Safety
//!
//! `AgentTransport` and `HostContext` implementations must be `Send + Sync`:
//! the client hands them out behind `Arc` to independently calling threads.
//! A `ProxyConnection` is only ever owned by the single call that created it,
//! so it is `Send` but not shared.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Well-known identity of the agent service.
///
/// Both scopes expose the service under this name; only the directory the
/// endpoint lives in differs per scope.
pub const SERVICE_NAME: &str = "mlops-agent";

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors from host-environment queries consumed by the client.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("No installed root for resource type: {0}")]
    RootNotFound(String),

    #[error("Host query failed: {0}")]
    Query(String),
}

/// The three remote surfaces exposed by the agent service.
///
/// The facet determines which endpoint a proxy binds to and which method
/// names are meaningful on the resulting connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceFacet {
    /// Pipeline lifecycle: description registry plus launched instances
    Pipeline,

    /// Model registry: versioned, at most one activated version per name
    Model,

    /// Shared resource registry
    Resource,
}

impl ServiceFacet {
    pub const ALL: [ServiceFacet; 3] =
        [ServiceFacet::Pipeline, ServiceFacet::Model, ServiceFacet::Resource];

    /// Well-known endpoint name of this facet under the service's runtime
    /// directory.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServiceFacet::Pipeline => "pipeline",
            ServiceFacet::Model => "model",
            ServiceFacet::Resource => "resource",
        }
    }
}

impl fmt::Display for ServiceFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Connection scopes, in the order a client probes them.
///
/// A service installed machine-wide answers at `System`; a per-user instance
/// answers at `Session`. Callers never pick a scope directly - binding walks
/// `PRIORITY` and keeps the first scope that accepts a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportScope {
    /// Machine-wide runtime directory
    System,

    /// Per-user session runtime directory
    Session,
}

impl TransportScope {
    /// Fixed probe order: system scope first, then session scope.
    pub const PRIORITY: [TransportScope; 2] = [TransportScope::System, TransportScope::Session];
}

impl fmt::Display for TransportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportScope::System => f.write_str("system"),
            TransportScope::Session => f.write_str("session"),
        }
    }
}

/// One synchronous request: a facet-scoped method name and its arguments.
///
/// Every argument slot the method declares must be present in `args`;
/// optional caller inputs are marshaled as empty strings, never omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    pub method: String,
    pub args: serde_json::Value,
}

impl CallRequest {
    pub fn new(method: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// The service's answer to a delivered call.
///
/// `code` follows the service's own error numbering: 0 is success, anything
/// else is a remote-reported failure. Output values live in `values` keyed by
/// the slot names the method declares. A call that could not be delivered at
/// all never produces a `CallReply` - that surfaces as a `TransportError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallReply {
    pub code: i32,

    #[serde(default)]
    pub values: serde_json::Value,
}

impl CallReply {
    /// Successful reply carrying the given output values.
    pub fn ok(values: serde_json::Value) -> Self {
        Self { code: 0, values }
    }

    /// Failed reply carrying a service error code and no outputs.
    pub fn error(code: i32) -> Self {
        Self {
            code,
            values: serde_json::Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// A live, bound connection to one facet at one scope.
///
/// The connection is created for exactly one call and closed immediately
/// after it, on every exit path. Implementations must make `close` safe to
/// call after a failed `call`.
pub trait ProxyConnection: Send + fmt::Debug {
    /// Issue the single synchronous call this connection was bound for.
    fn call(&mut self, request: &CallRequest) -> Result<CallReply>;

    /// Release the underlying connection.
    fn close(&mut self);
}

/// Factory for facet connections at a given scope.
///
/// Implementations:
/// - `LocalTransport` in the client crate: blocking Unix-domain-socket
///   endpoints under the scope's runtime directory
/// - `MockTransport` in the client's tests: scripted outcomes with attempt
///   and release accounting
pub trait AgentTransport: Send + Sync {
    /// Attempt a synchronous connect to `facet`'s endpoint at `scope`.
    ///
    /// Either returns a fully usable connection or an error - there is no
    /// partially-bound state for callers to observe.
    fn connect(&self, scope: TransportScope, facet: ServiceFacet) -> Result<Box<dyn ProxyConnection>>;
}

/// Host-environment queries the client consumes but does not produce.
///
/// Two production implementations exist: a packaging-aware host that knows
/// the application id and the installed roots of shared resource classes,
/// and a pass-through host for processes outside any packaged-application
/// context. Both queries are read-only and idempotent.
pub trait HostContext: Send + Sync {
    /// Identifier of the packaged application hosting this process, or
    /// `None` when the process runs outside a packaged-application context.
    fn app_id(&self) -> Option<String>;

    /// Installed root directory for the given shared resource class.
    fn global_resource_root(&self, res_type: &str) -> std::result::Result<PathBuf, HostError>;
}
