//! Operation forwarding to the agent service
//!
//! `AgentClient` exposes one synchronous method per remote operation, split
//! across the pipeline, model, and resource facets. Every call follows the
//! same shape: validate caller arguments before any I/O, bind a proxy for
//! the operation's facet, issue the single remote call, interpret the
//! status, and release the connection on the way out. There is no caching,
//! no retry, and no shared state between calls - concurrent callers each
//! bind their own proxy.

mod model;
mod pipeline;
mod resource;

use std::sync::Arc;

use serde_json::Value;
use tracing::error;

use crate::error::{AgentError, Result};
#[cfg(unix)]
use crate::host::{PackagedHost, PassthroughHost};
use crate::rpk;
use crate::transport;
#[cfg(unix)]
use crate::transport::LocalTransport;
use mlops_agent_interface::{AgentTransport, CallReply, CallRequest, HostContext, ServiceFacet};

#[cfg(unix)]
use crate::config::ClientConfig;

/// Synchronous client facade for the agent service
///
/// Cheap to clone; clones share the transport and host context but nothing
/// else, so they can be handed to independently calling threads.
#[derive(Clone)]
pub struct AgentClient {
    transport: Arc<dyn AgentTransport>,
    host: Arc<dyn HostContext>,
}

impl AgentClient {
    /// Client over the default local transport and configuration.
    #[cfg(unix)]
    pub fn new() -> Self {
        Self::with_config(&ClientConfig::default())
    }

    /// Client over the local transport described by `config`.
    ///
    /// The host context is detected from the process environment once, here:
    /// packaging-aware when a packaged-application context is announced,
    /// pass-through otherwise.
    #[cfg(unix)]
    pub fn with_config(config: &ClientConfig) -> Self {
        let host: Arc<dyn HostContext> = match PackagedHost::from_env() {
            Some(host) => Arc::new(host),
            None => Arc::new(PassthroughHost::new()),
        };
        Self {
            transport: Arc::new(LocalTransport::new(config)),
            host,
        }
    }

    /// Client over caller-provided transport and host implementations.
    pub fn with_parts(transport: Arc<dyn AgentTransport>, host: Arc<dyn HostContext>) -> Self {
        Self { transport, host }
    }

    /// Shared bind -> call -> interpret path used by every operation.
    ///
    /// The proxy handle is dropped on every exit from this function, which
    /// releases the bound connection exactly once per call.
    fn call(&self, facet: ServiceFacet, method: &str, args: Value) -> Result<CallReply> {
        let mut proxy = transport::bind(self.transport.as_ref(), facet)?;
        let reply = proxy.call(&CallRequest::new(method, args))?;
        if !reply.is_success() {
            error!("{} {} failed with remote code {}", facet, method, reply.code);
            return Err(AgentError::Remote { code: reply.code });
        }
        Ok(reply)
    }

    /// Ground packaged asset paths in a queried record payload.
    fn resolve(&self, json_text: &str) -> Result<String> {
        rpk::resolve_packaged_paths(json_text, self.host.as_ref())
    }
}

#[cfg(unix)]
impl Default for AgentClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Required-string precondition shared by the operations
fn require_str(value: &str, what: &'static str) -> Result<()> {
    if value.is_empty() {
        error!("invalid argument: {} must not be empty", what);
        return Err(AgentError::InvalidArgument(what));
    }
    Ok(())
}

/// Required-positive-version precondition
fn require_version(version: u32) -> Result<()> {
    if version == 0 {
        error!("invalid argument: version must be positive");
        return Err(AgentError::InvalidArgument("version"));
    }
    Ok(())
}

// Output extraction. A reply that is missing a declared output slot is a
// protocol violation: the call was not answered in a usable form, so no
// authoritative remote result exists.

fn expect_str(reply: &CallReply, key: &str) -> Result<String> {
    reply
        .values
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| AgentError::Transport(format!("reply missing '{}' value", key)))
}

fn expect_i64(reply: &CallReply, key: &str) -> Result<i64> {
    reply
        .values
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| AgentError::Transport(format!("reply missing '{}' value", key)))
}

fn expect_i32(reply: &CallReply, key: &str) -> Result<i32> {
    expect_i64(reply, key)?
        .try_into()
        .map_err(|_| AgentError::Transport(format!("reply '{}' value out of range", key)))
}

fn expect_u32(reply: &CallReply, key: &str) -> Result<u32> {
    reply
        .values
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| AgentError::Transport(format!("reply missing '{}' value", key)))
}
