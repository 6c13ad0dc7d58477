//! Mock transport implementation for testing
//!
//! Scripted stand-in for the agent service: tests choose which scopes accept
//! connections and what every delivered call replies, and assert afterwards
//! on the recorded connect attempts, calls, and connection releases.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use mlops_agent_interface::{
    AgentTransport, CallReply, CallRequest, ProxyConnection, Result, ServiceFacet, TransportError,
    TransportScope,
};

/// How a scope answers connect attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeBehavior {
    /// Connections succeed
    Accept,

    /// Connections are refused
    Refuse,
}

#[derive(Debug)]
struct MockState {
    scopes: HashMap<TransportScope, ScopeBehavior>,
    reply: CallReply,
    fail_calls: bool,
    connect_attempts: Vec<(TransportScope, ServiceFacet)>,
    calls: Vec<CallRequest>,
    releases: usize,
}

/// Scripted transport double with attempt and release accounting
#[derive(Debug, Clone)]
pub struct MockTransport {
    state: Arc<RwLock<MockState>>,
}

impl MockTransport {
    /// New mock where every scope accepts and every call replies success
    /// with no output values.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockState {
                scopes: HashMap::new(),
                reply: CallReply::ok(serde_json::json!({})),
                fail_calls: false,
                connect_attempts: Vec::new(),
                calls: Vec::new(),
                releases: 0,
            })),
        }
    }

    /// Script how `scope` answers connect attempts
    pub fn set_scope(&self, scope: TransportScope, behavior: ScopeBehavior) {
        self.state.write().unwrap().scopes.insert(scope, behavior);
    }

    /// Script the reply every delivered call returns
    pub fn set_reply(&self, reply: CallReply) {
        self.state.write().unwrap().reply = reply;
    }

    /// Make every call fail at the delivery layer (bound but not delivered)
    pub fn fail_calls(&self) {
        self.state.write().unwrap().fail_calls = true;
    }

    /// Connect attempts observed so far, in order
    pub fn connect_attempts(&self) -> Vec<(TransportScope, ServiceFacet)> {
        self.state.read().unwrap().connect_attempts.clone()
    }

    /// Requests delivered so far, in order
    pub fn calls(&self) -> Vec<CallRequest> {
        self.state.read().unwrap().calls.clone()
    }

    /// Most recently delivered request
    pub fn last_call(&self) -> Option<CallRequest> {
        self.state.read().unwrap().calls.last().cloned()
    }

    /// Number of connection releases observed
    pub fn release_count(&self) -> usize {
        self.state.read().unwrap().releases
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentTransport for MockTransport {
    fn connect(&self, scope: TransportScope, facet: ServiceFacet) -> Result<Box<dyn ProxyConnection>> {
        let mut state = self.state.write().unwrap();
        state.connect_attempts.push((scope, facet));

        let behavior = state
            .scopes
            .get(&scope)
            .copied()
            .unwrap_or(ScopeBehavior::Accept);
        match behavior {
            ScopeBehavior::Accept => Ok(Box::new(MockConnection {
                state: Arc::clone(&self.state),
            })),
            ScopeBehavior::Refuse => Err(TransportError::EndpointNotFound(PathBuf::from(
                format!("mock://{}/{}.sock", scope, facet),
            ))),
        }
    }
}

#[derive(Debug)]
struct MockConnection {
    state: Arc<RwLock<MockState>>,
}

impl ProxyConnection for MockConnection {
    fn call(&mut self, request: &CallRequest) -> Result<CallReply> {
        let mut state = self.state.write().unwrap();
        state.calls.push(request.clone());
        if state.fail_calls {
            return Err(TransportError::Protocol(
                "scripted delivery failure".to_string(),
            ));
        }
        Ok(state.reply.clone())
    }

    fn close(&mut self) {
        self.state.write().unwrap().releases += 1;
    }
}
