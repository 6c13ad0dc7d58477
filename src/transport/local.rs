//! Unix-domain-socket implementation of AgentTransport
//!
//! This is the production transport. Each facet of the agent service listens
//! on `<runtime dir>/<facet>.sock`, where the runtime directory depends on
//! the scope: a machine-wide directory for the system scope, the per-user
//! `$XDG_RUNTIME_DIR/<service>` directory for the session scope. A bound
//! connection carries exactly one newline-delimited JSON request and one
//! newline-delimited JSON reply.

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

use crate::config::ClientConfig;
use mlops_agent_interface::{
    AgentTransport, CallReply, CallRequest, ProxyConnection, Result, ServiceFacet, TransportError,
    TransportScope,
};

/// Unix-domain-socket transport over the service's runtime directories
#[derive(Debug, Clone)]
pub struct LocalTransport {
    service_name: String,
    system_dir: PathBuf,
    session_dir: Option<PathBuf>,
}

impl LocalTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
            system_dir: config.system_runtime_dir.clone(),
            session_dir: config.session_runtime_dir.clone(),
        }
    }

    /// Endpoint socket path for `facet` at `scope`
    fn endpoint_path(&self, scope: TransportScope, facet: ServiceFacet) -> Result<PathBuf> {
        let dir = match scope {
            TransportScope::System => self.system_dir.clone(),
            TransportScope::Session => match &self.session_dir {
                Some(dir) => dir.clone(),
                None => dirs::runtime_dir()
                    .map(|dir| dir.join(&self.service_name))
                    .ok_or_else(|| {
                        TransportError::EndpointNotFound(PathBuf::from(format!(
                            "$XDG_RUNTIME_DIR/{}",
                            self.service_name
                        )))
                    })?,
            },
        };
        Ok(dir.join(format!("{}.sock", facet.endpoint())))
    }
}

impl AgentTransport for LocalTransport {
    fn connect(&self, scope: TransportScope, facet: ServiceFacet) -> Result<Box<dyn ProxyConnection>> {
        let path = self.endpoint_path(scope, facet)?;
        if !path.exists() {
            return Err(TransportError::EndpointNotFound(path));
        }
        let stream = UnixStream::connect(&path)?;
        Ok(Box::new(SocketConnection {
            stream: Some(stream),
        }))
    }
}

/// One bound socket, good for a single request/reply exchange
#[derive(Debug)]
struct SocketConnection {
    stream: Option<UnixStream>,
}

impl ProxyConnection for SocketConnection {
    fn call(&mut self, request: &CallRequest) -> Result<CallReply> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            TransportError::Protocol("connection already closed".to_string())
        })?;

        let mut line = serde_json::to_string(request)
            .map_err(|e| TransportError::Protocol(format!("request encode failed: {}", e)))?;
        line.push('\n');
        stream.write_all(line.as_bytes())?;
        stream.flush()?;

        let mut reply_line = String::new();
        let mut reader = BufReader::new(&*stream);
        let n = reader.read_line(&mut reply_line)?;
        if n == 0 {
            return Err(TransportError::Protocol(
                "service closed the connection before replying".to_string(),
            ));
        }

        let reply: CallReply = serde_json::from_str(reply_line.trim_end())
            .map_err(|e| TransportError::Protocol(format!("reply decode failed: {}", e)))?;
        Ok(reply)
    }

    fn close(&mut self) {
        // Shutdown before drop so the peer sees EOF promptly.
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(std::net::Shutdown::Both);
        }
    }
}
