/*!
 * Error types for the MLOps agent client
 */

use std::fmt;

use mlops_agent_interface::{ServiceFacet, TransportError};

pub type Result<T> = std::result::Result<T, AgentError>;

/// Status code constants for integer-status callers.
///
/// Negative values are local failures in errno style; positive values are
/// remote service codes surfaced verbatim through `AgentError::Remote`.
pub const STATUS_SUCCESS: i32 = 0;
pub const STATUS_INVALID_ARGUMENT: i32 = -22;
pub const STATUS_UNAVAILABLE: i32 = -5;
pub const STATUS_TRANSPORT: i32 = -32;
pub const STATUS_MALFORMED_PAYLOAD: i32 = -71;
pub const STATUS_NO_RESOURCE_ROOT: i32 = -2;

#[derive(Debug)]
pub enum AgentError {
    /// Caller-supplied input failed a precondition; detected before any I/O
    InvalidArgument(&'static str),

    /// No transport scope yielded a live connection to the requested facet
    Unavailable(ServiceFacet),

    /// Call delivered; the service reported a nonzero status
    Remote { code: i32 },

    /// Call could not be delivered despite a bound connection
    Transport(String),

    /// A "get" result, or its embedded app-context, could not be parsed
    MalformedPayload(String),

    /// The host environment could not supply an installed resource root
    ResourceRootUnavailable { res_type: String },

    /// Client configuration error
    Config(String),
}

impl AgentError {
    /// Integer status for this error, following the service ABI numbering.
    pub fn status_code(&self) -> i32 {
        match self {
            AgentError::InvalidArgument(_) => STATUS_INVALID_ARGUMENT,
            AgentError::Unavailable(_) => STATUS_UNAVAILABLE,
            AgentError::Remote { code } => *code,
            AgentError::Transport(_) => STATUS_TRANSPORT,
            AgentError::MalformedPayload(_) => STATUS_MALFORMED_PAYLOAD,
            AgentError::ResourceRootUnavailable { .. } => STATUS_NO_RESOURCE_ROOT,
            AgentError::Config(_) => STATUS_INVALID_ARGUMENT,
        }
    }

    /// Check whether the service itself reported this failure.
    ///
    /// For remote failures an authoritative answer exists; for everything
    /// else the operation never reached the service or its reply was unusable.
    pub fn is_remote(&self) -> bool {
        matches!(self, AgentError::Remote { .. })
    }

    /// Check whether this failure happened before any connection attempt.
    pub fn is_local_precondition(&self) -> bool {
        matches!(
            self,
            AgentError::InvalidArgument(_) | AgentError::Config(_)
        )
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::InvalidArgument(what) => {
                write!(f, "Invalid argument: {}", what)
            }
            AgentError::Unavailable(facet) => {
                write!(f, "Service unavailable: no live {} endpoint at any scope", facet)
            }
            AgentError::Remote { code } => {
                write!(f, "Remote failure: service returned code {}", code)
            }
            AgentError::Transport(msg) => {
                write!(f, "Transport failure: {}", msg)
            }
            AgentError::MalformedPayload(msg) => {
                write!(f, "Malformed payload: {}", msg)
            }
            AgentError::ResourceRootUnavailable { res_type } => {
                write!(f, "No installed resource root for type: {}", res_type)
            }
            AgentError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
        }
    }
}

impl std::error::Error for AgentError {}

impl From<TransportError> for AgentError {
    fn from(err: TransportError) -> Self {
        AgentError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::MalformedPayload(format!("JSON parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AgentError::InvalidArgument("name").status_code(),
            STATUS_INVALID_ARGUMENT
        );
        assert_eq!(
            AgentError::Unavailable(ServiceFacet::Model).status_code(),
            STATUS_UNAVAILABLE
        );
        assert_eq!(AgentError::Remote { code: 95 }.status_code(), 95);
        assert_eq!(
            AgentError::Transport("connection reset".to_string()).status_code(),
            STATUS_TRANSPORT
        );
        assert_eq!(
            AgentError::MalformedPayload("bad json".to_string()).status_code(),
            STATUS_MALFORMED_PAYLOAD
        );
        assert_eq!(
            AgentError::ResourceRootUnavailable {
                res_type: "imgcls".to_string()
            }
            .status_code(),
            STATUS_NO_RESOURCE_ROOT
        );
    }

    #[test]
    fn test_status_constants() {
        assert_eq!(STATUS_SUCCESS, 0);
        assert_eq!(STATUS_INVALID_ARGUMENT, -22);
        assert_eq!(STATUS_UNAVAILABLE, -5);
        assert_eq!(STATUS_TRANSPORT, -32);
        assert_eq!(STATUS_MALFORMED_PAYLOAD, -71);
        assert_eq!(STATUS_NO_RESOURCE_ROOT, -2);
    }

    #[test]
    fn test_remote_code_surfaced_verbatim() {
        for code in [1, 22, 1234] {
            let err = AgentError::Remote { code };
            assert_eq!(err.status_code(), code);
            assert!(err.is_remote());
        }
    }

    #[test]
    fn test_local_errors_are_not_remote() {
        assert!(!AgentError::InvalidArgument("path").is_remote());
        assert!(!AgentError::Unavailable(ServiceFacet::Pipeline).is_remote());
        assert!(!AgentError::Transport("eof".to_string()).is_remote());
    }

    #[test]
    fn test_precondition_classification() {
        assert!(AgentError::InvalidArgument("version").is_local_precondition());
        assert!(AgentError::Config("empty service name".to_string()).is_local_precondition());
        assert!(!AgentError::Unavailable(ServiceFacet::Resource).is_local_precondition());
        assert!(!AgentError::Remote { code: 7 }.is_local_precondition());
    }

    #[test]
    fn test_error_display() {
        let err = AgentError::InvalidArgument("name");
        assert_eq!(err.to_string(), "Invalid argument: name");

        let err = AgentError::Unavailable(ServiceFacet::Model);
        assert!(err.to_string().contains("model"));

        let err = AgentError::Remote { code: 13 };
        assert!(err.to_string().contains("13"));

        let err = AgentError::ResourceRootUnavailable {
            res_type: "imgcls".to_string(),
        };
        assert!(err.to_string().contains("imgcls"));
    }

    #[test]
    fn test_from_transport_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let err: AgentError = TransportError::Io(io_err).into();
        match &err {
            AgentError::Transport(msg) => assert!(msg.contains("pipe broken")),
            other => panic!("Expected AgentError::Transport, got {:?}", other),
        }
        assert_eq!(err.status_code(), STATUS_TRANSPORT);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not valid json")
            .expect_err("should fail to parse invalid JSON");
        let err: AgentError = json_err.into();
        match &err {
            AgentError::MalformedPayload(msg) => assert!(msg.contains("JSON parse error")),
            other => panic!("Expected AgentError::MalformedPayload, got {:?}", other),
        }
    }
}
