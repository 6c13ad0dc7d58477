/*!
 * Configuration types for the MLOps agent client
 */

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AgentError, Result};
use mlops_agent_interface::SERVICE_NAME;

/// Client configuration
///
/// Everything here has a working default; a configuration file is only
/// needed to point the client at a relocated service or to adjust logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Well-known service name the endpoints are registered under
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Runtime directory probed at the system scope
    #[serde(default = "default_system_runtime_dir")]
    pub system_runtime_dir: PathBuf,

    /// Runtime directory probed at the session scope
    /// (None = `$XDG_RUNTIME_DIR/<service_name>`)
    #[serde(default)]
    pub session_runtime_dir: Option<PathBuf>,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stdout)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

fn default_service_name() -> String {
    SERVICE_NAME.to_string()
}

fn default_system_runtime_dir() -> PathBuf {
    PathBuf::from("/run").join(SERVICE_NAME)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            system_runtime_dir: default_system_runtime_dir(),
            session_runtime_dir: None,
            log_level: LogLevel::Info,
            log_file: None,
            verbose: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AgentError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: ClientConfig = toml::from_str(&contents)
            .map_err(|e| AgentError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| AgentError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)
            .map_err(|e| AgentError::Config(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.service_name.is_empty() {
            return Err(AgentError::Config("service_name must not be empty".to_string()));
        }
        if self.system_runtime_dir.as_os_str().is_empty() {
            return Err(AgentError::Config(
                "system_runtime_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    Warn,

    /// Info, warnings, and errors
    #[default]
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
