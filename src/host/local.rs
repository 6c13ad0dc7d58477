//! Process-environment implementations of HostContext
//!
//! Packaged applications are announced to their processes through the
//! environment: `MLOPS_APP_ID` carries the application id, and shared
//! resource packages are installed under a per-class directory below
//! `MLOPS_RES_ROOT`. Outside that context `PassthroughHost` answers every
//! app-context query with "not packaged", which leaves queried records
//! untouched.

use std::env;
use std::path::PathBuf;

use mlops_agent_interface::{HostContext, HostError};

/// Environment variable naming the packaged application id
pub const APP_ID_VAR: &str = "MLOPS_APP_ID";

/// Environment variable overriding the installed resource base directory
pub const RES_ROOT_VAR: &str = "MLOPS_RES_ROOT";

const DEFAULT_RES_ROOT: &str = "/usr/share/mlops-agent/res";

/// Packaging-aware host context
///
/// Knows the application id and resolves each resource class to its
/// installed root directory under the resource base.
#[derive(Debug, Clone)]
pub struct PackagedHost {
    app_id: String,
    resource_base: PathBuf,
}

impl PackagedHost {
    pub fn new(app_id: impl Into<String>, resource_base: impl Into<PathBuf>) -> Self {
        Self {
            app_id: app_id.into(),
            resource_base: resource_base.into(),
        }
    }

    /// Detect a packaged-application context from the process environment.
    ///
    /// Returns `None` when `MLOPS_APP_ID` is unset or empty, in which case
    /// the caller should fall back to `PassthroughHost`.
    pub fn from_env() -> Option<Self> {
        let app_id = env::var(APP_ID_VAR).ok().filter(|id| !id.is_empty())?;
        let resource_base = env::var(RES_ROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_RES_ROOT));
        Some(Self::new(app_id, resource_base))
    }
}

impl HostContext for PackagedHost {
    fn app_id(&self) -> Option<String> {
        Some(self.app_id.clone())
    }

    fn global_resource_root(&self, res_type: &str) -> Result<PathBuf, HostError> {
        if res_type.is_empty() {
            return Err(HostError::Query("empty resource type".to_string()));
        }
        let root = self.resource_base.join(res_type);
        if root.is_dir() {
            Ok(root)
        } else {
            Err(HostError::RootNotFound(res_type.to_string()))
        }
    }
}

/// Host context for processes outside any packaged-application context
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughHost;

impl PassthroughHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostContext for PassthroughHost {
    fn app_id(&self) -> Option<String> {
        None
    }

    fn global_resource_root(&self, res_type: &str) -> Result<PathBuf, HostError> {
        Err(HostError::RootNotFound(res_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_packaged_host_resolves_existing_root() {
        let base = tempdir().unwrap();
        std::fs::create_dir(base.path().join("imgcls")).unwrap();

        let host = PackagedHost::new("org.example.classifier", base.path());
        assert_eq!(host.app_id().as_deref(), Some("org.example.classifier"));

        let root = host.global_resource_root("imgcls").unwrap();
        assert_eq!(root, base.path().join("imgcls"));
    }

    #[test]
    fn test_packaged_host_missing_root() {
        let base = tempdir().unwrap();
        let host = PackagedHost::new("org.example.classifier", base.path());

        let err = host.global_resource_root("speech").unwrap_err();
        assert!(matches!(err, HostError::RootNotFound(t) if t == "speech"));
    }

    #[test]
    fn test_packaged_host_rejects_empty_res_type() {
        let host = PackagedHost::new("org.example.app", "/tmp");
        assert!(matches!(
            host.global_resource_root(""),
            Err(HostError::Query(_))
        ));
    }

    #[test]
    fn test_passthrough_host_has_no_context() {
        let host = PassthroughHost::new();
        assert!(host.app_id().is_none());
        assert!(host.global_resource_root("imgcls").is_err());
    }
}
