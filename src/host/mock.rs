//! Mock host context for testing
//!
//! Lets tests script the packaged-application answer and the installed roots
//! per resource class, and count how often the app-context is queried.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use mlops_agent_interface::{HostContext, HostError};

/// Scripted host double
#[derive(Debug)]
pub struct MockHost {
    app_id: Option<String>,
    roots: HashMap<String, PathBuf>,
    app_id_queries: AtomicUsize,
}

impl MockHost {
    /// Host that reports a packaged-application context
    pub fn packaged(app_id: &str) -> Self {
        Self {
            app_id: Some(app_id.to_string()),
            roots: HashMap::new(),
            app_id_queries: AtomicUsize::new(0),
        }
    }

    /// Host that reports no packaged-application context
    pub fn passthrough() -> Self {
        Self {
            app_id: None,
            roots: HashMap::new(),
            app_id_queries: AtomicUsize::new(0),
        }
    }

    /// Script the installed root for a resource class
    pub fn with_root(mut self, res_type: &str, root: &str) -> Self {
        self.roots.insert(res_type.to_string(), PathBuf::from(root));
        self
    }

    /// Number of app-context queries observed
    pub fn app_id_queries(&self) -> usize {
        self.app_id_queries.load(Ordering::SeqCst)
    }
}

impl HostContext for MockHost {
    fn app_id(&self) -> Option<String> {
        self.app_id_queries.fetch_add(1, Ordering::SeqCst);
        self.app_id.clone()
    }

    fn global_resource_root(&self, res_type: &str) -> Result<PathBuf, HostError> {
        self.roots
            .get(res_type)
            .cloned()
            .ok_or_else(|| HostError::RootNotFound(res_type.to_string()))
    }
}
