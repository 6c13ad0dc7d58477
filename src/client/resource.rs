//! Resource facet operations
//!
//! Shared resources are keyed by name alone; there is no versioning and no
//! update-in-place - re-adding a name is the service's concern.

use serde_json::json;

use super::{expect_str, require_str, AgentClient};
use crate::error::Result;
use mlops_agent_interface::ServiceFacet;

impl AgentClient {
    /// Add the resource `name` backed by the file at `path`.
    pub fn resource_add(
        &self,
        name: &str,
        path: &str,
        description: Option<&str>,
        app_info: Option<&str>,
    ) -> Result<()> {
        require_str(name, "name")?;
        require_str(path, "path")?;
        self.call(
            ServiceFacet::Resource,
            "add",
            json!({
                "name": name,
                "path": path,
                "description": description.unwrap_or(""),
                "app_info": app_info.unwrap_or(""),
            }),
        )?;
        Ok(())
    }

    /// Delete the resource `name`.
    pub fn resource_delete(&self, name: &str) -> Result<()> {
        require_str(name, "name")?;
        self.call(ServiceFacet::Resource, "delete", json!({ "name": name }))?;
        Ok(())
    }

    /// Get the record of the resource `name` as JSON text.
    pub fn resource_get(&self, name: &str) -> Result<String> {
        require_str(name, "name")?;
        let reply = self.call(ServiceFacet::Resource, "get", json!({ "name": name }))?;
        let info = expect_str(&reply, "info")?;
        self.resolve(&info)
    }
}
