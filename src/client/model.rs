//! Model facet operations
//!
//! Models are registered under a name and receive service-assigned,
//! monotonically increasing versions; at most one version per name is
//! activated at a time. The "get" operations return the stored record as
//! JSON text with packaged asset paths grounded at their installed roots.

use serde_json::json;

use super::{expect_str, expect_u32, require_str, require_version, AgentClient};
use crate::error::Result;
use mlops_agent_interface::ServiceFacet;

impl AgentClient {
    /// Register a model file under `name`.
    ///
    /// `activate` makes the new version the activated one. Returns the
    /// service-assigned version.
    pub fn model_register(
        &self,
        name: &str,
        path: &str,
        activate: bool,
        description: Option<&str>,
        app_info: Option<&str>,
    ) -> Result<u32> {
        require_str(name, "name")?;
        require_str(path, "path")?;
        let reply = self.call(
            ServiceFacet::Model,
            "register",
            json!({
                "name": name,
                "path": path,
                "activate": activate,
                "description": description.unwrap_or(""),
                "app_info": app_info.unwrap_or(""),
            }),
        )?;
        expect_u32(&reply, "version")
    }

    /// Update the description of the model `name` at `version`.
    pub fn model_update_description(
        &self,
        name: &str,
        version: u32,
        description: &str,
    ) -> Result<()> {
        require_str(name, "name")?;
        require_str(description, "description")?;
        require_version(version)?;
        self.call(
            ServiceFacet::Model,
            "update_description",
            json!({ "name": name, "version": version, "description": description }),
        )?;
        Ok(())
    }

    /// Activate the model `name` at `version`.
    pub fn model_activate(&self, name: &str, version: u32) -> Result<()> {
        require_str(name, "name")?;
        require_version(version)?;
        self.call(
            ServiceFacet::Model,
            "activate",
            json!({ "name": name, "version": version }),
        )?;
        Ok(())
    }

    /// Get the record of the model `name` at `version` as JSON text.
    pub fn model_get(&self, name: &str, version: u32) -> Result<String> {
        require_str(name, "name")?;
        require_version(version)?;
        let reply = self.call(
            ServiceFacet::Model,
            "get",
            json!({ "name": name, "version": version }),
        )?;
        let info = expect_str(&reply, "info")?;
        self.resolve(&info)
    }

    /// Get the record of the activated version of the model `name`.
    pub fn model_get_activated(&self, name: &str) -> Result<String> {
        require_str(name, "name")?;
        let reply = self.call(ServiceFacet::Model, "get_activated", json!({ "name": name }))?;
        let info = expect_str(&reply, "info")?;
        self.resolve(&info)
    }

    /// Get the records of every version of the model `name` as a JSON array.
    pub fn model_get_all(&self, name: &str) -> Result<String> {
        require_str(name, "name")?;
        let reply = self.call(ServiceFacet::Model, "get_all", json!({ "name": name }))?;
        let info = expect_str(&reply, "info")?;
        self.resolve(&info)
    }

    /// Delete the model `name` at `version`.
    ///
    /// `version` 0 requests deletion of every version of `name`. `force` is
    /// forwarded verbatim; whether an activated version may be deleted is
    /// asserted by the service, not here.
    pub fn model_delete(&self, name: &str, version: u32, force: bool) -> Result<()> {
        require_str(name, "name")?;
        self.call(
            ServiceFacet::Model,
            "delete",
            json!({ "name": name, "version": version, "force": force }),
        )?;
        Ok(())
    }
}
