//! Pipeline facet operations
//!
//! Pipeline descriptions are registered under a caller-chosen name; launching
//! a registered description produces an instance id that the start, stop,
//! destroy, and state operations act on. All lifecycle state lives in the
//! service - the client only requests transitions and queries.

use serde_json::json;

use super::{expect_i32, expect_i64, expect_str, require_str, AgentClient};
use crate::error::Result;
use mlops_agent_interface::ServiceFacet;

impl AgentClient {
    /// Set (register or replace) the description of the pipeline `name`.
    pub fn pipeline_set_description(&self, name: &str, pipeline_desc: &str) -> Result<()> {
        require_str(name, "name")?;
        require_str(pipeline_desc, "pipeline description")?;
        self.call(
            ServiceFacet::Pipeline,
            "set_pipeline",
            json!({ "name": name, "description": pipeline_desc }),
        )?;
        Ok(())
    }

    /// Get the registered description of the pipeline `name`.
    pub fn pipeline_get_description(&self, name: &str) -> Result<String> {
        require_str(name, "name")?;
        let reply = self.call(ServiceFacet::Pipeline, "get_pipeline", json!({ "name": name }))?;
        expect_str(&reply, "description")
    }

    /// Delete the registered description of the pipeline `name`.
    pub fn pipeline_delete(&self, name: &str) -> Result<()> {
        require_str(name, "name")?;
        self.call(ServiceFacet::Pipeline, "delete_pipeline", json!({ "name": name }))?;
        Ok(())
    }

    /// Launch the registered pipeline `name`.
    ///
    /// Returns the service-assigned instance id the other lifecycle
    /// operations take.
    pub fn pipeline_launch(&self, name: &str) -> Result<i64> {
        require_str(name, "name")?;
        let reply = self.call(ServiceFacet::Pipeline, "launch_pipeline", json!({ "name": name }))?;
        expect_i64(&reply, "id")
    }

    /// Start the launched pipeline instance `id`.
    pub fn pipeline_start(&self, id: i64) -> Result<()> {
        self.call(ServiceFacet::Pipeline, "start_pipeline", json!({ "id": id }))?;
        Ok(())
    }

    /// Stop the launched pipeline instance `id`.
    pub fn pipeline_stop(&self, id: i64) -> Result<()> {
        self.call(ServiceFacet::Pipeline, "stop_pipeline", json!({ "id": id }))?;
        Ok(())
    }

    /// Destroy the launched pipeline instance `id`.
    pub fn pipeline_destroy(&self, id: i64) -> Result<()> {
        self.call(ServiceFacet::Pipeline, "destroy_pipeline", json!({ "id": id }))?;
        Ok(())
    }

    /// Get the state of the launched pipeline instance `id`.
    ///
    /// The state code is the service's own numbering, surfaced as-is.
    pub fn pipeline_get_state(&self, id: i64) -> Result<i32> {
        let reply = self.call(ServiceFacet::Pipeline, "get_state", json!({ "id": id }))?;
        expect_i32(&reply, "state")
    }
}
