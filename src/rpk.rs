/*!
 * Packaged-resource path resolution for queried records
 *
 * Model and resource records may describe assets that ship inside an
 * installable resource package (RPK) rather than at a bare filesystem path.
 * The service stores such paths relative to the package; before a record
 * reaches the caller, the relative path has to be grounded at the installed
 * root of the record's resource class.
 */

use serde_json::Value;
use tracing::{debug, error};

use crate::error::{AgentError, Result};
use mlops_agent_interface::HostContext;

/// Flag value marking a record's asset as packaged
const PACKAGED_FLAG: &str = "T";

/// Rewrite packaged asset paths in a queried record set.
///
/// `json_text` is the payload a "get" operation returned: a single record
/// object or an array of them. Records whose embedded app-context carries
/// `is_rpk == "T"` get their `path` rewritten to
/// `<installed root>/<original path>`; every other record passes through
/// untouched. Outside a packaged-application context the input text is
/// returned unchanged.
///
/// Either every record resolves or the whole call fails - a partially
/// rewritten result is never returned, because an unrewritten packaged path
/// is unusable to the caller.
pub fn resolve_packaged_paths(json_text: &str, host: &dyn HostContext) -> Result<String> {
    let mut root: Value = serde_json::from_str(json_text).map_err(|e| {
        error!("failed to parse queried record set: {}", e);
        AgentError::MalformedPayload(format!("record set is not valid JSON: {}", e))
    })?;

    // The app context can only be evaluated at call time; query it once per
    // call, never cache it.
    if host.app_id().is_none() {
        debug!("not a packaged application context");
        return Ok(json_text.to_owned());
    }

    match &mut root {
        Value::Object(record) => resolve_record(record, host)?,
        Value::Array(records) => {
            // An empty result is never a legitimate "found nothing" signal;
            // absence of results is communicated by the remote status code.
            if records.is_empty() {
                return Err(AgentError::MalformedPayload(
                    "no records in queried result".to_string(),
                ));
            }
            for record in records.iter_mut() {
                let record = record.as_object_mut().ok_or_else(|| {
                    AgentError::MalformedPayload("record is not an object".to_string())
                })?;
                resolve_record(record, host)?;
            }
        }
        _ => {
            return Err(AgentError::MalformedPayload(
                "record set is neither an object nor an array".to_string(),
            ));
        }
    }

    serde_json::to_string_pretty(&root).map_err(AgentError::from)
}

fn resolve_record(
    record: &mut serde_json::Map<String, Value>,
    host: &dyn HostContext,
) -> Result<()> {
    let app_info_text = record
        .get("app_info")
        .and_then(Value::as_str)
        .ok_or_else(|| AgentError::MalformedPayload("record has no app_info field".to_string()))?;

    // app_info is a JSON document nested inside a string field; decode it as
    // a second, independent document.
    let app_info: Value = serde_json::from_str(app_info_text).map_err(|e| {
        error!("failed to parse app_info of a queried record: {}", e);
        AgentError::MalformedPayload(format!("app_info is not valid JSON: {}", e))
    })?;
    let app_info = app_info
        .as_object()
        .ok_or_else(|| AgentError::MalformedPayload("app_info is not an object".to_string()))?;

    if app_info.get("is_rpk").and_then(Value::as_str) != Some(PACKAGED_FLAG) {
        return Ok(());
    }

    let res_type = app_info
        .get("res_type")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AgentError::MalformedPayload("packaged record has no res_type".to_string())
        })?;
    let ori_path = record
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| AgentError::MalformedPayload("packaged record has no path".to_string()))?;

    let root = host.global_resource_root(res_type).map_err(|e| {
        error!("failed to get global resource path: {}", e);
        AgentError::ResourceRootUnavailable {
            res_type: res_type.to_string(),
        }
    })?;

    let resolved = root.join(ori_path);
    record.insert(
        "path".to_string(),
        Value::String(resolved.to_string_lossy().into_owned()),
    );
    Ok(())
}
