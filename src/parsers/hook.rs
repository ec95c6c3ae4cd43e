use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::deserializers::null_as_empty;

/// Payload piped to the exporter by a session-end hook. Missing and `null` fields
/// both decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transcript_path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cwd: String,
}

impl HookPayload {
    pub fn transcript_path(&self) -> Option<PathBuf> {
        if self.transcript_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.transcript_path))
        }
    }
}

/// Decode a hook payload and check that the fields needed to locate the output
/// are present.
pub fn parse_hook_payload<R: Read>(reader: R) -> Result<HookPayload> {
    let payload: HookPayload =
        serde_json::from_reader(reader).context("Error parsing hook JSON")?;

    if payload.session_id.is_empty() || payload.cwd.is_empty() {
        bail!("Missing session_id or cwd in hook data");
    }

    Ok(payload)
}
