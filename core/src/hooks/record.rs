//! Structured record emitted for every hook run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use uuid::Uuid;

use super::context::CallContext;

/// Phase a hook runs in relative to call execution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HookPhase {
    Pre,
    Post,
}

/// Audit entry for a single hook invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookRunRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub phase: HookPhase,
    pub hook_name: String,
    pub function_name: String,
    pub duration_ms: u128,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
    pub payload_hash: String,
}

impl HookRunRecord {
    pub fn new(
        phase: HookPhase,
        hook_name: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            phase,
            hook_name: hook_name.into(),
            function_name: function_name.into(),
            duration_ms: 0,
            violation: None,
            payload_hash: String::new(),
        }
    }
}

/// Hash of the serialized context, linking records to the call they audit.
pub fn payload_hash(context: &CallContext) -> String {
    let serialized = serde_json::to_vec(context).unwrap_or_default();
    let mut hasher = Sha1::new();
    hasher.update(&serialized);
    hex::encode(hasher.finalize())
}
