//! Events emitted by a simulated call, in emission order.

use serde::{Deserialize, Serialize};

/// One event emitted during call execution.
///
/// `payload` is the canonical hex the contract printed, suitable for exact
/// string comparison against an expected encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmittedEvent {
    pub kind: String,
    pub payload: String,
}

impl EmittedEvent {
    pub fn new(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }
}

/// First event of the given kind, earliest emission wins.
///
/// Later duplicates of the same kind are ignored; callers needing every
/// match should scan the slice themselves.
pub fn first_event_of_kind<'a>(events: &'a [EmittedEvent], kind: &str) -> Option<&'a EmittedEvent> {
    events.iter().find(|event| event.kind == kind)
}
