//! Typed violations raised by verification hooks.

use thiserror::Error;

/// Terminal failure signal for one hook invocation.
///
/// Raising a violation is a hook's only way to report non-compliance; the
/// harness decides whether it aborts the run or is attributed to the call
/// and the run continues. Absence of a violation is the only success
/// signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The argument at the checked position does not have the shape the
    /// verified trait requires.
    #[error("shape violation: {0}")]
    Shape(String),

    /// The call completed without emitting the required event.
    #[error("missing event: {0}")]
    MissingEvent(String),

    /// The required event was emitted with the wrong payload.
    #[error("payload mismatch: expected {expected}, found {actual}")]
    PayloadMismatch { expected: String, actual: String },
}
