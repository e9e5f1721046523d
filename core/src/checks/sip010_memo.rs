//! SIP-010 memo echo check.
//!
//! A fungible token's `transfer` function takes an optional memo as its
//! fourth argument. When the caller supplies one, a compliant token must
//! re-emit it, byte for byte, through a print event.

use tracing::debug;
use tryst_values::{to_canonical_hex, ClarityValue};

use crate::hooks::events::first_event_of_kind;
use crate::hooks::{CallContext, PostCallHook, Violation};

/// Function name the token standard fixes for transfers.
pub const TRANSFER_FUNCTION: &str = "transfer";

/// Position of the optional memo in the transfer signature, zero-indexed.
pub const MEMO_ARGUMENT_INDEX: usize = 3;

/// Event kind a compliant transfer prints the memo through.
pub const PRINT_EVENT: &str = "print_event";

/// Post-call check that a supplied memo was echoed through the print
/// event.
///
/// The function name, argument position, and event kind come from the
/// token standard being verified, not from the contract under test, so
/// they are fixed defaults rather than discovered dynamically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sip010MemoCheck {
    function_name: String,
    memo_argument_index: usize,
    event_kind: String,
}

impl Sip010MemoCheck {
    pub fn new() -> Self {
        Self {
            function_name: TRANSFER_FUNCTION.to_string(),
            memo_argument_index: MEMO_ARGUMENT_INDEX,
            event_kind: PRINT_EVENT.to_string(),
        }
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn with_memo_argument_index(mut self, index: usize) -> Self {
        self.memo_argument_index = index;
        self
    }

    pub fn with_event_kind(mut self, kind: impl Into<String>) -> Self {
        self.event_kind = kind.into();
        self
    }
}

impl Default for Sip010MemoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PostCallHook for Sip010MemoCheck {
    fn name(&self) -> &str {
        "sip010.memo-echo"
    }

    fn after_call(&self, context: &CallContext) -> Result<(), Violation> {
        if context.selected_function.name != self.function_name {
            return Ok(());
        }

        let Some(call) = context.function_call.as_ref() else {
            // Result and events are undefined before execution; nothing to
            // verify against.
            return Ok(());
        };

        let memo = context.argument(self.memo_argument_index).ok_or_else(|| {
            Violation::Shape(format!(
                "the {} function must take the memo as argument {}",
                self.function_name, self.memo_argument_index
            ))
        })?;

        let inner = match memo {
            // The memo is optional; nothing has to be printed for `none`.
            ClarityValue::OptionalNone => return Ok(()),
            ClarityValue::OptionalSome(inner) => inner,
            _ => {
                return Err(Violation::Shape(
                    "the memo argument has to be an option type".to_string(),
                ));
            }
        };

        // Compare against the unwrapped memo, not the `some` wrapper.
        let expected = to_canonical_hex(inner);

        let Some(event) = first_event_of_kind(&call.events, &self.event_kind) else {
            return Err(Violation::MissingEvent(format!(
                "the {} function must emit the {} containing the memo",
                self.function_name, self.event_kind
            )));
        };

        if event.payload != expected {
            return Err(Violation::PayloadMismatch {
                expected,
                actual: event.payload.clone(),
            });
        }

        debug!(
            function = %self.function_name,
            memo = %expected,
            "memo echoed through the print event"
        );
        Ok(())
    }
}
