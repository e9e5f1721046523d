//! Diagnostic hooks tracing call progress.
//!
//! Logging is observability only; these hooks never raise and never
//! influence check outcomes.

use tracing::info;

use crate::hooks::{CallContext, PostCallHook, PreCallHook, Violation};

/// Logs the selected function and its generated arguments before a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStartLogger;

impl PreCallHook for CallStartLogger {
    fn name(&self) -> &str {
        "log.call-start"
    }

    fn before_call(&self, context: &CallContext) -> Result<(), Violation> {
        let arguments = serde_json::to_string(&context.clarity_arguments).unwrap_or_default();
        info!(
            function = %context.selected_function.name,
            %arguments,
            "running function"
        );
        Ok(())
    }
}

/// Logs the execution result after a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallResultLogger;

impl PostCallHook for CallResultLogger {
    fn name(&self) -> &str {
        "log.call-result"
    }

    fn after_call(&self, context: &CallContext) -> Result<(), Violation> {
        match context.function_call.as_ref() {
            Some(call) => {
                let result = serde_json::to_string(&call.result).unwrap_or_default();
                info!(
                    function = %context.selected_function.name,
                    %result,
                    "function completed"
                );
            }
            None => {
                info!(
                    function = %context.selected_function.name,
                    "function completed without a recorded result"
                );
            }
        }
        Ok(())
    }
}
