//! Call context handed to every hook.

use serde::{Deserialize, Serialize};
use tryst_values::ClarityValue;

use super::events::EmittedEvent;

/// Formal parameter of a contract function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParameter {
    pub name: String,
    pub type_signature: String,
}

/// Descriptor of the function selected for one simulated call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSignature {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        type_signature: impl Into<String>,
    ) -> Self {
        self.parameters.push(FunctionParameter {
            name: name.into(),
            type_signature: type_signature.into(),
        });
        self
    }
}

/// Result of executing one simulated call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    pub result: ClarityValue,
    #[serde(default)]
    pub events: Vec<EmittedEvent>,
}

impl FunctionCall {
    pub fn new(result: ClarityValue) -> Self {
        Self {
            result,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: EmittedEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// Record describing one simulated call, owned by the harness for the
/// call's duration.
///
/// The harness builds the context before execution with one generated
/// argument per formal parameter, in declaration order. `function_call`
/// stays empty until the call completes, so pre-call hooks never observe
/// a result or events. Hooks receive a shared reference and must not
/// retain it past the call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallContext {
    pub selected_function: FunctionSignature,
    pub clarity_arguments: Vec<ClarityValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

impl CallContext {
    pub fn new(selected_function: FunctionSignature, clarity_arguments: Vec<ClarityValue>) -> Self {
        Self {
            selected_function,
            clarity_arguments,
            function_call: None,
        }
    }

    /// Attach the execution outcome once the call completes.
    pub fn with_function_call(mut self, function_call: FunctionCall) -> Self {
        self.function_call = Some(function_call);
        self
    }

    /// Generated argument at the given parameter position.
    pub fn argument(&self, index: usize) -> Option<&ClarityValue> {
        self.clarity_arguments.get(index)
    }
}
