//! Loading hook configuration documents.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::checks::sip010_memo::{MEMO_ARGUMENT_INDEX, PRINT_EVENT, TRANSFER_FUNCTION};
use crate::checks::{CallResultLogger, CallStartLogger, Sip010MemoCheck};

use super::registry::HookRegistry;

const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// Errors produced while reading hook configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookConfigError {
    #[error("invalid hook configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to read configuration: {0}")]
    Io(String),
}

/// Hook configuration parsed from a TOML document.
///
/// ```toml
/// schemaVersion = "1.0"
/// logCallStart = true
/// logCallResult = true
///
/// [[checks]]
/// kind = "memo-echo"
/// functionName = "transfer"
/// memoArgumentIndex = 3
/// eventKind = "print_event"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookConfig {
    schema_version: String,
    #[serde(default = "default_enabled")]
    log_call_start: bool,
    #[serde(default = "default_enabled")]
    log_call_result: bool,
    #[serde(default)]
    checks: Vec<CheckConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum CheckConfig {
    #[serde(rename_all = "camelCase")]
    MemoEcho {
        #[serde(default = "default_function_name")]
        function_name: String,
        #[serde(default = "default_memo_argument_index")]
        memo_argument_index: usize,
        #[serde(default = "default_event_kind")]
        event_kind: String,
    },
}

impl CheckConfig {
    fn validate(&self) -> Result<(), HookConfigError> {
        match self {
            CheckConfig::MemoEcho {
                function_name,
                event_kind,
                ..
            } => {
                if function_name.trim().is_empty() {
                    return Err(HookConfigError::InvalidConfiguration(
                        "memo-echo check requires a functionName".to_string(),
                    ));
                }
                if event_kind.trim().is_empty() {
                    return Err(HookConfigError::InvalidConfiguration(
                        "memo-echo check requires an eventKind".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

impl HookConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml(document: &str) -> Result<Self, HookConfigError> {
        let parsed: HookConfig = toml::from_str(document)
            .map_err(|err| HookConfigError::InvalidConfiguration(err.to_string()))?;

        if parsed.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(HookConfigError::InvalidConfiguration(
                "unsupported schemaVersion".to_string(),
            ));
        }

        for check in &parsed.checks {
            check.validate()?;
        }

        Ok(parsed)
    }

    /// Parse and validate configuration read from the provided path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HookConfigError> {
        let contents =
            fs::read_to_string(path.as_ref()).map_err(|err| HookConfigError::Io(err.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Build a registry with the configured hooks, loggers first.
    pub fn build_registry(&self) -> HookRegistry {
        let mut registry = HookRegistry::new();

        if self.log_call_start {
            registry.register_pre(CallStartLogger);
        }
        if self.log_call_result {
            registry.register_post(CallResultLogger);
        }

        for check in &self.checks {
            match check {
                CheckConfig::MemoEcho {
                    function_name,
                    memo_argument_index,
                    event_kind,
                } => {
                    registry.register_post(
                        Sip010MemoCheck::new()
                            .with_function_name(function_name.clone())
                            .with_memo_argument_index(*memo_argument_index)
                            .with_event_kind(event_kind.clone()),
                    );
                }
            }
        }

        registry
    }
}

fn default_enabled() -> bool {
    true
}

fn default_function_name() -> String {
    TRANSFER_FUNCTION.to_string()
}

fn default_memo_argument_index() -> usize {
    MEMO_ARGUMENT_INDEX
}

fn default_event_kind() -> String {
    PRINT_EVENT.to_string()
}
