//! Hook registration and dispatch.

use std::fmt;
use std::time::Instant;

use tracing::warn;

use super::context::CallContext;
use super::record::{payload_hash, HookPhase, HookRunRecord};
use super::violation::Violation;

/// Hook invoked before a simulated call executes.
///
/// The context's `function_call` is not yet populated at this point.
pub trait PreCallHook: Send {
    fn name(&self) -> &str;

    fn before_call(&self, context: &CallContext) -> Result<(), Violation>;
}

/// Hook invoked after a simulated call executes, with result and events
/// populated.
pub trait PostCallHook: Send {
    fn name(&self) -> &str;

    fn after_call(&self, context: &CallContext) -> Result<(), Violation>;
}

/// Ordered collection of registered hooks.
///
/// Each phase dispatches in registration order; no ordering holds between
/// hooks beyond that. Registration is explicit rather than discovered from
/// naming conventions.
#[derive(Default)]
pub struct HookRegistry {
    pre: Vec<Box<dyn PreCallHook>>,
    post: Vec<Box<dyn PostCallHook>>,
}

/// Outcome of dispatching one phase against one call context.
///
/// Carries a record per executed hook and the first violation, if any.
/// Hooks registered after the violating one do not run.
#[derive(Debug)]
pub struct DispatchReport {
    pub phase: HookPhase,
    pub records: Vec<HookRunRecord>,
    pub violation: Option<Violation>,
}

impl DispatchReport {
    pub fn is_compliant(&self) -> bool {
        self.violation.is_none()
    }

    /// Collapse to the raise-immediately contract: the first violation, or
    /// nothing.
    pub fn into_result(self) -> Result<(), Violation> {
        match self.violation {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_pre(&mut self, hook: impl PreCallHook + 'static) {
        self.pre.push(Box::new(hook));
    }

    pub fn register_post(&mut self, hook: impl PostCallHook + 'static) {
        self.post.push(Box::new(hook));
    }

    pub fn pre_hook_names(&self) -> Vec<&str> {
        self.pre.iter().map(|hook| hook.name()).collect()
    }

    pub fn post_hook_names(&self) -> Vec<&str> {
        self.post.iter().map(|hook| hook.name()).collect()
    }

    /// Run the pre-call hooks against a context whose `function_call` is
    /// not yet populated.
    pub fn dispatch_pre(&self, context: &CallContext) -> DispatchReport {
        self.run_phase(
            HookPhase::Pre,
            context,
            self.pre
                .iter()
                .map(|hook| (hook.name(), Runner::Pre(hook.as_ref()))),
        )
    }

    /// Run the post-call hooks against a fully populated context.
    pub fn dispatch_post(&self, context: &CallContext) -> DispatchReport {
        self.run_phase(
            HookPhase::Post,
            context,
            self.post
                .iter()
                .map(|hook| (hook.name(), Runner::Post(hook.as_ref()))),
        )
    }

    fn run_phase<'a>(
        &'a self,
        phase: HookPhase,
        context: &CallContext,
        hooks: impl Iterator<Item = (&'a str, Runner<'a>)>,
    ) -> DispatchReport {
        let context_hash = payload_hash(context);
        let mut records = Vec::new();
        let mut violation = None;

        for (name, runner) in hooks {
            let started = Instant::now();
            let outcome = runner.run(context);

            let mut record =
                HookRunRecord::new(phase, name, context.selected_function.name.as_str());
            record.duration_ms = started.elapsed().as_millis();
            record.payload_hash = context_hash.clone();
            record.violation = outcome.as_ref().err().map(|raised| raised.to_string());
            records.push(record);

            if let Err(raised) = outcome {
                warn!(hook = name, violation = %raised, "hook raised a violation");
                violation = Some(raised);
                break;
            }
        }

        DispatchReport {
            phase,
            records,
            violation,
        }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("pre", &self.pre_hook_names())
            .field("post", &self.post_hook_names())
            .finish()
    }
}

enum Runner<'a> {
    Pre(&'a dyn PreCallHook),
    Post(&'a dyn PostCallHook),
}

impl Runner<'_> {
    fn run(&self, context: &CallContext) -> Result<(), Violation> {
        match self {
            Runner::Pre(hook) => hook.before_call(context),
            Runner::Post(hook) => hook.after_call(context),
        }
    }
}
