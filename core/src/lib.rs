//! Verification hooks for a Clarity property-testing harness.
//!
//! The harness simulates contract calls with generated arguments and hands
//! each call's context to registered hooks. Pre-call hooks observe the
//! selected function and its arguments; post-call hooks additionally
//! observe the execution result and emitted events, and raise typed
//! violations when a declared invariant does not hold.

pub mod checks;
pub mod hooks;
