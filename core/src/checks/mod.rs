//! Invariant checks and diagnostic hooks shipped with the runtime.

pub mod call_logger;
pub mod sip010_memo;

pub use call_logger::{CallResultLogger, CallStartLogger};
pub use sip010_memo::Sip010MemoCheck;
