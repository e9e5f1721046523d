//! Clarity-style tagged values and their canonical hex encoding.
//!
//! The harness generates call arguments as tagged values; contracts under
//! test echo values back through events as canonical hex. This crate owns
//! both representations and the conversion between them.

pub mod codec;
pub mod value;

pub use codec::{from_canonical_hex, to_canonical_hex, CodecError};
pub use value::{ClarityValue, PrincipalData};
