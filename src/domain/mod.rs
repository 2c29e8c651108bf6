//! Core domain: reporting spans, period parsing, window derivation, and
//! record filtering.

pub mod filter;
pub mod period;
pub mod types;
pub mod window;

pub use types::*;
