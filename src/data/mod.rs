//! Upstream data access.

pub mod eia;

pub use eia::*;
