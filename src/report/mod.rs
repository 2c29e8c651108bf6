//! Formatted terminal output.
//!
//! We keep formatting code in one place so output changes stay localized.

pub mod format;

pub use format::*;
