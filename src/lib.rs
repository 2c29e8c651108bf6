//! `fuel-rates` library crate.
//!
//! The binary (`fuelrates`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the collect pipeline is reusable from both the scheduled and the
//!   ad hoc command-line entries

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
pub mod store;
