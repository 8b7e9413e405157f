//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod aggregate;
pub mod demo;
pub mod rsi;
pub mod sar;
pub mod simulate;
pub mod vix;
