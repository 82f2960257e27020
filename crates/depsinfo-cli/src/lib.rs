//! depsinfo CLI library components.
//!
//! Report acquisition, output formatting and command handlers for the
//! `depsinfo` binary. The binary itself is in `main.rs`.

pub mod commands;
pub mod formatters;
pub mod logging;
pub mod source;
