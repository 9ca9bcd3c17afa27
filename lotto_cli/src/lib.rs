//! Internal modules for the lotto shell.
//!
//! This library provides command parsing, configuration loading, rendering,
//! and command dispatch used by the lotto_cli binary.

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
