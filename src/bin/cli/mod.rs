//! CLI Module Organization
//!
//! - args: flag definitions and conversion into a run configuration
//! - commands: command execution
//! - output: console output

pub mod args;
pub mod commands;
pub mod output;

pub use args::Cli;
pub use commands::normalize_command;
