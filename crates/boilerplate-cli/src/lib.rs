//! Code CLI library.
//!
//! This library provides the core functionality for the `code-cli` tool,
//! exposing argument parsing, configuration, and the generate command so
//! they can be tested without a terminal.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;
pub mod prompt;
pub mod runner;

pub use config::Config;
pub use prompt::{Prompter, TerminalPrompter};
