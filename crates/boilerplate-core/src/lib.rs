//! Core types and errors for boilerplate generation.
//!
//! This crate provides the foundational types shared by the code generator
//! and the command-line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`Language`, `FunctionName`, `GenerationRequest`)
//! - Error hierarchy with contextual information
//! - CLI value types (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod types;

pub mod cli;

pub use error::{Error, Result};
pub use types::{FunctionName, GenerationRequest, Language, split_inputs};
