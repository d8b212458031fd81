//! Function stub generation.
//!
//! Renders empty function definitions for the supported languages using
//! Handlebars templates compiled into the crate.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod template_engine;
pub mod types;

pub use generator::{BoilerplateGenerator, generate};
pub use types::GeneratedFile;
