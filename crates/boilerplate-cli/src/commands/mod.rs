//! Command implementations for the code CLI.
//!
//! Each command module validates its inputs, performs the operation, and
//! formats output according to the requested format.

pub mod generate;
