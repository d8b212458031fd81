//! CLI argument definitions and parsing.
//!
//! The tool has a single command; every flag lives on `Cli`.

use clap::Parser;
use std::path::PathBuf;

/// Generate boilerplate code for coding challenges.
///
/// Writes an empty function named NAME with the given parameters to
/// `NAME.py` or `NAME.js` in the output directory.
#[derive(Parser, Debug)]
#[command(name = "code-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Function name
    ///
    /// Also the output file stem, so it may not contain `/` or `\`
    /// or be `.` or `..`; such names exit with code 2.
    #[arg(short = 'n', long = "name", value_name = "FUNCTION_NAME")]
    pub name: String,

    /// Programming language (python/javascript)
    #[arg(short = 'l', long = "language", value_name = "LANGUAGE")]
    pub language: String,

    /// Comma-separated function inputs
    #[arg(
        short = 'i',
        long = "inputs",
        value_name = "INPUTS",
        allow_hyphen_values = true
    )]
    pub inputs: String,

    /// Directory for the generated file
    ///
    /// Default: `generate.output_dir` from the config file, else the
    /// current working directory.
    #[arg(short = 'o', long = "output-dir", env = "CODE_CLI_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    ///
    /// Default: `general.default_format` from the config file, else pretty.
    #[arg(long = "format")]
    pub format: Option<String>,

    /// Path to the configuration file
    #[arg(long = "config", env = "CODE_CLI_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
