//! Code CLI.
//!
//! Generates an empty function stub in Python or JavaScript and writes it to
//! `<name>.py` / `<name>.js`.
//!
//! # Examples
//!
//! ```bash
//! # Ask for confirmation, then write add.py
//! code-cli --name add --language python --inputs a,b
//!
//! # Non-interactive, into another directory
//! code-cli -n twoSum -l javascript -i nums,target --yes --output-dir ./solutions
//! ```

use anyhow::Result;
use clap::Parser;
use code_cli::cli::Cli;
use code_cli::runner::{execute, init_logging};
use code_cli::{Config, TerminalPrompter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose, &config.general.log_level)?;

    // Execute command and get exit code
    let exit_code = execute(cli, &config, &TerminalPrompter)?;

    // Exit with appropriate code
    std::process::exit(exit_code.as_i32());
}
