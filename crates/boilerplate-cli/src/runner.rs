//! Command execution and runtime logic.
//!
//! Contains logging initialization and the resolution of command-line flags
//! against the configuration file before the command runs.

use anyhow::{Result, anyhow};
use boilerplate_core::cli::{ExitCode, OutputFormat};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands;
use crate::commands::generate::GenerateOptions;
use crate::config::Config;
use crate::prompt::Prompter;

/// Initializes logging infrastructure.
///
/// `verbose` forces debug level. Otherwise `RUST_LOG` is honored, falling
/// back to `default_level`. Logs go to stderr so stdout stays parseable.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
pub fn init_logging(verbose: bool, default_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Resolves the output format: flag, then config file, then pretty.
///
/// # Errors
///
/// Returns an error if the chosen format name is unknown.
pub fn resolve_format(cli_format: Option<&str>, config: &Config) -> Result<OutputFormat> {
    cli_format
        .unwrap_or(&config.general.default_format)
        .parse::<OutputFormat>()
        .map_err(|e| anyhow!("{e}"))
}

/// Builds the generate command options from flags and configuration.
///
/// # Errors
///
/// Returns an error if no output directory is configured and the current
/// directory cannot be determined.
pub fn resolve_options(cli: Cli, config: &Config) -> Result<GenerateOptions> {
    let output_dir = match cli.output_dir.or_else(|| config.generate.output_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    Ok(GenerateOptions {
        name: cli.name,
        language: cli.language,
        inputs: cli.inputs,
        output_dir,
        assume_yes: cli.yes || config.generate.assume_yes,
    })
}

/// Executes the command described by `cli`.
///
/// # Errors
///
/// Returns an error if option resolution or command execution fails.
pub fn execute<P: Prompter + ?Sized>(cli: Cli, config: &Config, prompter: &P) -> Result<ExitCode> {
    let output_format = resolve_format(cli.format.as_deref(), config)?;
    let options = resolve_options(cli, config)?;

    debug!(
        "Generating into {} (format: {output_format})",
        options.output_dir.display()
    );

    let code = commands::generate::run(options, prompter, output_format)?;
    if !code.is_success() {
        debug!("Generation stopped with exit code {code}");
    }

    Ok(code)
}
